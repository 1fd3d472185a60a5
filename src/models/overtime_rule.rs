//! Overtime rule model.
//!
//! An overtime rule governs the daily regular-hours threshold, the
//! multipliers applied to overtime on ordinary days, weekends, and
//! holidays, and the hard cap on payable overtime per day.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An overtime policy row.
///
/// Exactly one rule is considered active at a time by convention: the
/// lowest-id row flagged `is_active`. When no rule exists at all, the
/// engine substitutes [`OvertimeRule::fallback`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRule {
    /// Unique identifier for the rule.
    pub id: i64,
    /// Human-readable name of the rule.
    pub name: String,
    /// Hours per day paid at the regular rate before overtime begins.
    pub regular_hours_per_day: Decimal,
    /// Multiplier applied to overtime on ordinary weekdays.
    pub overtime_multiplier: Decimal,
    /// Multiplier applied to overtime on Saturdays and Sundays.
    pub weekend_multiplier: Decimal,
    /// Multiplier applied to overtime on holidays.
    pub holiday_multiplier: Decimal,
    /// Hard cap on payable overtime hours per day.
    pub max_overtime_per_day: Decimal,
    /// Whether this rule is currently in force.
    pub is_active: bool,
}

impl OvertimeRule {
    /// The hardcoded fallback rule used when no rule row exists.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::OvertimeRule;
    /// use rust_decimal::Decimal;
    ///
    /// let rule = OvertimeRule::fallback();
    /// assert_eq!(rule.regular_hours_per_day, Decimal::new(80, 1));
    /// assert_eq!(rule.max_overtime_per_day, Decimal::new(40, 1));
    /// ```
    pub fn fallback() -> Self {
        Self {
            id: 0,
            name: "Default overtime rule".to_string(),
            regular_hours_per_day: Decimal::new(80, 1),
            overtime_multiplier: Decimal::new(15, 1),
            weekend_multiplier: Decimal::new(20, 1),
            holiday_multiplier: Decimal::new(20, 1),
            max_overtime_per_day: Decimal::new(40, 1),
            is_active: true,
        }
    }
}

/// Fields for creating a new overtime rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOvertimeRule {
    /// Human-readable name of the rule.
    pub name: String,
    /// Hours per day paid at the regular rate.
    pub regular_hours_per_day: Decimal,
    /// Multiplier for weekday overtime.
    pub overtime_multiplier: Decimal,
    /// Multiplier for weekend overtime.
    pub weekend_multiplier: Decimal,
    /// Multiplier for holiday overtime.
    pub holiday_multiplier: Decimal,
    /// Hard cap on payable overtime hours per day.
    pub max_overtime_per_day: Decimal,
    /// Whether the rule starts out active. Defaults to true.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// A partial update to an overtime rule.
///
/// Fields left as `None` keep their current value (coalesce-on-null
/// patch semantics).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OvertimeRulePatch {
    /// New name, if changing.
    #[serde(default)]
    pub name: Option<String>,
    /// New regular-hours threshold, if changing.
    #[serde(default)]
    pub regular_hours_per_day: Option<Decimal>,
    /// New weekday overtime multiplier, if changing.
    #[serde(default)]
    pub overtime_multiplier: Option<Decimal>,
    /// New weekend multiplier, if changing.
    #[serde(default)]
    pub weekend_multiplier: Option<Decimal>,
    /// New holiday multiplier, if changing.
    #[serde(default)]
    pub holiday_multiplier: Option<Decimal>,
    /// New overtime cap, if changing.
    #[serde(default)]
    pub max_overtime_per_day: Option<Decimal>,
    /// New active flag, if changing.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl OvertimeRule {
    /// Applies a patch, replacing only the fields the patch carries.
    pub fn apply_patch(&mut self, patch: OvertimeRulePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(v) = patch.regular_hours_per_day {
            self.regular_hours_per_day = v;
        }
        if let Some(v) = patch.overtime_multiplier {
            self.overtime_multiplier = v;
        }
        if let Some(v) = patch.weekend_multiplier {
            self.weekend_multiplier = v;
        }
        if let Some(v) = patch.holiday_multiplier {
            self.holiday_multiplier = v;
        }
        if let Some(v) = patch.max_overtime_per_day {
            self.max_overtime_per_day = v;
        }
        if let Some(v) = patch.is_active {
            self.is_active = v;
        }
    }
}
