//! Pay policy types.
//!
//! These structures are deserialized from the policy YAML file and are
//! also constructible in code via [`PayPolicy::default`] for tests and
//! deployments that run without a policy file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{OvertimeRule, Role};

/// Per-day loss-of-pay rates keyed by role.
///
/// The role set is closed: supervisors have their own rate and every
/// other payroll-eligible role falls back to the employee rate. Admins
/// never reach a loss-of-pay computation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LopRates {
    /// Rate for regular employees (and the default for other roles).
    pub employee: Decimal,
    /// Rate for supervisors.
    pub supervisor: Decimal,
}

impl LopRates {
    /// Returns the per-day loss-of-pay rate for a role.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::PayPolicy;
    /// use payroll_engine::models::Role;
    /// use rust_decimal::Decimal;
    ///
    /// let policy = PayPolicy::default();
    /// assert_eq!(policy.lop_rates.rate_for(Role::Supervisor), Decimal::new(500, 0));
    /// assert_eq!(policy.lop_rates.rate_for(Role::Employee), Decimal::new(400, 0));
    /// ```
    pub fn rate_for(&self, role: Role) -> Decimal {
        match role {
            Role::Supervisor => self.supervisor,
            _ => self.employee,
        }
    }
}

/// Fallback overtime rule as it appears in the policy file.
///
/// The file carries only the calculation fields; id, name, and active
/// flag are fixed by [`FallbackRuleConfig::into_rule`].
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackRuleConfig {
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
}

impl FallbackRuleConfig {
    /// Converts the file representation into a full [`OvertimeRule`].
    pub fn into_rule(self) -> OvertimeRule {
        OvertimeRule {
            id: 0,
            name: "Default overtime rule".to_string(),
            regular_hours_per_day: self.regular_hours_per_day,
            overtime_multiplier: self.overtime_multiplier,
            weekend_multiplier: self.weekend_multiplier,
            holiday_multiplier: self.holiday_multiplier,
            max_overtime_per_day: self.max_overtime_per_day,
            is_active: true,
        }
    }
}

/// Policy file structure as deserialized from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Loss-of-pay rates by role.
    pub lop_rates: LopRates,
    /// Fallback overtime rule used when no rule row exists.
    pub fallback_rule: FallbackRuleConfig,
}

/// The complete pay policy snapshot used by the engine.
#[derive(Debug, Clone)]
pub struct PayPolicy {
    /// Loss-of-pay rates by role.
    pub lop_rates: LopRates,
    /// Overtime rule substituted when the rule store has no active row.
    pub fallback_rule: OvertimeRule,
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            lop_rates: LopRates {
                employee: Decimal::new(400, 0),
                supervisor: Decimal::new(500, 0),
            },
            fallback_rule: OvertimeRule::fallback(),
        }
    }
}

impl From<PolicyFile> for PayPolicy {
    fn from(file: PolicyFile) -> Self {
        Self {
            lop_rates: file.lop_rates,
            fallback_rule: file.fallback_rule.into_rule(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_policy_lop_rates() {
        let policy = PayPolicy::default();
        assert_eq!(policy.lop_rates.employee, dec("400"));
        assert_eq!(policy.lop_rates.supervisor, dec("500"));
    }

    #[test]
    fn test_rate_for_supervisor() {
        let policy = PayPolicy::default();
        assert_eq!(policy.lop_rates.rate_for(Role::Supervisor), dec("500"));
    }

    #[test]
    fn test_rate_for_employee_is_default() {
        let policy = PayPolicy::default();
        assert_eq!(policy.lop_rates.rate_for(Role::Employee), dec("400"));
        assert_eq!(policy.lop_rates.rate_for(Role::Admin), dec("400"));
    }

    #[test]
    fn test_default_fallback_rule_matches_constant() {
        let policy = PayPolicy::default();
        assert_eq!(policy.fallback_rule, OvertimeRule::fallback());
    }

    #[test]
    fn test_policy_file_conversion() {
        let yaml = r#"
lop_rates:
  employee: "350"
  supervisor: "550"
fallback_rule:
  regular_hours_per_day: "7.5"
  overtime_multiplier: "1.25"
  weekend_multiplier: "1.75"
  holiday_multiplier: "2.5"
  max_overtime_per_day: "3.0"
"#;
        let file: PolicyFile = serde_yaml::from_str(yaml).unwrap();
        let policy: PayPolicy = file.into();
        assert_eq!(policy.lop_rates.employee, dec("350"));
        assert_eq!(policy.fallback_rule.regular_hours_per_day, dec("7.5"));
        assert!(policy.fallback_rule.is_active);
    }
}
