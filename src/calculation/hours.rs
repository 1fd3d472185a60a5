//! Daily hours split between regular time and overtime.
//!
//! Converts a check-in/check-out pair into regular and overtime hours
//! under the active overtime rule, selecting the multiplier from the
//! day's holiday/weekend status. This runs at check-out time; payroll
//! later reads the stored per-day overtime aggregate rather than
//! recomputing the split.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OvertimeRule;

use super::calendar::{is_weekend, HolidayCalendar};
use super::round2;

/// The result of splitting one day's worked time.
///
/// All hour values are rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    /// Total hours between check-in and check-out (uncapped).
    pub total_hours: Decimal,
    /// Hours payable at the regular rate, capped at the rule threshold.
    pub regular_hours: Decimal,
    /// Payable overtime hours, hard-capped at the rule maximum.
    pub overtime_hours: Decimal,
    /// The overtime multiplier selected for this day.
    pub multiplier: Decimal,
    /// Whether the day is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Whether the day matches any configured holiday.
    pub is_holiday: bool,
}

impl DailyHours {
    fn zero() -> Self {
        Self {
            total_hours: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            multiplier: Decimal::ZERO,
            is_weekend: false,
            is_holiday: false,
        }
    }
}

/// Splits a check-in/check-out pair into regular and overtime hours.
///
/// # Behavior
///
/// - Either timestamp missing → all-zero result.
/// - `total_hours = max(0, check_out - check_in)`, uncapped.
/// - `regular_hours = min(total_hours, regular_hours_per_day)`.
/// - `overtime_hours = min(max(0, total - regular_hours_per_day),
///   max_overtime_per_day)` — excess beyond the cap is never payable.
/// - Multiplier precedence: holiday, then weekend (Saturday or Sunday),
///   then the ordinary overtime multiplier.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{daily_hours, HolidayCalendar};
/// use payroll_engine::models::OvertimeRule;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let calendar = HolidayCalendar::new(vec![]);
/// let rule = OvertimeRule::fallback();
/// // 2026-03-11 is a Wednesday
/// let date = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap();
/// let check_in = date.and_hms_opt(9, 0, 0).unwrap();
/// let check_out = date.and_hms_opt(18, 0, 0).unwrap();
///
/// let split = daily_hours(Some(check_in), Some(check_out), date, &rule, &calendar);
/// assert_eq!(split.regular_hours, Decimal::new(800, 2));
/// assert_eq!(split.overtime_hours, Decimal::new(100, 2));
/// ```
pub fn daily_hours(
    check_in: Option<NaiveDateTime>,
    check_out: Option<NaiveDateTime>,
    date: NaiveDate,
    rule: &OvertimeRule,
    calendar: &HolidayCalendar,
) -> DailyHours {
    let (check_in, check_out) = match (check_in, check_out) {
        (Some(i), Some(o)) => (i, o),
        _ => return DailyHours::zero(),
    };

    let minutes = (check_out - check_in).num_minutes().max(0);
    let total_hours = round2(Decimal::new(minutes, 0) / Decimal::new(60, 0));

    let holiday = calendar.is_holiday(date);
    let weekend = is_weekend(date);
    let multiplier = if holiday {
        rule.holiday_multiplier
    } else if weekend {
        rule.weekend_multiplier
    } else {
        rule.overtime_multiplier
    };

    let regular_hours = round2(total_hours.min(rule.regular_hours_per_day));
    let excess = (total_hours - rule.regular_hours_per_day).max(Decimal::ZERO);
    let overtime_hours = round2(excess.min(rule.max_overtime_per_day));

    DailyHours {
        total_hours,
        regular_hours,
        overtime_hours,
        multiplier,
        is_weekend: weekend,
        is_holiday: holiday,
    }
}
