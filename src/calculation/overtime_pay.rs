//! Monthly overtime pay aggregation.
//!
//! Sums an employee's stored per-day overtime hours for a month,
//! re-deriving the multiplier from each day's weekend/holiday status.
//! The hourly rate is the caller-supplied flat full-month rate
//! (`base_salary / (working_days * 8)`), reused for every day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OvertimeRule;

use super::calendar::{is_weekend, HolidayCalendar};
use super::round2;

/// Aggregated overtime for one employee over one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyOvertime {
    /// Sum of payable overtime hours across the month.
    pub total_overtime_hours: Decimal,
    /// Sum of per-day overtime amounts across the month.
    pub total_overtime_amount: Decimal,
}

impl MonthlyOvertime {
    /// The zero aggregate, for employees with no overtime.
    pub fn zero() -> Self {
        Self {
            total_overtime_hours: Decimal::ZERO,
            total_overtime_amount: Decimal::ZERO,
        }
    }
}

/// Computes overtime pay from stored per-day overtime hours.
///
/// Only days with positive overtime contribute. Each day's amount is
/// `hours * hourly_rate * multiplier` where the multiplier is re-derived
/// from that day's holiday/weekend status under the given rule — not
/// read back from attendance. Totals are rounded to 2 decimal places.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{overtime_pay, HolidayCalendar};
/// use payroll_engine::models::OvertimeRule;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calendar = HolidayCalendar::new(vec![]);
/// let rule = OvertimeRule::fallback();
/// // 2026-03-11 is a Wednesday
/// let days = vec![(
///     NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
///     Decimal::from_str("2.0").unwrap(),
/// )];
/// let hourly_rate = Decimal::from_str("100").unwrap();
///
/// let total = overtime_pay(&days, hourly_rate, &rule, &calendar);
/// // 2.0h * 100 * 1.5
/// assert_eq!(total.total_overtime_amount, Decimal::from_str("300.00").unwrap());
/// ```
pub fn overtime_pay(
    daily_overtime: &[(NaiveDate, Decimal)],
    hourly_rate: Decimal,
    rule: &OvertimeRule,
    calendar: &HolidayCalendar,
) -> MonthlyOvertime {
    let mut total_hours = Decimal::ZERO;
    let mut total_amount = Decimal::ZERO;

    for &(date, hours) in daily_overtime {
        if hours <= Decimal::ZERO {
            continue;
        }

        let multiplier = if calendar.is_holiday(date) {
            rule.holiday_multiplier
        } else if is_weekend(date) {
            rule.weekend_multiplier
        } else {
            rule.overtime_multiplier
        };

        total_hours += hours;
        total_amount += hours * hourly_rate * multiplier;
    }

    MonthlyOvertime {
        total_overtime_hours: round2(total_hours),
        total_overtime_amount: round2(total_amount),
    }
}
