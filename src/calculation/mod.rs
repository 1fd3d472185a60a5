//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: calendar and
//! working-day resolution, the daily regular/overtime hours split,
//! monthly overtime pay with per-day multipliers, and the per-employee
//! payroll preview math (pro-ration, loss-of-pay, net salary).

mod calendar;
mod hours;
mod overtime_pay;
mod preview;

pub use calendar::{days_in_month, is_weekend, month_end, month_start, HolidayCalendar, MonthSummary};
pub use hours::{daily_hours, DailyHours};
pub use overtime_pay::{overtime_pay, MonthlyOvertime};
pub use preview::{compute_preview_item, hourly_rate, payable_window, prorate_salary};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary or hour value to 2 decimal places, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
