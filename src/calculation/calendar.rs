//! Calendar and working-day resolution.
//!
//! This module determines, for a given month, which days are Sundays,
//! which are holidays, and how many working days remain. Two holiday
//! views coexist on purpose:
//!
//! - the **monthly aggregate** ([`HolidayCalendar::month_summary`])
//!   considers only one-off and yearly-recurring holidays and is used as
//!   the payroll denominator;
//! - the **per-day check** ([`HolidayCalendar::is_holiday`]) considers
//!   all four recurrence kinds and is used for overtime multiplier
//!   selection.
//!
//! Similarly, the monthly aggregate excludes Sundays only, while
//! [`is_weekend`] treats Saturday and Sunday as weekend for multiplier
//! selection. Both divergences are inherited product behavior and must
//! not be unified here.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Holiday, Recurrence};

/// Returns true iff the date falls on a Saturday or Sunday.
///
/// Used for overtime multiplier selection only; the monthly working-day
/// aggregate excludes Sundays alone.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2026-03-14 is a Saturday, 2026-03-16 a Monday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()));
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the first day of the given month.
pub fn month_start(month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("validated month/year")
}

/// Returns the last day of the given month.
pub fn month_end(month: u32, year: i32) -> NaiveDate {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.expect("validated month/year")
        .pred_opt()
        .expect("month end exists")
}

/// Returns the number of calendar days in the given month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    month_end(month, year).day()
}

/// Month-level calendar context for payroll computation.
///
/// Satisfies `working_days + sundays + public_holidays == days_in_month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The month (1-12).
    pub month: u32,
    /// The year.
    pub year: i32,
    /// Calendar days in the month.
    pub days_in_month: u32,
    /// Count of Sundays in the month.
    pub sundays: u32,
    /// Count of holidays in the monthly aggregate.
    pub public_holidays: u32,
    /// `days_in_month - sundays - public_holidays`.
    pub working_days: u32,
    /// The resolved holiday dates behind `public_holidays`.
    pub holiday_dates: BTreeSet<NaiveDate>,
}

impl MonthSummary {
    /// Counts working days in `[from, to]` (inclusive).
    ///
    /// A day counts when it is neither a Sunday nor one of the month's
    /// aggregate holiday dates. Used to pro-rate employees deactivated
    /// mid-month.
    pub fn effective_working_days(&self, from: NaiveDate, to: NaiveDate) -> u32 {
        let mut count = 0;
        let mut day = from;
        while day <= to {
            if day.weekday() != Weekday::Sun && !self.holiday_dates.contains(&day) {
                count += 1;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        count
    }
}

/// An immutable snapshot of configured holidays.
///
/// Built once per computation from the holiday store so that a payroll
/// run never observes a mid-run holiday change.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Creates a calendar over the given holiday snapshot.
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    /// Returns true if any configured holiday falls on the given date.
    ///
    /// All four recurrence kinds are considered. This is deliberately
    /// broader than the monthly aggregate and is used only for per-day
    /// overtime multiplier selection.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.matches(date))
    }

    /// Resolves the month-level calendar context.
    ///
    /// The aggregate counts one-off holidays falling within the month
    /// and yearly-recurring holidays whose month matches. Holidays that
    /// land on a Sunday are excluded so they are not subtracted twice.
    /// Weekly and monthly recurrences never enter the aggregate.
    pub fn month_summary(&self, month: u32, year: i32) -> MonthSummary {
        let start = month_start(month, year);
        let end = month_end(month, year);
        let days_in_month = end.day();

        let mut sundays = 0;
        let mut day = start;
        while day <= end {
            if day.weekday() == Weekday::Sun {
                sundays += 1;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }

        let mut holiday_dates = BTreeSet::new();
        for holiday in &self.holidays {
            match holiday.recurrence {
                Recurrence::None => {
                    if let Some(date) = holiday.date {
                        if date >= start && date <= end && date.weekday() != Weekday::Sun {
                            holiday_dates.insert(date);
                        }
                    }
                }
                Recurrence::Yearly => {
                    if holiday.recurrence_month == month {
                        if let Some(date) =
                            NaiveDate::from_ymd_opt(year, month, holiday.recurrence_day)
                        {
                            if date.weekday() != Weekday::Sun {
                                holiday_dates.insert(date);
                            }
                        }
                    }
                }
                // Weekly/monthly recurrences stay out of the monthly
                // aggregate; they still count in is_holiday().
                Recurrence::Weekly | Recurrence::Monthly => {}
            }
        }

        let public_holidays = holiday_dates.len() as u32;
        MonthSummary {
            month,
            year,
            days_in_month,
            sundays,
            public_holidays,
            working_days: days_in_month - sundays - public_holidays,
            holiday_dates,
        }
    }
}
