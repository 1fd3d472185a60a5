//! Holiday model and recurrence rules.
//!
//! Holidays may be one-off dates or recurring patterns. How a holiday
//! matches a calendar date depends on its [`Recurrence`] kind.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a holiday repeats over the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    /// A one-off holiday on a fixed date.
    None,
    /// Repeats every week on `recurrence_day` (0 = Sunday .. 6 = Saturday).
    Weekly,
    /// Repeats every month on day-of-month `recurrence_day`.
    Monthly,
    /// Repeats every year on `recurrence_month`/`recurrence_day`.
    Yearly,
}

/// A configured holiday.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, Recurrence};
/// use chrono::NaiveDate;
///
/// let republic_day = Holiday {
///     id: 1,
///     name: "Republic Day".to_string(),
///     date: None,
///     recurrence: Recurrence::Yearly,
///     recurrence_day: 26,
///     recurrence_month: 1,
/// };
/// assert!(republic_day.matches(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
/// assert!(!republic_day.matches(NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier for the holiday.
    pub id: i64,
    /// The name of the holiday (e.g., "Republic Day").
    pub name: String,
    /// The fixed date for one-off holidays; ignored for recurring kinds.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// How this holiday repeats.
    pub recurrence: Recurrence,
    /// Day component of the recurrence (weekday, day-of-month, or day).
    #[serde(default)]
    pub recurrence_day: u32,
    /// Month component of the recurrence; only meaningful for yearly.
    #[serde(default)]
    pub recurrence_month: u32,
}

impl Holiday {
    /// Returns true if this holiday falls on the given date.
    ///
    /// Each recurrence kind is checked independently:
    /// - `None`: the fixed `date` equals the given date
    /// - `Weekly`: the date's weekday equals `recurrence_day` (0 = Sunday)
    /// - `Monthly`: the date's day-of-month equals `recurrence_day`
    /// - `Yearly`: both month and day match the recurrence fields
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self.recurrence {
            Recurrence::None => self.date == Some(date),
            Recurrence::Weekly => date.weekday().num_days_from_sunday() == self.recurrence_day,
            Recurrence::Monthly => date.day() == self.recurrence_day,
            Recurrence::Yearly => {
                date.month() == self.recurrence_month && date.day() == self.recurrence_day
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_one_off_holiday_matches_exact_date() {
        let holiday = Holiday {
            id: 1,
            name: "Founders Day".to_string(),
            date: Some(make_date("2026-03-10")),
            recurrence: Recurrence::None,
            recurrence_day: 0,
            recurrence_month: 0,
        };
        assert!(holiday.matches(make_date("2026-03-10")));
        assert!(!holiday.matches(make_date("2026-03-11")));
    }

    #[test]
    fn test_one_off_holiday_without_date_matches_nothing() {
        let holiday = Holiday {
            id: 1,
            name: "Broken".to_string(),
            date: None,
            recurrence: Recurrence::None,
            recurrence_day: 0,
            recurrence_month: 0,
        };
        assert!(!holiday.matches(make_date("2026-03-10")));
    }

    #[test]
    fn test_weekly_holiday_matches_weekday() {
        // recurrence_day 6 = Saturday; 2026-03-14 is a Saturday
        let holiday = Holiday {
            id: 2,
            name: "Weekly Off".to_string(),
            date: None,
            recurrence: Recurrence::Weekly,
            recurrence_day: 6,
            recurrence_month: 0,
        };
        assert!(holiday.matches(make_date("2026-03-14")));
        assert!(!holiday.matches(make_date("2026-03-13"))); // Friday
    }

    #[test]
    fn test_weekly_sunday_convention_is_zero() {
        // 2026-03-15 is a Sunday
        let holiday = Holiday {
            id: 2,
            name: "Sunday Off".to_string(),
            date: None,
            recurrence: Recurrence::Weekly,
            recurrence_day: 0,
            recurrence_month: 0,
        };
        assert!(holiday.matches(make_date("2026-03-15")));
    }

    #[test]
    fn test_monthly_holiday_matches_day_of_month() {
        let holiday = Holiday {
            id: 3,
            name: "Payday Off".to_string(),
            date: None,
            recurrence: Recurrence::Monthly,
            recurrence_day: 1,
            recurrence_month: 0,
        };
        assert!(holiday.matches(make_date("2026-03-01")));
        assert!(holiday.matches(make_date("2026-07-01")));
        assert!(!holiday.matches(make_date("2026-03-02")));
    }

    #[test]
    fn test_yearly_holiday_matches_month_and_day() {
        let holiday = Holiday {
            id: 4,
            name: "Independence Day".to_string(),
            date: None,
            recurrence: Recurrence::Yearly,
            recurrence_day: 15,
            recurrence_month: 8,
        };
        assert!(holiday.matches(make_date("2026-08-15")));
        assert!(holiday.matches(make_date("2027-08-15")));
        assert!(!holiday.matches(make_date("2026-09-15")));
        assert!(!holiday.matches(make_date("2026-08-16")));
    }

    #[test]
    fn test_recurrence_serialization() {
        assert_eq!(serde_json::to_string(&Recurrence::None).unwrap(), "\"none\"");
        assert_eq!(
            serde_json::to_string(&Recurrence::Weekly).unwrap(),
            "\"weekly\""
        );
        assert_eq!(
            serde_json::to_string(&Recurrence::Monthly).unwrap(),
            "\"monthly\""
        );
        assert_eq!(
            serde_json::to_string(&Recurrence::Yearly).unwrap(),
            "\"yearly\""
        );
    }

    #[test]
    fn test_deserialize_holiday_with_defaults() {
        let json = r#"{
            "id": 5,
            "name": "Diwali",
            "date": "2026-11-08",
            "recurrence": "none"
        }"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, Some(make_date("2026-11-08")));
        assert_eq!(holiday.recurrence_day, 0);
        assert_eq!(holiday.recurrence_month, 0);
    }
}
