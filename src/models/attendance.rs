//! Attendance model.
//!
//! Attendance records are written by the attendance subsystem at check-in
//! and check-out time; the payroll engine reads them to count presence and
//! to sum stored overtime hours. Records are unique per (user, date).

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Presence status of an attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee was present.
    Present,
    /// The employee was absent.
    Absent,
    /// The employee was on approved leave.
    Leave,
}

/// A per-user, per-date attendance record.
///
/// `regular_hours` and `overtime_hours` are derived at check-out time from
/// the active overtime rule; payroll reads the stored values rather than
/// recomputing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Unique identifier for the record.
    pub id: i64,
    /// The user this record belongs to.
    pub user_id: i64,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// Check-in timestamp, if the employee checked in.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Check-out timestamp, if the employee checked out.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Presence status for the day.
    pub status: AttendanceStatus,
    /// True once both check-in and check-out are recorded.
    pub is_complete: bool,
    /// Hours paid at the regular rate, written at check-out.
    pub regular_hours: Decimal,
    /// Overtime hours (already capped), written at check-out.
    pub overtime_hours: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_attendance() {
        let json = r#"{
            "id": 100,
            "user_id": 10,
            "date": "2026-03-02",
            "check_in": "2026-03-02T09:00:00",
            "check_out": "2026-03-02T18:00:00",
            "status": "present",
            "is_complete": true,
            "regular_hours": "8.00",
            "overtime_hours": "1.00"
        }"#;

        let record: Attendance = serde_json::from_str(json).unwrap();
        assert_eq!(record.user_id, 10);
        assert_eq!(record.status, AttendanceStatus::Present);
        assert!(record.is_complete);
        assert_eq!(record.overtime_hours, Decimal::new(100, 2));
    }

    #[test]
    fn test_deserialize_open_attendance() {
        let json = r#"{
            "id": 101,
            "user_id": 10,
            "date": "2026-03-03",
            "check_in": "2026-03-03T09:00:00",
            "status": "present",
            "is_complete": false,
            "regular_hours": "0",
            "overtime_hours": "0"
        }"#;

        let record: Attendance = serde_json::from_str(json).unwrap();
        assert!(record.check_out.is_none());
        assert!(!record.is_complete);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"present\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Absent).unwrap(),
            "\"absent\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Leave).unwrap(),
            "\"leave\""
        );
    }
}
