//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod holiday;
mod overtime_rule;
mod payroll;

pub use attendance::{Attendance, AttendanceStatus};
pub use employee::{Employee, Role};
pub use holiday::{Holiday, Recurrence};
pub use overtime_rule::OvertimeRule;
pub use overtime_rule::{NewOvertimeRule, OvertimeRulePatch};
pub use payroll::{
    PayrollHistoryEntry, PayrollLineItem, PayrollLineItemDetails, PayrollPreview,
    PayrollPreviewItem, PayrollRun, PayrollRunStatus, PayslipSource, PayslipView,
};
