//! Payroll run, line item, preview, and payslip models.
//!
//! A [`PayrollPreview`] is the side-effect-free result of computing payroll
//! for a period. Persisting a preview yields a [`PayrollRun`] header with
//! immutable [`PayrollLineItem`]s; each line item carries a denormalized
//! [`PayrollLineItemDetails`] snapshot so payslips can be reconstructed
//! later regardless of rule or holiday changes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// Lifecycle status of a payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollRunStatus {
    /// The run has been generated and is immutable.
    Generated,
}

/// A finalized payroll run for one (month, year) period.
///
/// At most one run exists per period; a second generation attempt fails
/// with a conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for the run.
    pub id: Uuid,
    /// The month of the period (1-12).
    pub month: u32,
    /// The year of the period.
    pub year: i32,
    /// Lifecycle status.
    pub status: PayrollRunStatus,
    /// Sum of net salaries across all line items.
    pub total_payout: Decimal,
    /// The user who triggered generation.
    pub generated_by: i64,
    /// When the run was generated.
    pub generated_at: DateTime<Utc>,
}

/// Denormalized calendar and policy context stored with each line item.
///
/// This snapshot is a deliberate second copy of role and calendar data:
/// its purpose is immutability against later schema or policy drift, so
/// it is never normalized away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollLineItemDetails {
    /// Calendar days in the month.
    pub days_in_month: u32,
    /// Full-month working days used as the pro-ration denominator.
    pub working_days: u32,
    /// Absent days charged against the employee.
    pub absent_days: u32,
    /// Sundays in the month.
    pub sundays: u32,
    /// Holidays counted in the monthly aggregate.
    pub public_holidays: u32,
    /// The per-day loss-of-pay rate applied.
    pub lop_rate: Decimal,
    /// The total loss-of-pay deduction.
    pub lop_deduction: Decimal,
    /// The employee's role at generation time.
    pub role: Role,
}

/// One employee's immutable share of a finalized payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollLineItem {
    /// Unique identifier for the line item.
    pub id: Uuid,
    /// The run this item belongs to.
    pub payroll_id: Uuid,
    /// The employee this item pays.
    pub user_id: i64,
    /// The employee's monthly base salary at generation time.
    pub base_salary: Decimal,
    /// Days the employee was present (Sundays excluded).
    pub present_days: u32,
    /// Total loss-of-pay deduction.
    pub total_attendance_deduction: Decimal,
    /// Legacy lunch-approval total; always zero.
    pub approved_lunch_total: Decimal,
    /// Total payable overtime hours for the month.
    pub overtime_hours: Decimal,
    /// Total overtime amount for the month.
    pub overtime_amount: Decimal,
    /// Pro-rated gross salary.
    pub gross_salary: Decimal,
    /// Net salary: `max(0, gross - lop + overtime)`.
    pub net_salary: Decimal,
    /// Denormalized calendar and policy snapshot.
    pub details: PayrollLineItemDetails,
}

/// One employee's row in a payroll preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollPreviewItem {
    /// The employee being paid.
    pub user_id: i64,
    /// The employee's display name.
    pub name: String,
    /// The employee's login name.
    pub username: String,
    /// The employee's role.
    pub role: Role,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Working days attributable to this employee (pro-ration numerator).
    pub effective_working_days: u32,
    /// Days present, Sundays excluded.
    pub present_days: u32,
    /// `max(0, effective_working_days - present_days)`.
    pub absent_days: u32,
    /// The per-day loss-of-pay rate for the employee's role.
    pub lop_rate: Decimal,
    /// `absent_days * lop_rate`.
    pub lop_deduction: Decimal,
    /// Total payable overtime hours for the month.
    pub overtime_hours: Decimal,
    /// Total overtime amount for the month.
    pub overtime_amount: Decimal,
    /// Pro-rated gross salary.
    pub gross_salary: Decimal,
    /// `max(0, gross - lop + overtime)`, rounded to 2 decimals.
    pub net_salary: Decimal,
}

/// The computed payroll for one period, before (or without) persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollPreview {
    /// The month of the period (1-12).
    pub month: u32,
    /// The year of the period.
    pub year: i32,
    /// Calendar days in the month.
    pub days_in_month: u32,
    /// Full-month working days.
    pub working_days: u32,
    /// Sundays in the month.
    pub sundays: u32,
    /// Holidays counted in the monthly aggregate.
    pub public_holidays: u32,
    /// Resolved holiday dates for the monthly aggregate.
    pub holiday_dates: Vec<NaiveDate>,
    /// Per-employee rows.
    pub items: Vec<PayrollPreviewItem>,
    /// Sum of net salaries, rounded to 2 decimals.
    pub total_payout: Decimal,
}

/// One row of an employee's payroll history: a stored line item joined
/// with its run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollHistoryEntry {
    /// The run the line item belongs to.
    pub run: PayrollRun,
    /// The employee's line item in that run.
    pub item: PayrollLineItem,
}

/// Where the figures in a payslip came from.
///
/// Figures from a live preview are not stable: they can change if
/// attendance, holiday, or rule data changes before the run is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayslipSource {
    /// Figures frozen in a finalized payroll run.
    Finalized {
        /// The run the figures came from.
        payroll_id: Uuid,
        /// When the run was generated.
        generated_at: DateTime<Utc>,
    },
    /// Figures computed on the fly; no run exists yet.
    LivePreview,
}

/// A payslip projection for one employee and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipView {
    /// The employee the payslip belongs to.
    pub user_id: i64,
    /// The employee's display name.
    pub name: String,
    /// The month of the period (1-12).
    pub month: u32,
    /// The year of the period.
    pub year: i32,
    /// The employee's role.
    pub role: Role,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Full-month working days.
    pub working_days: u32,
    /// Days present.
    pub present_days: u32,
    /// Days absent.
    pub absent_days: u32,
    /// The per-day loss-of-pay rate.
    pub lop_rate: Decimal,
    /// The total loss-of-pay deduction.
    pub lop_deduction: Decimal,
    /// Total payable overtime hours.
    pub overtime_hours: Decimal,
    /// Total overtime amount.
    pub overtime_amount: Decimal,
    /// Pro-rated gross salary.
    pub gross_salary: Decimal,
    /// Net salary.
    pub net_salary: Decimal,
    /// Whether the figures are frozen or live.
    pub source: PayslipSource,
}
