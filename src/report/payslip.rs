//! Payslip projections.
//!
//! A payslip is a read model assembled either from a finalized run's
//! frozen line item or from a live preview row. Both projections produce
//! the same shape; [`crate::models::PayslipSource`] tells them apart.

use crate::models::{PayrollLineItem, PayrollPreviewItem, PayrollRun, PayslipSource, PayslipView};

/// Projects a payslip from a finalized run's line item.
///
/// All figures come from the frozen line item and its denormalized
/// details snapshot; only the display name is read from the live
/// directory (an empty string for users no longer present there).
pub fn payslip_from_line_item(
    item: &PayrollLineItem,
    name: String,
    run: &PayrollRun,
) -> PayslipView {
    PayslipView {
        user_id: item.user_id,
        name,
        month: run.month,
        year: run.year,
        role: item.details.role,
        base_salary: item.base_salary,
        working_days: item.details.working_days,
        present_days: item.present_days,
        absent_days: item.details.absent_days,
        lop_rate: item.details.lop_rate,
        lop_deduction: item.details.lop_deduction,
        overtime_hours: item.overtime_hours,
        overtime_amount: item.overtime_amount,
        gross_salary: item.gross_salary,
        net_salary: item.net_salary,
        source: PayslipSource::Finalized {
            payroll_id: run.id,
            generated_at: run.generated_at,
        },
    }
}

/// Projects a payslip from a live preview row.
///
/// For pro-rated employees the working days shown are the employee's
/// effective working days, matching what the pay was computed from.
pub fn payslip_from_preview(item: &PayrollPreviewItem, month: u32, year: i32) -> PayslipView {
    PayslipView {
        user_id: item.user_id,
        name: item.name.clone(),
        month,
        year,
        role: item.role,
        base_salary: item.base_salary,
        working_days: item.effective_working_days,
        present_days: item.present_days,
        absent_days: item.absent_days,
        lop_rate: item.lop_rate,
        lop_deduction: item.lop_deduction,
        overtime_hours: item.overtime_hours,
        overtime_amount: item.overtime_amount,
        gross_salary: item.gross_salary,
        net_salary: item.net_salary,
        source: PayslipSource::LivePreview,
    }
}
