//! Per-employee payroll preview math.
//!
//! Pro-ration for mid-month departures, loss-of-pay deduction, and the
//! net salary formula. The orchestration that fetches employees and
//! attendance lives in the engine; everything here is a pure function.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Employee, PayrollPreviewItem};

use super::calendar::{month_end, month_start, MonthSummary};
use super::overtime_pay::MonthlyOvertime;
use super::round2;

/// Hours per working day used for the hourly-rate denominator.
const HOURS_PER_WORKING_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Determines the payable window for an employee within the month.
///
/// Returns `None` when the employee was deactivated before the month
/// started (they belong to an earlier payroll period). Otherwise returns
/// the effective end date and the effective working days from the month
/// start to that date.
///
/// An employee deactivated mid-month is paid up to the deactivation
/// date; everyone else gets the full month.
pub fn payable_window(employee: &Employee, summary: &MonthSummary) -> Option<(NaiveDate, u32)> {
    let start = month_start(summary.month, summary.year);
    let end = month_end(summary.month, summary.year);

    if !employee.is_active {
        if let Some(deactivated_at) = employee.deactivated_at {
            let left_on = deactivated_at.date();
            if left_on < start {
                return None;
            }
            if left_on < end {
                return Some((left_on, summary.effective_working_days(start, left_on)));
            }
        }
    }

    Some((end, summary.working_days))
}

/// Pro-rates a base salary by effective working days.
///
/// Returns the salary unchanged when the employee worked the full month;
/// otherwise scales by `effective / full` and rounds to 2 decimals.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::prorate_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let half = prorate_salary(Decimal::from_str("30000").unwrap(), 13, 26);
/// assert_eq!(half, Decimal::from_str("15000.00").unwrap());
/// ```
pub fn prorate_salary(base_salary: Decimal, effective_days: u32, full_days: u32) -> Decimal {
    if effective_days == full_days || full_days == 0 {
        return base_salary;
    }
    round2(base_salary * Decimal::from(effective_days) / Decimal::from(full_days))
}

/// Computes the flat full-month hourly rate.
///
/// `base_salary / (working_days * 8)`, using the month's full working
/// days even for employees paid a partial month, so the rate stays
/// stable across pro-ration.
pub fn hourly_rate(base_salary: Decimal, working_days: u32) -> Decimal {
    if working_days == 0 {
        return Decimal::ZERO;
    }
    base_salary / (Decimal::from(working_days) * HOURS_PER_WORKING_DAY)
}

/// Builds one employee's preview row from its computed parts.
///
/// - `absent_days = max(0, effective_working_days - present_days)` —
///   discrepancies in raw attendance never go negative.
/// - `net_salary = max(0, gross - lop_deduction + overtime_amount)`,
///   rounded to 2 decimals; deductions cannot produce negative pay.
pub fn compute_preview_item(
    employee: &Employee,
    summary: &MonthSummary,
    lop_rate: Decimal,
    effective_working_days: u32,
    present_days: u32,
    overtime: &MonthlyOvertime,
) -> PayrollPreviewItem {
    let gross_salary = prorate_salary(
        employee.base_salary,
        effective_working_days,
        summary.working_days,
    );
    let absent_days = effective_working_days.saturating_sub(present_days);
    let lop_deduction = Decimal::from(absent_days) * lop_rate;
    let net_salary = round2(
        (gross_salary - lop_deduction + overtime.total_overtime_amount).max(Decimal::ZERO),
    );

    PayrollPreviewItem {
        user_id: employee.id,
        name: employee.name.clone(),
        username: employee.username.clone(),
        role: employee.role,
        base_salary: employee.base_salary,
        effective_working_days,
        present_days,
        absent_days,
        lop_rate,
        lop_deduction,
        overtime_hours: overtime.total_overtime_hours,
        overtime_amount: overtime.total_overtime_amount,
        gross_salary,
        net_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::HolidayCalendar;
    use crate::models::Role;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn summary_march_2026() -> MonthSummary {
        HolidayCalendar::new(vec![]).month_summary(3, 2026)
    }

    fn employee(id: i64, base: &str) -> Employee {
        Employee {
            id,
            name: format!("Employee {}", id),
            username: format!("emp{}", id),
            role: Role::Employee,
            base_salary: dec(base),
            is_active: true,
            deactivated_at: None,
        }
    }

    // ==========================================================================
    // PV-001: exact half pro-ration (13 of 26 working days)
    // ==========================================================================
    #[test]
    fn test_pv_001_half_month_proration() {
        assert_eq!(prorate_salary(dec("30000"), 13, 26), dec("15000.00"));
    }

    // ==========================================================================
    // PV-002: full month leaves salary untouched
    // ==========================================================================
    #[test]
    fn test_pv_002_full_month_unchanged() {
        assert_eq!(prorate_salary(dec("30000"), 26, 26), dec("30000"));
    }

    #[test]
    fn test_proration_rounds_to_two_dp() {
        // 30000 * 10 / 26 = 11538.4615... → 11538.46
        assert_eq!(prorate_salary(dec("30000"), 10, 26), dec("11538.46"));
    }

    // ==========================================================================
    // PV-003: active employee gets the full month
    // ==========================================================================
    #[test]
    fn test_pv_003_active_employee_full_window() {
        let summary = summary_march_2026();
        let emp = employee(1, "30000");

        let (end, days) = payable_window(&emp, &summary).unwrap();
        assert_eq!(end, make_date("2026-03-31"));
        assert_eq!(days, summary.working_days);
    }

    // ==========================================================================
    // PV-004: deactivated before month start is skipped
    // ==========================================================================
    #[test]
    fn test_pv_004_deactivated_before_month_skipped() {
        let summary = summary_march_2026();
        let mut emp = employee(1, "30000");
        emp.is_active = false;
        emp.deactivated_at = Some(make_date("2026-02-20").and_hms_opt(17, 0, 0).unwrap());

        assert!(payable_window(&emp, &summary).is_none());
    }

    // ==========================================================================
    // PV-005: mid-month deactivation shortens the window
    // ==========================================================================
    #[test]
    fn test_pv_005_mid_month_deactivation() {
        let summary = summary_march_2026();
        let mut emp = employee(1, "30000");
        emp.is_active = false;
        emp.deactivated_at = Some(make_date("2026-03-15").and_hms_opt(12, 0, 0).unwrap());

        let (end, days) = payable_window(&emp, &summary).unwrap();
        assert_eq!(end, make_date("2026-03-15"));
        // 2026-03-01..15 minus Sundays 1, 8, 15
        assert_eq!(days, 12);
    }

    #[test]
    fn test_deactivated_on_month_end_gets_full_month() {
        let summary = summary_march_2026();
        let mut emp = employee(1, "30000");
        emp.is_active = false;
        emp.deactivated_at = Some(make_date("2026-03-31").and_hms_opt(18, 0, 0).unwrap());

        let (end, days) = payable_window(&emp, &summary).unwrap();
        assert_eq!(end, make_date("2026-03-31"));
        assert_eq!(days, summary.working_days);
    }

    // ==========================================================================
    // PV-006: hourly rate uses full-month working days
    // ==========================================================================
    #[test]
    fn test_pv_006_hourly_rate() {
        // 20800 / (26 * 8) = 100
        assert_eq!(hourly_rate(dec("20800"), 26), dec("100"));
    }

    #[test]
    fn test_hourly_rate_zero_working_days() {
        assert_eq!(hourly_rate(dec("20800"), 0), Decimal::ZERO);
    }

    // ==========================================================================
    // PV-007: net salary floors at zero
    // ==========================================================================
    #[test]
    fn test_pv_007_net_salary_never_negative() {
        let summary = summary_march_2026();
        let emp = employee(1, "5000");

        // 26 effective days, 0 present → 26 absent * 400 = 10400 LOP > 5000
        let item = compute_preview_item(
            &emp,
            &summary,
            dec("400"),
            summary.working_days,
            0,
            &MonthlyOvertime::zero(),
        );

        assert_eq!(item.lop_deduction, dec("10400"));
        assert_eq!(item.net_salary, dec("0.00"));
    }

    // ==========================================================================
    // PV-008: absent days never go negative
    // ==========================================================================
    #[test]
    fn test_pv_008_absent_days_floor() {
        let summary = summary_march_2026();
        let emp = employee(1, "30000");

        // Present on more days than the effective working days
        let item = compute_preview_item(
            &emp,
            &summary,
            dec("400"),
            summary.working_days,
            30,
            &MonthlyOvertime::zero(),
        );

        assert_eq!(item.absent_days, 0);
        assert_eq!(item.lop_deduction, Decimal::ZERO);
        assert_eq!(item.net_salary, dec("30000.00"));
    }

    #[test]
    fn test_item_combines_lop_and_overtime() {
        let summary = summary_march_2026();
        let emp = employee(1, "26000");

        let overtime = MonthlyOvertime {
            total_overtime_hours: dec("4.00"),
            total_overtime_amount: dec("750.00"),
        };
        let item = compute_preview_item(
            &emp,
            &summary,
            dec("400"),
            summary.working_days,
            24,
            &overtime,
        );

        // 2 absent * 400 = 800; 26000 - 800 + 750 = 25950
        assert_eq!(item.absent_days, 2);
        assert_eq!(item.net_salary, dec("25950.00"));
        assert_eq!(item.overtime_hours, dec("4.00"));
    }

    #[test]
    fn test_supervisor_lop_rate_flows_through() {
        let summary = summary_march_2026();
        let mut emp = employee(1, "45000");
        emp.role = Role::Supervisor;

        let item = compute_preview_item(
            &emp,
            &summary,
            dec("500"),
            summary.working_days,
            25,
            &MonthlyOvertime::zero(),
        );

        assert_eq!(item.lop_rate, dec("500"));
        assert_eq!(item.lop_deduction, dec("500"));
    }
}
