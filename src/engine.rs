//! Payroll engine orchestration.
//!
//! [`PayrollEngine`] wires the store seams, the pay policy, and the pure
//! calculation functions into the operations the HTTP layer exposes:
//! preview, generation, payslips, history, CSV export, and overtime rule
//! management.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::audit::{AuditEvent, AuditSink, TracingAuditSink};
use crate::calculation::{
    compute_preview_item, hourly_rate, overtime_pay, payable_window, round2, HolidayCalendar,
    MonthlyOvertime,
};
use crate::config::PayPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    NewOvertimeRule, OvertimeRule, OvertimeRulePatch, PayrollHistoryEntry, PayrollLineItem,
    PayrollLineItemDetails, PayrollPreview, PayrollRun, PayrollRunStatus, PayslipView,
};
use crate::report::{csv_export, payslip_from_line_item, payslip_from_preview};
use crate::store::{
    AttendanceLedger, HolidayStore, MemoryStore, OvertimeRuleStore, PayrollStore, UserDirectory,
};

/// The result of a successful payroll generation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedPayroll {
    /// The persisted run header.
    pub run: PayrollRun,
    /// The persisted line items, one per paid employee.
    pub items: Vec<PayrollLineItem>,
}

/// Orchestrates payroll computation over the store seams.
///
/// All calculation is delegated to the pure functions in
/// [`crate::calculation`]; the engine handles validation, snapshotting,
/// persistence, and auditing.
pub struct PayrollEngine {
    users: Arc<dyn UserDirectory>,
    ledger: Arc<dyn AttendanceLedger>,
    holidays: Arc<dyn HolidayStore>,
    rules: Arc<dyn OvertimeRuleStore>,
    payrolls: Arc<dyn PayrollStore>,
    audit: Arc<dyn AuditSink>,
    policy: PayPolicy,
}

impl PayrollEngine {
    /// Creates an engine over explicit store seams.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserDirectory>,
        ledger: Arc<dyn AttendanceLedger>,
        holidays: Arc<dyn HolidayStore>,
        rules: Arc<dyn OvertimeRuleStore>,
        payrolls: Arc<dyn PayrollStore>,
        audit: Arc<dyn AuditSink>,
        policy: PayPolicy,
    ) -> Self {
        Self {
            users,
            ledger,
            holidays,
            rules,
            payrolls,
            audit,
            policy,
        }
    }

    /// Creates an engine where a single [`MemoryStore`] backs every seam,
    /// auditing through tracing.
    pub fn with_store(store: Arc<MemoryStore>, policy: PayPolicy) -> Self {
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            Arc::new(TracingAuditSink),
            policy,
        )
    }

    fn validate_period(month: u32, year: i32) -> PayrollResult<()> {
        if !(1..=12).contains(&month) {
            return Err(PayrollError::validation(
                "month",
                "must be between 1 and 12",
            ));
        }
        if !(2000..=2100).contains(&year) {
            return Err(PayrollError::validation(
                "year",
                "must be between 2000 and 2100",
            ));
        }
        Ok(())
    }

    /// Returns the overtime rule currently in force.
    ///
    /// Falls back to the policy's hardcoded rule when no active rule row
    /// exists, so payroll never fails for lack of configuration.
    pub fn active_rule(&self) -> PayrollResult<OvertimeRule> {
        Ok(self
            .rules
            .active_rule()?
            .unwrap_or_else(|| self.policy.fallback_rule.clone()))
    }

    /// Computes payroll for a period without persisting anything.
    ///
    /// Employees deactivated before the month start are skipped entirely;
    /// employees deactivated mid-month are pro-rated to their departure
    /// date. Items are ordered by user id.
    pub fn preview(&self, month: u32, year: i32) -> PayrollResult<PayrollPreview> {
        Self::validate_period(month, year)?;

        let calendar = HolidayCalendar::new(self.holidays.holidays()?);
        let summary = calendar.month_summary(month, year);
        let rule = self.active_rule()?;
        let month_start = crate::calculation::month_start(month, year);

        let mut items = Vec::new();
        for employee in self.users.payroll_eligible_users(month_start)? {
            let Some((window_end, effective_working_days)) =
                payable_window(&employee, &summary)
            else {
                continue;
            };

            let present_days =
                self.ledger
                    .present_days_count(employee.id, month_start, window_end)?;
            let overtime = if summary.working_days == 0 {
                MonthlyOvertime::zero()
            } else {
                let rate = hourly_rate(employee.base_salary, summary.working_days);
                let daily = self.ledger.overtime_by_day(employee.id, month, year)?;
                overtime_pay(&daily, rate, &rule, &calendar)
            };

            items.push(compute_preview_item(
                &employee,
                &summary,
                self.policy.lop_rates.rate_for(employee.role),
                effective_working_days,
                present_days,
                &overtime,
            ));
        }
        items.sort_by_key(|item| item.user_id);

        let total_payout = round2(items.iter().map(|item| item.net_salary).sum());

        Ok(PayrollPreview {
            month,
            year,
            days_in_month: summary.days_in_month,
            working_days: summary.working_days,
            sundays: summary.sundays,
            public_holidays: summary.public_holidays,
            holiday_dates: summary.holiday_dates.iter().copied().collect(),
            items,
            total_payout,
        })
    }

    /// Generates and persists the payroll run for a period.
    ///
    /// At most one run exists per (month, year). Generation fails with
    /// `PayrollExists` when a run already exists; the store re-checks the
    /// conflict inside its atomic insert, so two concurrent generations
    /// cannot both succeed.
    pub fn generate(
        &self,
        generated_by: i64,
        month: u32,
        year: i32,
    ) -> PayrollResult<GeneratedPayroll> {
        Self::validate_period(month, year)?;

        if let Some(existing) = self.payrolls.find_run(month, year)? {
            return Err(PayrollError::PayrollExists {
                month: existing.month,
                year: existing.year,
            });
        }

        let preview = self.preview(month, year)?;
        let run = PayrollRun {
            id: Uuid::new_v4(),
            month,
            year,
            status: PayrollRunStatus::Generated,
            total_payout: preview.total_payout,
            generated_by,
            generated_at: Utc::now(),
        };

        let items: Vec<PayrollLineItem> = preview
            .items
            .iter()
            .map(|item| PayrollLineItem {
                id: Uuid::new_v4(),
                payroll_id: run.id,
                user_id: item.user_id,
                base_salary: item.base_salary,
                present_days: item.present_days,
                total_attendance_deduction: item.lop_deduction,
                approved_lunch_total: rust_decimal::Decimal::ZERO,
                overtime_hours: item.overtime_hours,
                overtime_amount: item.overtime_amount,
                gross_salary: item.gross_salary,
                net_salary: item.net_salary,
                details: PayrollLineItemDetails {
                    days_in_month: preview.days_in_month,
                    working_days: preview.working_days,
                    absent_days: item.absent_days,
                    sundays: preview.sundays,
                    public_holidays: preview.public_holidays,
                    lop_rate: item.lop_rate,
                    lop_deduction: item.lop_deduction,
                    role: item.role,
                },
            })
            .collect();

        self.payrolls.insert_run(run.clone(), items.clone())?;

        self.audit.record(AuditEvent {
            action: "payroll.generate".to_string(),
            entity: format!("payroll_run:{}/{}", month, year),
            actor: Some(generated_by),
            before: None,
            after: serde_json::to_value(&run).ok(),
        });
        tracing::info!(
            payroll_id = %run.id,
            month,
            year,
            employees = items.len(),
            total_payout = %run.total_payout,
            "payroll generated"
        );

        Ok(GeneratedPayroll { run, items })
    }

    /// Returns a payslip for one user and period.
    ///
    /// Prefers the frozen figures of a finalized run; when no run (or no
    /// line item for this user) exists, falls back to a live preview.
    /// Fails with `PayslipNotFound` only when both sources come up empty.
    pub fn payslip(&self, user_id: i64, month: u32, year: i32) -> PayrollResult<PayslipView> {
        Self::validate_period(month, year)?;

        if let Some(run) = self.payrolls.find_run(month, year)? {
            if let Some(item) = self.payrolls.line_item(user_id, month, year)? {
                let name = self
                    .users
                    .user(user_id)?
                    .map(|u| u.name)
                    .unwrap_or_default();
                return Ok(payslip_from_line_item(&item, name, &run));
            }
        }

        let preview = self.preview(month, year)?;
        preview
            .items
            .iter()
            .find(|item| item.user_id == user_id)
            .map(|item| payslip_from_preview(item, month, year))
            .ok_or(PayrollError::PayslipNotFound {
                user_id,
                month,
                year,
            })
    }

    /// Returns the stored line item and run metadata for one user and
    /// period.
    ///
    /// Unlike [`Self::payslip`], this never falls back to a live preview:
    /// it fails with `PayrollNotFound` when the period has no finalized
    /// run, and with `PayslipNotFound` when the run holds no line item
    /// for the user.
    pub fn payslip_details(
        &self,
        user_id: i64,
        month: u32,
        year: i32,
    ) -> PayrollResult<PayrollHistoryEntry> {
        Self::validate_period(month, year)?;

        let run = self
            .payrolls
            .find_run(month, year)?
            .ok_or(PayrollError::PayrollNotFound { month, year })?;
        let item = self
            .payrolls
            .line_item(user_id, month, year)?
            .ok_or(PayrollError::PayslipNotFound {
                user_id,
                month,
                year,
            })?;
        Ok(PayrollHistoryEntry { run, item })
    }

    /// Returns a user's payroll history, newest period first.
    ///
    /// Fails with `UserNotFound` for an unknown user; a known user with
    /// no finalized runs gets an empty history.
    pub fn history(&self, user_id: i64) -> PayrollResult<Vec<PayrollHistoryEntry>> {
        if self.users.user(user_id)?.is_none() {
            return Err(PayrollError::UserNotFound { id: user_id });
        }
        Ok(self
            .payrolls
            .history(user_id)?
            .into_iter()
            .map(|(run, item)| PayrollHistoryEntry { run, item })
            .collect())
    }

    /// Exports a finalized run as CSV.
    ///
    /// Fails with `PayrollNotFound` when the period has no run; export
    /// never falls back to a live preview.
    pub fn export_csv(&self, month: u32, year: i32) -> PayrollResult<Vec<u8>> {
        Self::validate_period(month, year)?;

        let run = self
            .payrolls
            .find_run(month, year)?
            .ok_or(PayrollError::PayrollNotFound { month, year })?;
        let items = self.payrolls.line_items(month, year)?;

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let user = self.users.user(item.user_id)?;
            rows.push((item, user));
        }
        csv_export(&run, &rows)
    }

    fn validate_rule_fields(
        name: Option<&str>,
        regular_hours: Option<rust_decimal::Decimal>,
        multipliers: &[(&str, Option<rust_decimal::Decimal>)],
        max_overtime: Option<rust_decimal::Decimal>,
    ) -> PayrollResult<()> {
        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(PayrollError::validation("name", "must not be empty"));
            }
        }
        if let Some(hours) = regular_hours {
            if hours <= rust_decimal::Decimal::ZERO || hours > rust_decimal::Decimal::from(24) {
                return Err(PayrollError::validation(
                    "regular_hours_per_day",
                    "must be between 0 and 24",
                ));
            }
        }
        for (field, value) in multipliers {
            if let Some(value) = value {
                if *value <= rust_decimal::Decimal::ZERO {
                    return Err(PayrollError::validation(*field, "must be positive"));
                }
            }
        }
        if let Some(cap) = max_overtime {
            if cap < rust_decimal::Decimal::ZERO {
                return Err(PayrollError::validation(
                    "max_overtime_per_day",
                    "must not be negative",
                ));
            }
        }
        Ok(())
    }

    /// Creates a new overtime rule.
    pub fn create_rule(
        &self,
        actor: Option<i64>,
        rule: NewOvertimeRule,
    ) -> PayrollResult<OvertimeRule> {
        Self::validate_rule_fields(
            Some(&rule.name),
            Some(rule.regular_hours_per_day),
            &[
                ("overtime_multiplier", Some(rule.overtime_multiplier)),
                ("weekend_multiplier", Some(rule.weekend_multiplier)),
                ("holiday_multiplier", Some(rule.holiday_multiplier)),
            ],
            Some(rule.max_overtime_per_day),
        )?;

        let created = self.rules.insert_rule(rule)?;
        self.audit.record(AuditEvent {
            action: "rule.create".to_string(),
            entity: format!("rule:{}", created.id),
            actor,
            before: None,
            after: serde_json::to_value(&created).ok(),
        });
        Ok(created)
    }

    /// Applies a partial update to an overtime rule.
    pub fn update_rule(
        &self,
        actor: Option<i64>,
        id: i64,
        patch: OvertimeRulePatch,
    ) -> PayrollResult<OvertimeRule> {
        Self::validate_rule_fields(
            patch.name.as_deref(),
            patch.regular_hours_per_day,
            &[
                ("overtime_multiplier", patch.overtime_multiplier),
                ("weekend_multiplier", patch.weekend_multiplier),
                ("holiday_multiplier", patch.holiday_multiplier),
            ],
            patch.max_overtime_per_day,
        )?;

        let before = self
            .rules
            .rule(id)?
            .ok_or(PayrollError::RuleNotFound { id })?;
        let updated = self.rules.update_rule(id, patch)?;
        self.audit.record(AuditEvent {
            action: "rule.update".to_string(),
            entity: format!("rule:{}", id),
            actor,
            before: serde_json::to_value(&before).ok(),
            after: serde_json::to_value(&updated).ok(),
        });
        Ok(updated)
    }

    /// Deletes an overtime rule.
    pub fn delete_rule(&self, actor: Option<i64>, id: i64) -> PayrollResult<OvertimeRule> {
        let deleted = self.rules.delete_rule(id)?;
        self.audit.record(AuditEvent {
            action: "rule.delete".to_string(),
            entity: format!("rule:{}", id),
            actor,
            before: serde_json::to_value(&deleted).ok(),
            after: None,
        });
        Ok(deleted)
    }
}
