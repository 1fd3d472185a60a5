//! Store seams for the payroll engine.
//!
//! Each collaborator the engine reads from or writes to is a trait, so
//! a SQL-backed implementation can be substituted without touching the
//! calculation code. The crate ships [`MemoryStore`], a single
//! lock-guarded state implementing all five traits, used by the HTTP
//! layer and the test suite.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{
    Employee, Holiday, NewOvertimeRule, OvertimeRule, OvertimeRulePatch, PayrollLineItem,
    PayrollRun,
};

/// Read access to the employee directory.
pub trait UserDirectory: Send + Sync {
    /// Lists users who can appear on payroll for the month starting at
    /// `month_start`: non-admin users who are active or were deactivated
    /// on or after that date.
    fn payroll_eligible_users(&self, month_start: NaiveDate) -> PayrollResult<Vec<Employee>>;

    /// Looks up one user by id.
    fn user(&self, user_id: i64) -> PayrollResult<Option<Employee>>;
}

/// Read access to the attendance ledger.
///
/// The ledger is written by the attendance subsystem; payroll only
/// reads presence counts and the stored per-day overtime aggregate.
pub trait AttendanceLedger: Send + Sync {
    /// Counts `present` attendance rows in `[from, to]`, excluding
    /// Sundays.
    fn present_days_count(&self, user_id: i64, from: NaiveDate, to: NaiveDate)
        -> PayrollResult<u32>;

    /// Returns the stored overtime hours per attendance day in the
    /// month, limited to days with positive overtime, ordered by date.
    fn overtime_by_day(
        &self,
        user_id: i64,
        month: u32,
        year: i32,
    ) -> PayrollResult<Vec<(NaiveDate, Decimal)>>;
}

/// Read access to configured holidays.
pub trait HolidayStore: Send + Sync {
    /// Returns a snapshot of all configured holidays.
    fn holidays(&self) -> PayrollResult<Vec<Holiday>>;
}

/// Storage for overtime rules.
pub trait OvertimeRuleStore: Send + Sync {
    /// Returns the active rule: the lowest-id row flagged active, or
    /// `None` when no such row exists.
    fn active_rule(&self) -> PayrollResult<Option<OvertimeRule>>;

    /// Looks up one rule by id.
    fn rule(&self, id: i64) -> PayrollResult<Option<OvertimeRule>>;

    /// Inserts a new rule and returns it with its assigned id.
    fn insert_rule(&self, rule: NewOvertimeRule) -> PayrollResult<OvertimeRule>;

    /// Applies a partial update and returns the updated rule.
    ///
    /// Fails with `RuleNotFound` for a missing id.
    fn update_rule(&self, id: i64, patch: OvertimeRulePatch) -> PayrollResult<OvertimeRule>;

    /// Deletes a rule and returns the deleted row.
    ///
    /// Fails with `RuleNotFound` for a missing id. Deleting a rule that
    /// historical payroll referenced is tolerated but breaks audit
    /// reproducibility.
    fn delete_rule(&self, id: i64) -> PayrollResult<OvertimeRule>;
}

/// Storage for finalized payroll runs.
pub trait PayrollStore: Send + Sync {
    /// Finds the run for a period, if one was generated.
    fn find_run(&self, month: u32, year: i32) -> PayrollResult<Option<PayrollRun>>;

    /// Persists a run header and its line items as one atomic write.
    ///
    /// Fails with `PayrollExists` when a run for the period already
    /// exists; on any failure nothing is persisted.
    fn insert_run(&self, run: PayrollRun, items: Vec<PayrollLineItem>) -> PayrollResult<()>;

    /// Returns all line items of a period's run, in stored order.
    fn line_items(&self, month: u32, year: i32) -> PayrollResult<Vec<PayrollLineItem>>;

    /// Finds one user's line item in a period's run.
    fn line_item(
        &self,
        user_id: i64,
        month: u32,
        year: i32,
    ) -> PayrollResult<Option<PayrollLineItem>>;

    /// Returns all of a user's line items joined with run metadata,
    /// newest period first.
    fn history(&self, user_id: i64) -> PayrollResult<Vec<(PayrollRun, PayrollLineItem)>>;
}
