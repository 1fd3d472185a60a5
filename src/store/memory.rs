//! In-memory store backing all five store traits.
//!
//! One `RwLock`-guarded state struct stands in for the relational
//! store. The (month, year) uniqueness check and the run+items insert
//! happen under a single write lock, which gives `insert_run` both its
//! conflict guard and its all-or-nothing property.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    Attendance, AttendanceStatus, Employee, Holiday, NewOvertimeRule, OvertimeRule,
    OvertimeRulePatch, PayrollLineItem, PayrollRun,
};

use super::{AttendanceLedger, HolidayStore, OvertimeRuleStore, PayrollStore, UserDirectory};

#[derive(Debug, Default)]
struct StoreState {
    users: BTreeMap<i64, Employee>,
    attendance: Vec<Attendance>,
    holidays: BTreeMap<i64, Holiday>,
    rules: BTreeMap<i64, OvertimeRule>,
    next_rule_id: i64,
    runs: BTreeMap<(i32, u32), (PayrollRun, Vec<PayrollLineItem>)>,
}

/// In-memory implementation of all store traits.
///
/// Reads are concurrent; writes serialize on the state lock. Lock
/// poisoning surfaces as a `Store` error rather than a panic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<StoreState>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> PayrollResult<RwLockReadGuard<'_, StoreState>> {
        self.inner.read().map_err(|_| PayrollError::Store {
            message: "state lock poisoned".to_string(),
        })
    }

    fn write(&self) -> PayrollResult<RwLockWriteGuard<'_, StoreState>> {
        self.inner.write().map_err(|_| PayrollError::Store {
            message: "state lock poisoned".to_string(),
        })
    }

    /// Inserts or replaces a user.
    pub fn put_user(&self, user: Employee) -> PayrollResult<()> {
        self.write()?.users.insert(user.id, user);
        Ok(())
    }

    /// Inserts or replaces an attendance record, unique per (user, date).
    pub fn put_attendance(&self, record: Attendance) -> PayrollResult<()> {
        let mut state = self.write()?;
        state
            .attendance
            .retain(|a| !(a.user_id == record.user_id && a.date == record.date));
        state.attendance.push(record);
        Ok(())
    }

    /// Inserts or replaces a holiday.
    pub fn put_holiday(&self, holiday: Holiday) -> PayrollResult<()> {
        self.write()?.holidays.insert(holiday.id, holiday);
        Ok(())
    }
}

impl UserDirectory for MemoryStore {
    fn payroll_eligible_users(&self, month_start: NaiveDate) -> PayrollResult<Vec<Employee>> {
        let state = self.read()?;
        Ok(state
            .users
            .values()
            .filter(|u| u.is_payroll_eligible())
            .filter(|u| {
                u.is_active
                    || u.deactivated_at
                        .map(|at| at.date() >= month_start)
                        .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    fn user(&self, user_id: i64) -> PayrollResult<Option<Employee>> {
        Ok(self.read()?.users.get(&user_id).cloned())
    }
}

impl AttendanceLedger for MemoryStore {
    fn present_days_count(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PayrollResult<u32> {
        let state = self.read()?;
        Ok(state
            .attendance
            .iter()
            .filter(|a| {
                a.user_id == user_id
                    && a.date >= from
                    && a.date <= to
                    && a.status == AttendanceStatus::Present
                    && a.date.weekday() != Weekday::Sun
            })
            .count() as u32)
    }

    fn overtime_by_day(
        &self,
        user_id: i64,
        month: u32,
        year: i32,
    ) -> PayrollResult<Vec<(NaiveDate, Decimal)>> {
        let state = self.read()?;
        let mut days: Vec<(NaiveDate, Decimal)> = state
            .attendance
            .iter()
            .filter(|a| {
                a.user_id == user_id
                    && a.date.month() == month
                    && a.date.year() == year
                    && a.overtime_hours > Decimal::ZERO
            })
            .map(|a| (a.date, a.overtime_hours))
            .collect();
        days.sort_by_key(|(date, _)| *date);
        Ok(days)
    }
}

impl HolidayStore for MemoryStore {
    fn holidays(&self) -> PayrollResult<Vec<Holiday>> {
        Ok(self.read()?.holidays.values().cloned().collect())
    }
}

impl OvertimeRuleStore for MemoryStore {
    fn active_rule(&self) -> PayrollResult<Option<OvertimeRule>> {
        // BTreeMap iterates in id order, so the first active row wins.
        let state = self.read()?;
        Ok(state.rules.values().find(|r| r.is_active).cloned())
    }

    fn rule(&self, id: i64) -> PayrollResult<Option<OvertimeRule>> {
        Ok(self.read()?.rules.get(&id).cloned())
    }

    fn insert_rule(&self, rule: NewOvertimeRule) -> PayrollResult<OvertimeRule> {
        let mut state = self.write()?;
        state.next_rule_id += 1;
        let row = OvertimeRule {
            id: state.next_rule_id,
            name: rule.name,
            regular_hours_per_day: rule.regular_hours_per_day,
            overtime_multiplier: rule.overtime_multiplier,
            weekend_multiplier: rule.weekend_multiplier,
            holiday_multiplier: rule.holiday_multiplier,
            max_overtime_per_day: rule.max_overtime_per_day,
            is_active: rule.is_active,
        };
        state.rules.insert(row.id, row.clone());
        Ok(row)
    }

    fn update_rule(&self, id: i64, patch: OvertimeRulePatch) -> PayrollResult<OvertimeRule> {
        let mut state = self.write()?;
        let rule = state
            .rules
            .get_mut(&id)
            .ok_or(PayrollError::RuleNotFound { id })?;
        rule.apply_patch(patch);
        Ok(rule.clone())
    }

    fn delete_rule(&self, id: i64) -> PayrollResult<OvertimeRule> {
        let mut state = self.write()?;
        state
            .rules
            .remove(&id)
            .ok_or(PayrollError::RuleNotFound { id })
    }
}

impl PayrollStore for MemoryStore {
    fn find_run(&self, month: u32, year: i32) -> PayrollResult<Option<PayrollRun>> {
        Ok(self
            .read()?
            .runs
            .get(&(year, month))
            .map(|(run, _)| run.clone()))
    }

    fn insert_run(&self, run: PayrollRun, items: Vec<PayrollLineItem>) -> PayrollResult<()> {
        let mut state = self.write()?;
        let key = (run.year, run.month);
        if state.runs.contains_key(&key) {
            return Err(PayrollError::PayrollExists {
                month: run.month,
                year: run.year,
            });
        }
        state.runs.insert(key, (run, items));
        Ok(())
    }

    fn line_items(&self, month: u32, year: i32) -> PayrollResult<Vec<PayrollLineItem>> {
        Ok(self
            .read()?
            .runs
            .get(&(year, month))
            .map(|(_, items)| items.clone())
            .unwrap_or_default())
    }

    fn line_item(
        &self,
        user_id: i64,
        month: u32,
        year: i32,
    ) -> PayrollResult<Option<PayrollLineItem>> {
        Ok(self.read()?.runs.get(&(year, month)).and_then(|(_, items)| {
            items.iter().find(|item| item.user_id == user_id).cloned()
        }))
    }

    fn history(&self, user_id: i64) -> PayrollResult<Vec<(PayrollRun, PayrollLineItem)>> {
        let state = self.read()?;
        let mut entries: Vec<(PayrollRun, PayrollLineItem)> = state
            .runs
            .values()
            .filter_map(|(run, items)| {
                items
                    .iter()
                    .find(|item| item.user_id == user_id)
                    .map(|item| (run.clone(), item.clone()))
            })
            .collect();
        entries.sort_by(|(a, _), (b, _)| (b.year, b.month).cmp(&(a.year, a.month)));
        Ok(entries)
    }
}
