//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for representing
//! workers subject to payroll computation.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the role an employee holds in the organization.
///
/// The role determines the loss-of-pay deduction rate and whether the
/// employee appears on payroll at all (admins draw no salary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular employee.
    Employee,
    /// Site supervisor.
    Supervisor,
    /// Administrator; excluded from payroll entirely.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Supervisor => write!(f, "supervisor"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Represents an employee subject to payroll computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: i64,
    /// The employee's display name.
    pub name: String,
    /// The employee's login name.
    pub username: String,
    /// The role held by the employee.
    pub role: Role,
    /// The monthly base salary.
    pub base_salary: Decimal,
    /// Whether the employee is currently active.
    pub is_active: bool,
    /// When the employee was deactivated, if ever.
    ///
    /// An employee deactivated mid-month is still paid for that month,
    /// pro-rated up to the deactivation date.
    #[serde(default)]
    pub deactivated_at: Option<NaiveDateTime>,
}

impl Employee {
    /// Returns true if the employee can appear on a payroll run.
    ///
    /// Admins are excluded from payroll entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, Role};
    /// use rust_decimal::Decimal;
    ///
    /// let admin = Employee {
    ///     id: 1,
    ///     name: "Asha Rao".to_string(),
    ///     username: "asha".to_string(),
    ///     role: Role::Admin,
    ///     base_salary: Decimal::ZERO,
    ///     is_active: true,
    ///     deactivated_at: None,
    /// };
    /// assert!(!admin.is_payroll_eligible());
    /// ```
    pub fn is_payroll_eligible(&self) -> bool {
        self.role != Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_employee(role: Role) -> Employee {
        Employee {
            id: 10,
            name: "Ravi Kumar".to_string(),
            username: "ravi".to_string(),
            role,
            base_salary: Decimal::new(30000, 0),
            is_active: true,
            deactivated_at: None,
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 10,
            "name": "Ravi Kumar",
            "username": "ravi",
            "role": "employee",
            "base_salary": "30000",
            "is_active": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 10);
        assert_eq!(employee.role, Role::Employee);
        assert_eq!(employee.base_salary, Decimal::new(30000, 0));
        assert!(employee.deactivated_at.is_none());
    }

    #[test]
    fn test_deserialize_deactivated_employee() {
        let json = r#"{
            "id": 11,
            "name": "Meena Iyer",
            "username": "meena",
            "role": "supervisor",
            "base_salary": "45000",
            "is_active": false,
            "deactivated_at": "2026-03-15T10:30:00"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.role, Role::Supervisor);
        assert_eq!(
            employee.deactivated_at.unwrap().date(),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee(Role::Employee);
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_admin_is_not_payroll_eligible() {
        let employee = create_test_employee(Role::Admin);
        assert!(!employee.is_payroll_eligible());
    }

    #[test]
    fn test_employee_is_payroll_eligible() {
        let employee = create_test_employee(Role::Employee);
        assert!(employee.is_payroll_eligible());
    }

    #[test]
    fn test_supervisor_is_payroll_eligible() {
        let employee = create_test_employee(Role::Supervisor);
        assert!(employee.is_payroll_eligible());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&Role::Employee).unwrap(),
            "\"employee\""
        );
        assert_eq!(
            serde_json::to_string(&Role::Supervisor).unwrap(),
            "\"supervisor\""
        );
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::Employee), "employee");
        assert_eq!(format!("{}", Role::Supervisor), "supervisor");
        assert_eq!(format!("{}", Role::Admin), "admin");
    }
}
