//! CSV export of a finalized payroll run.
//!
//! One row per line item, plus a header. Name and username come from the
//! live directory; both render as empty strings for users that no longer
//! exist there. The generation timestamp is repeated on every row so the
//! file is self-describing when split.

use csv::Writer;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayrollLineItem, PayrollRun};

/// The export header, in column order.
pub const CSV_HEADER: [&str; 14] = [
    "employee_id",
    "name",
    "username",
    "role",
    "base_salary",
    "working_days",
    "present_days",
    "absent_days",
    "lop_rate",
    "lop_deduction",
    "overtime_hours",
    "overtime_amount",
    "net_salary",
    "generated_at",
];

fn store_err(err: impl std::fmt::Display) -> PayrollError {
    PayrollError::Store {
        message: format!("csv export failed: {}", err),
    }
}

/// Serializes a finalized run's line items to CSV bytes.
pub fn csv_export(
    run: &PayrollRun,
    rows: &[(PayrollLineItem, Option<Employee>)],
) -> PayrollResult<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(store_err)?;

    let generated_at = run.generated_at.to_rfc3339();
    for (item, user) in rows {
        let (name, username) = match user {
            Some(user) => (user.name.as_str(), user.username.as_str()),
            None => ("", ""),
        };
        writer
            .write_record([
                item.user_id.to_string().as_str(),
                name,
                username,
                item.details.role.to_string().as_str(),
                item.base_salary.to_string().as_str(),
                item.details.working_days.to_string().as_str(),
                item.present_days.to_string().as_str(),
                item.details.absent_days.to_string().as_str(),
                item.details.lop_rate.to_string().as_str(),
                item.details.lop_deduction.to_string().as_str(),
                item.overtime_hours.to_string().as_str(),
                item.overtime_amount.to_string().as_str(),
                item.net_salary.to_string().as_str(),
                generated_at.as_str(),
            ])
            .map_err(store_err)?;
    }

    writer.into_inner().map_err(store_err)
}
