//! Projections over payroll data: payslip views and CSV export.

mod csv_export;
mod payslip;

pub use csv_export::{csv_export, CSV_HEADER};
pub use payslip::{payslip_from_line_item, payslip_from_preview};
