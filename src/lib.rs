//! Payroll and Overtime Calculation Engine
//!
//! This crate provides the payroll core of a workforce management backend:
//! calendar-aware working-day resolution, overtime calculation with
//! weekend/holiday multipliers, loss-of-pay deductions, and idempotent
//! monthly payroll generation with immutable per-employee line items.

#![warn(missing_docs)]

pub mod api;
pub mod audit;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
