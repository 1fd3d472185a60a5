//! Pay policy configuration.
//!
//! This module provides the strongly-typed pay policy (loss-of-pay rates
//! by role and the fallback overtime rule) and a loader for reading it
//! from a YAML file. The engine takes an immutable policy snapshot at
//! construction so a single payroll run never observes a policy change
//! mid-computation.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{LopRates, PayPolicy};
