//! Policy configuration loading.
//!
//! This module provides the [`PolicyLoader`] type for loading the pay
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayPolicy, PolicyFile};

/// Loads the pay policy from disk.
///
/// # File Structure
///
/// ```text
/// config/policy.yaml
/// ├── lop_rates        # per-day LOP deduction by role
/// └── fallback_rule    # overtime rule used when none is configured
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PolicyLoader;
///
/// let policy = PolicyLoader::load("./config/policy.yaml")?;
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug)]
pub struct PolicyLoader;

impl PolicyLoader {
    /// Loads the pay policy from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file is missing and
    /// `ConfigParseError` if it contains invalid YAML or misses a
    /// required field.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<PayPolicy> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: PolicyFile =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(file.into())
    }
}
