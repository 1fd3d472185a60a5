//! Request types for the payroll API.
//!
//! Rule creation and patch bodies deserialize directly into the
//! corresponding model types; only the period and generation payloads
//! need API-specific shapes.

use serde::{Deserialize, Serialize};

/// Query parameters selecting a payroll period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// The month of the period (1-12).
    pub month: u32,
    /// The year of the period.
    pub year: i32,
}

/// Body of a payroll generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The month of the period (1-12).
    pub month: u32,
    /// The year of the period.
    pub year: i32,
    /// The user triggering the generation.
    pub generated_by: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_deserializes() {
        let json = r#"{"month": 3, "year": 2026, "generated_by": 100}"#;
        let request: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.month, 3);
        assert_eq!(request.generated_by, 100);
    }

    #[test]
    fn test_generate_request_rejects_missing_actor() {
        let json = r#"{"month": 3, "year": 2026}"#;
        assert!(serde_json::from_str::<GenerateRequest>(json).is_err());
    }
}
