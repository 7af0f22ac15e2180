//! Response DTOs for the calculator API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

/// Response body for a successful operation (POST /api/calculator/*)
///
/// A non-finite `result` (e.g. an overflowing power) serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    /// Always true for this shape
    pub success: bool,
    /// Human-readable operation label, e.g. "Addition (+)"
    pub operation: String,
    /// The parsed first operand
    pub num1: f64,
    /// The parsed second operand
    pub num2: f64,
    /// The computed value
    pub result: f64,
}

impl OperationResponse {
    /// Creates a new successful OperationResponse
    pub fn new(operation: impl Into<String>, num1: f64, num2: f64, result: f64) -> Self {
        Self {
            success: true,
            operation: operation.into(),
            num1,
            num2,
            result,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error kind, e.g. "InvalidInput"
    pub error: String,
    /// Human-readable description of what went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Body returned for a path no route or static file matches.
    pub fn not_found(path: &str) -> Self {
        Self::new(
            "NotFound",
            format!("Path \"{}\" does not exist on this server", path),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_response_serialize() {
        let resp = OperationResponse::new("Addition (+)", 2.0, 3.0, 5.0);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            json!({
                "success": true,
                "operation": "Addition (+)",
                "num1": 2.0,
                "num2": 3.0,
                "result": 5.0
            })
        );
    }

    #[test]
    fn test_non_finite_result_serializes_as_null() {
        let resp = OperationResponse::new("Power (^)", 10.0, 400.0, f64::INFINITY);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["result"].is_null());
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("InvalidInput", "Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"error\":\"InvalidInput\""));
        assert!(json.contains("Something went wrong"));
    }

    #[test]
    fn test_not_found_names_path() {
        let resp = ErrorResponse::not_found("/nope");
        assert_eq!(resp.error, "NotFound");
        assert!(resp.message.contains("/nope"));
    }
}
