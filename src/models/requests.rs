//! Request DTOs for the calculator API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Request body shared by every operation endpoint (POST /api/calculator/*)
///
/// Operands are kept as raw JSON so that validation can tell an absent field
/// apart from one that is present but not numeric.
///
/// # Fields
/// - `num1`: The first operand (base for power, dividend for divide/modulo)
/// - `num2`: The second operand
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationRequest {
    /// The first operand, `None` when absent
    #[serde(default, deserialize_with = "present")]
    pub num1: Option<Value>,
    /// The second operand, `None` when absent
    #[serde(default, deserialize_with = "present")]
    pub num2: Option<Value>,
}

impl OperationRequest {
    /// Creates a request from two JSON values.
    pub fn new(num1: impl Into<Value>, num2: impl Into<Value>) -> Self {
        Self {
            num1: Some(num1.into()),
            num2: Some(num2.into()),
        }
    }
}

// A field that appears in the body is `Some`, even when it is `null`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
