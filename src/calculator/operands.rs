//! Operand Validation Module
//!
//! Turns raw JSON operands into finite f64 values.

use serde_json::Value;

use crate::error::{CalcError, Result};
use crate::models::OperationRequest;

// == Operands ==
/// Two validated, finite operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    /// First operand
    pub num1: f64,
    /// Second operand
    pub num2: f64,
}

impl Operands {
    /// Validates a request: presence of both fields first, then that each
    /// parses as a finite number.
    pub fn from_request(req: &OperationRequest) -> Result<Self> {
        let (Some(num1), Some(num2)) = (req.num1.as_ref(), req.num2.as_ref()) else {
            return Err(CalcError::MissingParameter(
                "Both numbers must be provided (num1 and num2)".to_string(),
            ));
        };

        match (parse_number(num1), parse_number(num2)) {
            (Some(num1), Some(num2)) => Ok(Self { num1, num2 }),
            _ => Err(CalcError::InvalidInput(
                "Both parameters must be numbers".to_string(),
            )),
        }
    }
}

/// Parses a JSON value as a finite number.
///
/// Accepts JSON numbers and strings holding a decimal float (surrounding
/// whitespace ignored). Everything else, including `"NaN"` and `"inf"`, is
/// rejected.
pub fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    number.is_finite().then_some(number)
}
