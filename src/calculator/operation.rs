//! Operation Module
//!
//! The six arithmetic operations and their IEEE-754 semantics.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::calculator::Operands;
use crate::error::{CalcError, Result};

// == Operation Enum ==
/// One arithmetic operation, named by its endpoint path segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// `num1 + num2`
    Add,
    /// `num1 - num2`
    Subtract,
    /// `num1 * num2`
    Multiply,
    /// `num1 / num2`, rejects a zero divisor
    Divide,
    /// `num1` raised to `num2`
    Power,
    /// Floating remainder of `num1 / num2`, rejects a zero divisor
    Modulo,
}

impl Operation {
    /// Path segment under `/api/calculator`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Human-readable label returned in every success response.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition (+)",
            Operation::Subtract => "Subtraction (-)",
            Operation::Multiply => "Multiplication (×)",
            Operation::Divide => "Division (÷)",
            Operation::Power => "Power (^)",
            Operation::Modulo => "Modulo (%)",
        }
    }

    /// Rejects operands the operation is undefined for.
    pub fn check(self, operands: &Operands) -> Result<()> {
        // -0.0 == 0.0, so a negative zero divisor is rejected too
        match self {
            Operation::Divide if operands.num2 == 0.0 => Err(CalcError::InvalidOperation(
                "Cannot divide by zero".to_string(),
            )),
            Operation::Modulo if operands.num2 == 0.0 => Err(CalcError::InvalidOperation(
                "Cannot take modulo by zero".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Computes the operation with plain f64 arithmetic.
    ///
    /// `Modulo` is the truncated remainder: the result takes the sign of the
    /// dividend, so `-7 mod 3` is `-1`, not `2`.
    pub fn apply(self, num1: f64, num2: f64) -> f64 {
        match self {
            Operation::Add => num1 + num2,
            Operation::Subtract => num1 - num2,
            Operation::Multiply => num1 * num2,
            Operation::Divide => num1 / num2,
            Operation::Power => num1.powf(num2),
            Operation::Modulo => num1 % num2,
        }
    }
}
