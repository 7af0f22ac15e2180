//! Calculator Module
//!
//! Operand validation and the six arithmetic operations behind the API.

mod engine;
mod operands;
mod operation;


// Re-export public types
pub use engine::{evaluate, evaluate_operands};
pub use operands::{parse_number, Operands};
pub use operation::Operation;
