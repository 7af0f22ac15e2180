//! Session Module
//!
//! Calculator UI behavior as a library: operand entry, chaining, result
//! formatting, keyboard mapping and history, over a pluggable backend.

mod backend;
mod format;
mod keys;
mod state;

pub use backend::{CalculationBackend, HttpBackend, LocalBackend};
pub use format::{format_number, format_result, operator_symbol, RESULT_DECIMALS};
pub use keys::KeyAction;
pub use state::{Session, Status};
