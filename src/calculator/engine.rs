//! Evaluation Module
//!
//! Runs the full validate-check-compute sequence for one request.

use crate::calculator::{Operands, Operation};
use crate::error::Result;
use crate::models::{OperationRequest, OperationResponse};

/// Evaluates one operation request.
///
/// # Validation Order
/// 1. Both operands present (`MissingParameter`)
/// 2. Both operands finite numbers (`InvalidInput`)
/// 3. Non-zero divisor for divide and modulo (`InvalidOperation`)
pub fn evaluate(operation: Operation, req: &OperationRequest) -> Result<OperationResponse> {
    let operands = Operands::from_request(req)?;
    evaluate_operands(operation, operands)
}

/// Evaluates already-parsed operands.
pub fn evaluate_operands(operation: Operation, operands: Operands) -> Result<OperationResponse> {
    operation.check(&operands)?;

    let result = operation.apply(operands.num1, operands.num2);
    Ok(OperationResponse::new(
        operation.label(),
        operands.num1,
        operands.num2,
        result,
    ))
}
