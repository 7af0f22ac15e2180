//! Error types for the calculator server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Calc Error Enum ==
/// Unified error type for the calculator server.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required operand was absent from the request
    #[error("{0}")]
    MissingParameter(String),

    /// An operand did not parse as a finite number
    #[error("{0}")]
    InvalidInput(String),

    /// The operation is undefined for the given operands (division by zero)
    #[error("{0}")]
    InvalidOperation(String),

    /// Unexpected failure while handling the request
    #[error("{0}")]
    ServerFault(String),
}

impl CalcError {
    /// Short machine-readable kind, sent as the `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::MissingParameter(_) => "MissingParameter",
            CalcError::InvalidInput(_) => "InvalidInput",
            CalcError::InvalidOperation(_) => "InvalidOperation",
            CalcError::ServerFault(_) => "ServerFault",
        }
    }

    /// HTTP status the error is surfaced with.
    pub fn status(&self) -> StatusCode {
        match self {
            CalcError::ServerFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed with server fault");
        }

        let body = Json(ErrorResponse::new(self.kind(), self.to_string()));
        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the calculator server.
pub type Result<T> = std::result::Result<T, CalcError>;
