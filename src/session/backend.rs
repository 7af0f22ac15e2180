//! Calculation backends a session can drive.

use std::future::Future;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::calculator::{evaluate_operands, Operands, Operation};
use crate::error::{CalcError, Result};
use crate::models::{ErrorResponse, OperationResponse};

/// Something that can carry out one operation, locally or over the wire.
pub trait CalculationBackend {
    /// Computes `operation` on the two operands.
    fn calculate(
        &self,
        operation: Operation,
        num1: f64,
        num2: f64,
    ) -> impl Future<Output = Result<OperationResponse>> + Send;
}

/// Evaluates in-process with the same rules as the HTTP API.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalBackend;

impl CalculationBackend for LocalBackend {
    async fn calculate(
        &self,
        operation: Operation,
        num1: f64,
        num2: f64,
    ) -> Result<OperationResponse> {
        evaluate_operands(operation, Operands { num1, num2 })
    }
}

// == HTTP Backend ==
/// Calls a running calculator API, as the browser front end does.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

/// Success body as it arrives on the wire; non-finite results are `null`.
#[derive(Deserialize)]
struct WireResult {
    operation: String,
    num1: f64,
    num2: f64,
    result: Option<f64>,
}

impl HttpBackend {
    /// Creates a backend for the server at `base_url`, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Same as [`HttpBackend::new`] with a caller-supplied client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn endpoint(&self, operation: Operation) -> String {
        format!("{}/api/calculator/{}", self.base_url, operation)
    }
}

impl CalculationBackend for HttpBackend {
    async fn calculate(
        &self,
        operation: Operation,
        num1: f64,
        num2: f64,
    ) -> Result<OperationResponse> {
        let response = self
            .client
            .post(self.endpoint(operation))
            .json(&json!({"num1": num1, "num2": num2}))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorResponse = response.json().await.map_err(transport_error)?;
            debug!(%status, kind = %body.error, "Calculation rejected by server");
            return Err(error_from_body(body));
        }

        let body: WireResult = response.json().await.map_err(transport_error)?;
        // The server computed it; only the JSON encoding lost the value
        let result = body
            .result
            .unwrap_or_else(|| operation.apply(body.num1, body.num2));
        Ok(OperationResponse::new(body.operation, body.num1, body.num2, result))
    }
}

fn transport_error(err: reqwest::Error) -> CalcError {
    CalcError::ServerFault(format!("Connection error: {err}"))
}

/// Maps an error body back onto the taxonomy; unknown kinds are server faults.
fn error_from_body(body: ErrorResponse) -> CalcError {
    match body.error.as_str() {
        "MissingParameter" => CalcError::MissingParameter(body.message),
        "InvalidInput" => CalcError::InvalidInput(body.message),
        "InvalidOperation" => CalcError::InvalidOperation(body.message),
        _ => CalcError::ServerFault(body.message),
    }
}
