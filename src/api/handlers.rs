//! API Handlers
//!
//! HTTP request handlers for each calculator endpoint, plus the not-found and
//! panic fallbacks.

use std::any::Any;

use axum::{
    extract::{rejection::JsonRejection, OriginalUri},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::calculator::{evaluate, Operation};
use crate::error::{CalcError, Result};
use crate::models::{ErrorResponse, OperationRequest, OperationResponse};

/// Request body as extracted by axum, rejection included.
pub type OperationBody = std::result::Result<Json<OperationRequest>, JsonRejection>;

/// Handler for POST /api/calculator/add
pub async fn add_handler(body: OperationBody) -> Result<Json<OperationResponse>> {
    calculate(Operation::Add, body)
}

/// Handler for POST /api/calculator/subtract
pub async fn subtract_handler(body: OperationBody) -> Result<Json<OperationResponse>> {
    calculate(Operation::Subtract, body)
}

/// Handler for POST /api/calculator/multiply
pub async fn multiply_handler(body: OperationBody) -> Result<Json<OperationResponse>> {
    calculate(Operation::Multiply, body)
}

/// Handler for POST /api/calculator/divide
///
/// Rejects a zero divisor with 400.
pub async fn divide_handler(body: OperationBody) -> Result<Json<OperationResponse>> {
    calculate(Operation::Divide, body)
}

/// Handler for POST /api/calculator/power
pub async fn power_handler(body: OperationBody) -> Result<Json<OperationResponse>> {
    calculate(Operation::Power, body)
}

/// Handler for POST /api/calculator/modulo
///
/// Rejects a zero divisor with 400. The remainder takes the dividend's sign.
pub async fn modulo_handler(body: OperationBody) -> Result<Json<OperationResponse>> {
    calculate(Operation::Modulo, body)
}

fn calculate(operation: Operation, body: OperationBody) -> Result<Json<OperationResponse>> {
    let req = decode_body(body)?;
    evaluate(operation, &req).map(Json)
}

/// Maps body extraction failures onto the calculator's error taxonomy.
///
/// A body sent without a JSON content type is read as an empty object, so it
/// surfaces as a missing parameter rather than a transport error.
fn decode_body(body: OperationBody) -> Result<OperationRequest> {
    match body {
        Ok(Json(req)) => Ok(req),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(OperationRequest::default()),
        Err(JsonRejection::BytesRejection(rejection)) => {
            Err(CalcError::ServerFault(rejection.body_text()))
        }
        Err(rejection) => {
            debug!(rejection = %rejection.body_text(), "Rejected request body");
            Err(CalcError::InvalidInput(
                "Request body must be a JSON object with num1 and num2".to_string(),
            ))
        }
    }
}

/// Fallback for any path (or method) no route or static file matches.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(uri.path())),
    )
}

/// Turns a handler panic into a structured 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    error!(%message, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("ServerFault", message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;
    use serde_json::json;

    fn body(num1: serde_json::Value, num2: serde_json::Value) -> OperationBody {
        Ok(Json(OperationRequest::new(num1, num2)))
    }

    async fn to_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_add_handler() {
        let response = add_handler(body(json!(2), json!(3))).await.unwrap();
        assert_eq!(response.result, 5.0);
        assert_eq!(response.operation, "Addition (+)");
    }

    #[tokio::test]
    async fn test_each_handler_uses_its_operation() {
        let (a, b) = (json!(9), json!(4));
        assert_eq!(subtract_handler(body(a.clone(), b.clone())).await.unwrap().result, 5.0);
        assert_eq!(multiply_handler(body(a.clone(), b.clone())).await.unwrap().result, 36.0);
        assert_eq!(divide_handler(body(a.clone(), b.clone())).await.unwrap().result, 2.25);
        assert_eq!(power_handler(body(a.clone(), b.clone())).await.unwrap().result, 6561.0);
        assert_eq!(modulo_handler(body(a, b)).await.unwrap().result, 1.0);
    }

    #[tokio::test]
    async fn test_divide_handler_zero() {
        let result = divide_handler(body(json!(10), json!(0))).await;
        assert!(matches!(result, Err(CalcError::InvalidOperation(_))));
    }

    #[tokio::test]
    async fn test_modulo_handler_negative_dividend() {
        let response = modulo_handler(body(json!(-7), json!(3))).await.unwrap();
        assert_eq!(response.result, -1.0);
    }

    #[tokio::test]
    async fn test_add_handler_invalid_input() {
        let result = add_handler(body(json!("abc"), json!(3))).await;
        assert!(matches!(result, Err(CalcError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_route_not_found_names_path() {
        let uri: Uri = "/does/not/exist?x=1".parse().unwrap();
        let response = route_not_found(OriginalUri(uri)).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = to_json(response).await;
        assert_eq!(json["error"], "NotFound");
        assert!(json["message"].as_str().unwrap().contains("/does/not/exist"));
    }

    #[tokio::test]
    async fn test_handle_panic_message() {
        let response = handle_panic(Box::new("kaboom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = to_json(response).await;
        assert_eq!(json["error"], "ServerFault");
        assert_eq!(json["message"], "kaboom");
    }

    #[tokio::test]
    async fn test_handle_panic_formatted_message() {
        let response = handle_panic(Box::new(format!("bad value {}", 7)));
        let json = to_json(response).await;
        assert_eq!(json["message"], "bad value 7");
    }
}
