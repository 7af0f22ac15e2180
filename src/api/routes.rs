//! API Routes
//!
//! Configures the Axum router with the calculator endpoints, static assets
//! and fallbacks.

use axum::{handler::HandlerWithoutStateExt, routing::post, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    add_handler, divide_handler, handle_panic, modulo_handler, multiply_handler, power_handler,
    route_not_found, subtract_handler,
};
use crate::config::Config;

/// Prefix shared by all operation endpoints.
pub const API_PREFIX: &str = "/api/calculator";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/calculator/{add,subtract,multiply,divide,power,modulo}`
/// - `GET /*` - Static front-end assets from `config.static_dir`
///
/// Other methods on the operation paths and unknown paths get a 404 JSON
/// body. Handler panics become a 500 JSON body.
///
/// # Middleware
/// - Catch-panic: structured 500 fallback
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(config: &Config) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(route_not_found.into_service());

    Router::new()
        .route(
            &format!("{API_PREFIX}/add"),
            post(add_handler).fallback(route_not_found),
        )
        .route(
            &format!("{API_PREFIX}/subtract"),
            post(subtract_handler).fallback(route_not_found),
        )
        .route(
            &format!("{API_PREFIX}/multiply"),
            post(multiply_handler).fallback(route_not_found),
        )
        .route(
            &format!("{API_PREFIX}/divide"),
            post(divide_handler).fallback(route_not_found),
        )
        .route(
            &format!("{API_PREFIX}/power"),
            post(power_handler).fallback(route_not_found),
        )
        .route(
            &format!("{API_PREFIX}/modulo"),
            post(modulo_handler).fallback(route_not_found),
        )
        .fallback_service(static_files)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
