//! API Module
//!
//! HTTP handlers and routing for the calculator REST API.
//!
//! # Endpoints
//! - `POST /api/calculator/add` - Sum of num1 and num2
//! - `POST /api/calculator/subtract` - Difference
//! - `POST /api/calculator/multiply` - Product
//! - `POST /api/calculator/divide` - Quotient, 400 on zero divisor
//! - `POST /api/calculator/power` - num1 raised to num2
//! - `POST /api/calculator/modulo` - Remainder, 400 on zero divisor
//! - `GET /*` - Static front end

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, API_PREFIX};
