//! Calculator Server - A basic arithmetic calculator behind a JSON web API
//!
//! Six stateless operation endpoints, a static browser front end, and the
//! front end's session and history logic as a reusable library.

pub mod api;
pub mod calculator;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod server;
pub mod session;

pub use calculator::Operation;
pub use config::Config;
pub use error::CalcError;
pub use server::Server;
