//! Boundary endpoint subsystem.
//!
//! # Data Flow
//! ```text
//! caller (orchestrator or any HTTP client)
//!     → server.rs (Axum setup, request ID, timeout, body limit)
//!     → handlers.rs (presence validation → 400, delegate, translate errors → 500)
//!     → gateway client
//!     → JSON response to caller
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
