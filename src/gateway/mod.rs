//! Remote transaction gateway integration.
//!
//! # Data Flow
//! ```text
//! boundary endpoint (http/handlers.rs)
//!     → client.rs (precondition checks, fail fast)
//!     → POST {base}/transactions/build  | X-Api-Key header
//!     → POST {base}/transactions/submit | X-Api-Key header
//!     → types.rs (decode success / translate error body)
//! ```
//!
//! # Design Decisions
//! - Config injected at construction; misconfiguration fails at startup
//! - No state retained between calls; client is Clone and concurrency-safe
//! - Remote errors carry status + best-effort message, never raw bodies

pub mod client;
pub mod types;

pub use client::GatewayClient;
pub use types::{
    BuildRequest, BuildResponse, GatewayError, GatewayResult, SubmitRequest, SubmitResponse,
    TransactionOutput,
};
