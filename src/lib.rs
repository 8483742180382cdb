//! Cardano transaction relay and submission orchestrator.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────────┐
//!                  │                      ADA RELAY                        │
//!                  │                                                       │
//!  orchestrator    │  ┌──────────┐     ┌──────────┐     ┌──────────────┐  │
//!  (submission) ───┼─▶│   http   │────▶│ handlers │────▶│   gateway    │──┼──▶ transaction
//!                  │  │  server  │     │ build/   │     │   client     │  │    gateway
//!       ▲          │  └──────────┘     │ submit   │     └──────────────┘  │    (build/submit)
//!       │          │                   └──────────┘                       │
//!  wallet          │  ┌─────────────────────────────────────────────────┐ │
//!  capability      │  │             Cross-Cutting Concerns               │ │
//!  (sign, UTXOs)   │  │  ┌────────┐ ┌──────────────┐ ┌───────────────┐  │ │
//!                  │  │  │ config │ │observability │ │   lifecycle   │  │ │
//!                  │  │  └────────┘ └──────────────┘ └───────────────┘  │ │
//!                  │  └─────────────────────────────────────────────────┘ │
//!                  └──────────────────────────────────────────────────────┘
//! ```
//!
//! The [`submission`] orchestrator drives one transaction at a time through
//! build → sign → submit, delegating signing and UTXO retrieval to an injected
//! [`submission::WalletCapability`] and transaction construction/broadcast to
//! the remote gateway behind the boundary endpoints.

pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod submission;

pub use config::{Network, RelayConfig};
pub use gateway::GatewayClient;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use submission::{
    SubmissionOrchestrator, SubmissionResult, SubmissionStatus, TransactionIntent,
    WalletCapability,
};
