//! Client-side submission orchestration.
//!
//! # Data Flow
//! ```text
//! caller intent (recipient, ada)
//!     → amount.rs (display units → lovelace, floored)
//!     → orchestrator.rs: wallet preconditions (wallet.rs)
//!     → building:   wallet UTXOs → POST boundary /api/transaction/build
//!     → signing:    wallet signs the complete envelope (may wait on a human)
//!     → submitting: POST boundary /api/transaction/submit
//!     → success (tx hash) | error (user-visible message)
//! ```
//!
//! # Design Decisions
//! - The orchestrator is the sole owner of (status, tx_hash, error)
//! - submit_transaction never propagates an error to its caller
//! - Re-entrant calls are rejected by an explicit guard, not by the UI

pub mod amount;
pub mod orchestrator;
pub mod status;
pub mod wallet;

pub use amount::{ada_to_lovelace, LOVELACE_PER_ADA};
pub use orchestrator::{SubmissionOrchestrator, SubmissionResult, TransactionIntent};
pub use status::SubmissionStatus;
pub use wallet::{WalletCapability, WalletError};
