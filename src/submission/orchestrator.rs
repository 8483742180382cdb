//! Submission orchestration state machine.
//!
//! # Responsibilities
//! - Sequence validate → build → sign → submit against the boundary endpoints
//! - Own the `(status, tx_hash, error)` triple; nothing else writes it
//! - Convert every failure into a user-visible error string, never a panic
//!   or an error propagated out of `submit_transaction`

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::gateway::types::{BuildRequest, BuildResponse, SubmitRequest, TransactionOutput};
use crate::submission::amount::ada_to_lovelace;
use crate::submission::status::SubmissionStatus;
use crate::submission::wallet::{WalletCapability, WalletError};

/// User intent: where to send, and how much in display units.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionIntent {
    pub recipient: String,
    pub ada: f64,
}

/// The sole durable output of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub tx_hash: String,
}

/// Internal failure taxonomy. Only the rendered message leaves this module.
#[derive(Debug, Error)]
enum SubmissionError {
    #[error("Please connect your wallet first")]
    WalletNotConnected,

    #[error("Failed to sign transaction")]
    SigningDeclined,

    #[error("{0}")]
    Wallet(#[from] WalletError),

    /// Error message supplied by the boundary endpoint (or its fallback).
    #[error("{0}")]
    Boundary(String),

    #[error("{0}")]
    Transport(reqwest::Error),
}

/// Error body shape returned by the boundary endpoints.
#[derive(Deserialize)]
struct BoundaryErrorBody {
    error: Option<String>,
}

/// Submit success body from the boundary.
#[derive(Deserialize)]
struct SubmittedBody {
    hash: String,
}

/// Drives one transaction at a time through build, sign, and submit.
///
/// Steps are strictly sequential; there is no cancellation primitive. A call
/// in flight runs to completion (success or error) and `reset()` only clears
/// the displayed state.
pub struct SubmissionOrchestrator<W> {
    http: reqwest::Client,
    boundary_url: String,
    wallet: W,
    status: SubmissionStatus,
    tx_hash: Option<String>,
    error: Option<String>,
}

impl<W: WalletCapability> SubmissionOrchestrator<W> {
    /// Create an orchestrator talking to the boundary endpoints at
    /// `boundary_url` (e.g. `http://127.0.0.1:3000`).
    pub fn new(boundary_url: impl Into<String>, wallet: W) -> Self {
        let boundary_url = boundary_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            boundary_url,
            wallet,
            status: SubmissionStatus::Idle,
            tx_hash: None,
            error: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn tx_hash(&self) -> Option<&str> {
        self.tx_hash.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a submission is in flight.
    pub fn is_processing(&self) -> bool {
        self.status.is_processing()
    }

    /// Clear all displayed state back to idle.
    ///
    /// Does not abort an in-flight call; it only resets what the caller sees.
    pub fn reset(&mut self) {
        self.status = SubmissionStatus::Idle;
        self.tx_hash = None;
        self.error = None;
    }

    /// Run one full submission.
    ///
    /// Returns the confirmation handle on success, `None` on any failure;
    /// the failure reason is available via [`error`](Self::error). A call
    /// while the previous attempt is unacknowledged (processing or success)
    /// is rejected without touching any state.
    pub async fn submit_transaction(
        &mut self,
        intent: &TransactionIntent,
    ) -> Option<SubmissionResult> {
        if !self.status.can_start() {
            tracing::warn!(
                status = %self.status,
                "Submission rejected: previous attempt still active or unacknowledged"
            );
            return None;
        }

        self.error = None;
        self.tx_hash = None;

        match self.run(intent).await {
            Ok(result) => {
                tracing::info!(tx_hash = %result.tx_hash, "Transaction submitted");
                self.tx_hash = Some(result.tx_hash.clone());
                self.status = SubmissionStatus::Success;
                Some(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Transaction submission failed");
                self.error = Some(e.to_string());
                self.status = SubmissionStatus::Error;
                None
            }
        }
    }

    /// The happy path. Every early return funnels through the single catch
    /// point in `submit_transaction`.
    async fn run(&mut self, intent: &TransactionIntent) -> Result<SubmissionResult, SubmissionError> {
        let lovelace = ada_to_lovelace(intent.ada);

        // Wallet preconditions come before any transition or network call.
        let change_address = match self.wallet.change_address_bech32() {
            Some(addr) if self.wallet.is_connected() && !addr.is_empty() => addr,
            _ => return Err(SubmissionError::WalletNotConnected),
        };

        self.status = SubmissionStatus::Building;
        let utxos = self.wallet.get_utxos().await?;

        let build_request = BuildRequest {
            change_address,
            utxos,
            outputs: vec![TransactionOutput {
                address: intent.recipient.clone(),
                lovelace,
                assets: None,
            }],
        };
        let built: BuildResponse = self
            .call_boundary("build", &build_request, "Failed to build transaction")
            .await?;

        self.status = SubmissionStatus::Signing;
        let signature = match self.wallet.sign_tx(&built.complete).await? {
            Some(signature) if !signature.is_empty() => signature,
            _ => return Err(SubmissionError::SigningDeclined),
        };

        self.status = SubmissionStatus::Submitting;
        let submit_request = SubmitRequest {
            transaction: built.complete,
            signatures: Some(vec![signature]),
        };
        let submitted: SubmittedBody = self
            .call_boundary("submit", &submit_request, "Failed to submit transaction")
            .await?;

        Ok(SubmissionResult {
            tx_hash: submitted.hash,
        })
    }

    /// POST to a boundary endpoint; non-success responses yield the
    /// server-supplied error message, falling back to `fallback` when the
    /// body is unparseable.
    async fn call_boundary<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, SubmissionError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/api/transaction/{}", self.boundary_url, endpoint);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        if !response.status().is_success() {
            let message = response
                .json::<BoundaryErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| fallback.to_string());
            return Err(SubmissionError::Boundary(message));
        }

        response
            .json::<T>()
            .await
            .map_err(SubmissionError::Transport)
    }
}

impl<W> std::fmt::Debug for SubmissionOrchestrator<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionOrchestrator")
            .field("boundary_url", &self.boundary_url)
            .field("status", &self.status)
            .field("tx_hash", &self.tx_hash)
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// A wallet that is never connected; any network call would be a bug.
    struct DisconnectedWallet;

    #[async_trait]
    impl WalletCapability for DisconnectedWallet {
        fn is_connected(&self) -> bool {
            false
        }

        fn change_address_bech32(&self) -> Option<String> {
            None
        }

        async fn get_utxos(&self) -> Result<Vec<String>, WalletError> {
            panic!("UTXO fetch attempted with a disconnected wallet");
        }

        async fn sign_tx(&self, _complete: &str) -> Result<Option<String>, WalletError> {
            panic!("signing attempted with a disconnected wallet");
        }
    }

    fn intent() -> TransactionIntent {
        TransactionIntent {
            recipient: "addr_test1qdest".to_string(),
            ada: 5.0,
        }
    }

    #[tokio::test]
    async fn test_disconnected_wallet_fails_before_any_call() {
        // Dead boundary address: reaching the network would change the error.
        let mut orchestrator =
            SubmissionOrchestrator::new("http://127.0.0.1:1", DisconnectedWallet);

        let result = orchestrator.submit_transaction(&intent()).await;

        assert!(result.is_none());
        assert_eq!(orchestrator.status(), SubmissionStatus::Error);
        assert_eq!(orchestrator.error(), Some("Please connect your wallet first"));
        assert_eq!(orchestrator.tx_hash(), None);
        assert!(!orchestrator.is_processing());
    }

    #[tokio::test]
    async fn test_reset_restores_idle() {
        let mut orchestrator =
            SubmissionOrchestrator::new("http://127.0.0.1:1", DisconnectedWallet);

        orchestrator.submit_transaction(&intent()).await;
        assert_eq!(orchestrator.status(), SubmissionStatus::Error);

        orchestrator.reset();
        assert_eq!(orchestrator.status(), SubmissionStatus::Idle);
        assert_eq!(orchestrator.tx_hash(), None);
        assert_eq!(orchestrator.error(), None);
    }

    #[tokio::test]
    async fn test_resubmission_accepted_from_error() {
        let mut orchestrator =
            SubmissionOrchestrator::new("http://127.0.0.1:1", DisconnectedWallet);

        orchestrator.submit_transaction(&intent()).await;
        assert_eq!(orchestrator.status(), SubmissionStatus::Error);

        // Error state accepts a fresh attempt without reset.
        let result = orchestrator.submit_transaction(&intent()).await;
        assert!(result.is_none());
        assert_eq!(orchestrator.error(), Some("Please connect your wallet first"));
    }
}
