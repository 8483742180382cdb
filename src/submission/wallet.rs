//! Wallet capability boundary.
//!
//! The wallet itself (extension discovery, connection, key management) is an
//! external collaborator. The orchestrator consumes it behind this trait and
//! never learns anything about the wallet protocol.

use async_trait::async_trait;
use thiserror::Error;

/// A wallet operation failed (extension error, user closed the popup, ...).
#[derive(Debug, Clone, Error)]
#[error("wallet error: {0}")]
pub struct WalletError(pub String);

/// The injected wallet surface the orchestrator depends on.
///
/// `get_utxos` and `sign_tx` may suspend indefinitely: signing in particular
/// waits on human approval in the wallet UI and the orchestrator deliberately
/// imposes no timeout on it.
#[async_trait]
pub trait WalletCapability: Send + Sync {
    /// Whether a wallet is currently connected.
    fn is_connected(&self) -> bool;

    /// The connected wallet's change address, bech32-encoded.
    fn change_address_bech32(&self) -> Option<String>;

    /// Fetch the wallet's current UTXO set as opaque CBOR references.
    async fn get_utxos(&self) -> Result<Vec<String>, WalletError>;

    /// Request a witness over the complete transaction envelope.
    ///
    /// `Ok(None)` means the wallet declined to sign; the orchestrator treats
    /// that as a hard failure, not a retry.
    async fn sign_tx(&self, complete: &str) -> Result<Option<String>, WalletError>;
}
