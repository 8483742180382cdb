//! Gateway wire types and error definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export GatewayConfig from config module to avoid duplication
pub use crate::config::schema::GatewayConfig;

/// A single transaction output: destination, lovelace, optional native assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutput {
    pub address: String,
    pub lovelace: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<BTreeMap<String, u64>>,
}

/// Request body for the gateway build operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    /// Sender address that receives change.
    pub change_address: String,
    /// Opaque CBOR-encoded UTXO references from the wallet.
    pub utxos: Vec<String>,
    /// Where the funds go.
    pub outputs: Vec<TransactionOutput>,
}

/// Unsigned transaction envelope returned by the build operation.
///
/// All fields are opaque CBOR hex encodings. `complete` is what the wallet
/// signs and what gets submitted; `stripped` and `witness_set` are the
/// witness-free variant and the extractable witness set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResponse {
    pub hash: String,
    pub complete: String,
    pub stripped: String,
    pub witness_set: String,
}

/// Request body for the gateway submit operation.
///
/// `signatures: None` submits the transaction as-is (already witnessed);
/// an explicitly empty list is rejected before any network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub transaction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<String>>,
}

/// Ledger confirmation handle returned by the submit operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub tx_hash: String,
}

/// Errors that can occur during gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required field was missing or empty; detected before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Gateway base URL or API key missing; detected before any network call.
    #[error("gateway not configured: {0}")]
    Configuration(String),

    /// The gateway answered with a non-success status.
    #[error("gateway error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The request never produced a gateway response.
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_wire_shape() {
        let request = BuildRequest {
            change_address: "addr_test1qchange".to_string(),
            utxos: vec!["utxo1".to_string()],
            outputs: vec![TransactionOutput {
                address: "addr_test1qdest".to_string(),
                lovelace: 5_000_000,
                assets: None,
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["changeAddress"], "addr_test1qchange");
        assert_eq!(json["outputs"][0]["lovelace"], 5_000_000);
        // absent assets must not serialize as null
        assert!(json["outputs"][0].get("assets").is_none());
    }

    #[test]
    fn test_build_response_camel_case() {
        let response: BuildResponse = serde_json::from_str(
            r#"{"hash":"h1","complete":"cbor1","stripped":"s1","witnessSet":"w1"}"#,
        )
        .unwrap();
        assert_eq!(response.witness_set, "w1");
    }

    #[test]
    fn test_submit_request_omits_absent_signatures() {
        let request = SubmitRequest {
            transaction: "cbor1".to_string(),
            signatures: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("signatures").is_none());
    }

    #[test]
    fn test_error_display() {
        let err = GatewayError::Remote {
            status: 500,
            message: "insufficient funds".to_string(),
        };
        assert_eq!(err.to_string(), "gateway error (500): insufficient funds");

        let err = GatewayError::Validation("utxos must not be empty".to_string());
        assert!(err.to_string().contains("utxos"));
    }
}
