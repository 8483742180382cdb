//! Authenticated HTTP client for the transaction gateway.
//!
//! # Responsibilities
//! - POST to {base}/transactions/build and {base}/transactions/submit
//! - Attach the X-Api-Key secret header
//! - Fail fast on missing required fields, before any network call
//! - Translate non-success responses into a uniform error

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::config::schema::GatewayConfig;
use crate::gateway::types::{
    BuildRequest, BuildResponse, GatewayError, GatewayResult, SubmitRequest, SubmitResponse,
};

/// Error body shapes the gateway is known to produce.
#[derive(Deserialize)]
struct RemoteErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Client for the remote transaction gateway.
///
/// Holds no per-call state; every call is independent. Cloning is cheap and
/// concurrent use is safe.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GatewayClient {
    /// Create a new gateway client from configuration.
    ///
    /// Fails with a configuration error if the API key is absent or the base
    /// URL does not parse, so a misconfigured relay is caught at startup
    /// rather than on the first user transaction.
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let base_url = config.effective_base_url();
        base_url.parse::<url::Url>().map_err(|e| {
            GatewayError::Configuration(format!("invalid gateway base URL '{}': {}", base_url, e))
        })?;

        if config.api_key.is_empty() {
            return Err(GatewayError::Configuration(
                "gateway API key is not set".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Build an unsigned transaction from the wallet's UTXO set.
    pub async fn build(&self, request: &BuildRequest) -> GatewayResult<BuildResponse> {
        if request.change_address.is_empty() {
            return Err(GatewayError::Validation(
                "changeAddress must not be empty".to_string(),
            ));
        }
        if request.utxos.is_empty() {
            return Err(GatewayError::Validation(
                "utxos must not be empty".to_string(),
            ));
        }
        if request.outputs.is_empty() {
            return Err(GatewayError::Validation(
                "outputs must not be empty".to_string(),
            ));
        }

        self.post("transactions/build", request).await
    }

    /// Submit a signed (or pre-witnessed) transaction to the ledger.
    pub async fn submit(&self, request: &SubmitRequest) -> GatewayResult<SubmitResponse> {
        if request.transaction.is_empty() {
            return Err(GatewayError::Validation(
                "transaction must not be empty".to_string(),
            ));
        }
        // An absent signatures field is a supported path (already-witnessed
        // transaction); an explicitly empty list is always a caller bug.
        if let Some(signatures) = &request.signatures {
            if signatures.is_empty() {
                return Err(GatewayError::Validation(
                    "signatures must not be empty when present".to_string(),
                ));
            }
        }

        self.post("transactions/submit", request).await
    }

    /// POST a JSON body to a gateway endpoint and decode the response.
    async fn post<B, T>(&self, endpoint: &str, body: &B) -> GatewayResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .http
            .post(&url)
            .header("X-Api-Key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<RemoteErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error.or(b.message))
                .unwrap_or_else(|| "Unknown error".to_string());
            tracing::warn!(
                endpoint = endpoint,
                status = status.as_u16(),
                message = %message,
                "Gateway returned error"
            );
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::types::TransactionOutput;

    fn test_config() -> GatewayConfig {
        GatewayConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: "test-key".to_string(),
            ..GatewayConfig::default()
        }
    }

    fn some_output() -> TransactionOutput {
        TransactionOutput {
            address: "addr_test1qdest".to_string(),
            lovelace: 1_000_000,
            assets: None,
        }
    }

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let config = GatewayConfig {
            api_key: String::new(),
            ..test_config()
        };
        let result = GatewayClient::new(&config);
        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let config = GatewayConfig {
            base_url: "not a url".to_string(),
            ..test_config()
        };
        let result = GatewayClient::new(&config);
        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_build_preconditions_fail_without_network() {
        // base_url points at a dead port; a validation failure must return
        // before any connection attempt.
        let client = GatewayClient::new(&test_config()).unwrap();

        let empty_utxos = BuildRequest {
            change_address: "addr_test1qchange".to_string(),
            utxos: vec![],
            outputs: vec![some_output()],
        };
        let err = client.build(&empty_utxos).await.unwrap_err();
        assert!(matches!(err, GatewayError::Validation(ref m) if m.contains("utxos")));

        let empty_change = BuildRequest {
            change_address: String::new(),
            utxos: vec!["utxo1".to_string()],
            outputs: vec![some_output()],
        };
        let err = client.build(&empty_change).await.unwrap_err();
        assert!(matches!(err, GatewayError::Validation(ref m) if m.contains("changeAddress")));

        let empty_outputs = BuildRequest {
            change_address: "addr_test1qchange".to_string(),
            utxos: vec!["utxo1".to_string()],
            outputs: vec![],
        };
        let err = client.build(&empty_outputs).await.unwrap_err();
        assert!(matches!(err, GatewayError::Validation(ref m) if m.contains("outputs")));
    }

    #[tokio::test]
    async fn test_submit_distinguishes_empty_from_absent_signatures() {
        let client = GatewayClient::new(&test_config()).unwrap();

        let explicit_empty = SubmitRequest {
            transaction: "cbor1".to_string(),
            signatures: Some(vec![]),
        };
        let err = client.submit(&explicit_empty).await.unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));

        // Absent signatures pass validation and reach the (dead) network,
        // so the failure is transport, not validation.
        let absent = SubmitRequest {
            transaction: "cbor1".to_string(),
            signatures: None,
        };
        let err = client.submit(&absent).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_empty_transaction_is_validation_error() {
        let client = GatewayClient::new(&test_config()).unwrap();
        let request = SubmitRequest {
            transaction: String::new(),
            signatures: Some(vec!["sig1".to_string()]),
        };
        let err = client.submit(&request).await.unwrap_err();
        assert!(matches!(err, GatewayError::Validation(ref m) if m.contains("transaction")));
    }
}
