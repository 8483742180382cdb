//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the transaction relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address, body limits).
    pub listener: ListenerConfig,

    /// Upstream gateway settings (base URL, API key, network).
    pub gateway: GatewayConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Cardano network the relay operates against.
///
/// Selects the default gateway base URL and the explorer host used for
/// transaction links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Preprod,
    Preview,
}

impl Network {
    /// Gateway base URL used when none is configured explicitly.
    pub fn default_gateway_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://prod.api.ada-anvil.app/v2/services",
            Network::Preprod => "https://preprod.api.ada-anvil.app/v2/services",
            Network::Preview => "https://preview.api.ada-anvil.app/v2/services",
        }
    }

    /// Explorer link for a submitted transaction.
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        match self {
            Network::Mainnet => format!("https://cexplorer.io/tx/{}", tx_hash),
            _ => format!("https://{}.cexplorer.io/tx/{}", self, tx_hash),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Preprod => "preprod",
            Network::Preview => "preview",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "preprod" => Ok(Network::Preprod),
            "preview" => Ok(Network::Preview),
            other => Err(format!("unknown network '{}'", other)),
        }
    }
}

/// Upstream transaction gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Gateway base URL. Empty means derive from `network`.
    pub base_url: String,

    /// Secret API key sent as `X-Api-Key`. Usually set via `ANVIL_API_KEY`.
    pub api_key: String,

    /// Network the gateway builds and submits for.
    pub network: Network,

    /// Per-request timeout for gateway calls in seconds.
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            network: Network::default(),
            request_timeout_secs: 30,
        }
    }
}

impl GatewayConfig {
    /// The base URL to use: explicit if set, otherwise the network default.
    pub fn effective_base_url(&self) -> String {
        if self.base_url.is_empty() {
            self.network.default_gateway_url().to_string()
        } else {
            self.base_url.trim_end_matches('/').to_string()
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Overall request timeout in seconds for the relay endpoints.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.gateway.network, Network::Preprod);
        assert!(config.gateway.base_url.is_empty());
        assert_eq!(config.timeouts.request_secs, 60);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_effective_base_url_derives_from_network() {
        let mut gateway = GatewayConfig::default();
        assert_eq!(
            gateway.effective_base_url(),
            "https://preprod.api.ada-anvil.app/v2/services"
        );

        gateway.base_url = "http://localhost:9200/".to_string();
        assert_eq!(gateway.effective_base_url(), "http://localhost:9200");
    }

    #[test]
    fn test_explorer_urls() {
        assert_eq!(
            Network::Mainnet.explorer_tx_url("abc"),
            "https://cexplorer.io/tx/abc"
        );
        assert_eq!(
            Network::Preprod.explorer_tx_url("abc"),
            "https://preprod.cexplorer.io/tx/abc"
        );
    }

    #[test]
    fn test_network_parsing() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("PREVIEW".parse::<Network>().unwrap(), Network::Preview);
        assert!("devnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_minimal_toml() {
        let config: RelayConfig = toml::from_str(
            r#"
            [gateway]
            api_key = "k1"
            network = "mainnet"
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.api_key, "k1");
        assert_eq!(config.gateway.network, Network::Mainnet);
        assert_eq!(config.listener.max_body_bytes, 1024 * 1024);
    }
}
