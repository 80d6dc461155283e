//! High-level client — `TradeDeskClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs` (auth lives
//! in `auth/client.rs`). This module keeps the builder, configuration and
//! accessor methods.

use crate::auth::client::Auth;
use crate::domain::backend::client::Backend;
use crate::domain::view::View;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::{RetryPolicy, TradeDeskHttp};

use serde::{Deserialize, Serialize};
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::backend::client::Backend as BackendClient;
pub use crate::domain::view::client::ViewClient;

/// The primary entry point for the TradeDesk SDK.
///
/// Provides nested sub-client accessors: `client.auth()`, `client.backend()`,
/// `client.orderbook()`, etc. Cloning shares the underlying connection pool.
pub struct TradeDeskClient {
    pub(crate) http: TradeDeskHttp,
    /// Retry policy applied to the three view fetches.
    pub(crate) fetch_retry: RetryPolicy,
}

impl TradeDeskClient {
    pub fn builder() -> TradeDeskClientBuilder {
        TradeDeskClientBuilder::default()
    }

    /// Build a client from host-provided configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, SdkError> {
        let mut builder = Self::builder()
            .base_url(&config.base_url)
            .timeout(Duration::from_millis(config.timeout_ms));
        if config.retry_fetches {
            builder = builder.fetch_retry(RetryPolicy::Idempotent);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn backend(&self) -> Backend<'_> {
        Backend { client: self }
    }

    pub fn view(&self, view: View) -> ViewClient<'_> {
        ViewClient { client: self, view }
    }

    pub fn orderbook(&self) -> ViewClient<'_> {
        self.view(View::OrderBook)
    }

    pub fn tradebook(&self) -> ViewClient<'_> {
        self.view(View::TradeBook)
    }

    pub fn profile(&self) -> ViewClient<'_> {
        self.view(View::Profile)
    }
}

impl Clone for TradeDeskClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            fetch_retry: self.fetch_retry.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Configuration
// ═════════════════════════════════════════════════════════════════════════════

/// Serializable client settings for hosts that keep configuration on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Native request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Opt the view fetches into [`RetryPolicy::Idempotent`].
    pub retry_fetches: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            retry_fetches: false,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TradeDeskClientBuilder {
    base_url: String,
    timeout: Duration,
    fetch_retry: RetryPolicy,
}

impl Default for TradeDeskClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            fetch_retry: RetryPolicy::None,
        }
    }
}

impl TradeDeskClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy for the view fetches. Login and activation are never retried.
    pub fn fetch_retry(mut self, policy: RetryPolicy) -> Self {
        self.fetch_retry = policy;
        self
    }

    pub fn build(self) -> Result<TradeDeskClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url must not be empty".into()));
        }
        Ok(TradeDeskClient {
            http: TradeDeskHttp::with_timeout(&self.base_url, self.timeout)?,
            fetch_retry: self.fetch_retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = TradeDeskClient::builder().build().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
        assert!(client.fetch_retry.is_none());
    }

    #[test]
    fn test_builder_rejects_empty_base_url() {
        let err = TradeDeskClient::builder().base_url("  ").build().err().unwrap();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://10.0.0.2:9000/"}"#).unwrap();
        assert_eq!(config.timeout_ms, 30_000);
        assert!(!config.retry_fetches);

        let client = TradeDeskClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://10.0.0.2:9000");
    }

    #[test]
    fn test_config_opts_fetches_into_retry() {
        let config = ClientConfig {
            retry_fetches: true,
            ..ClientConfig::default()
        };
        let client = TradeDeskClient::from_config(&config).unwrap();
        assert!(matches!(client.fetch_retry, RetryPolicy::Idempotent));
    }

    #[test]
    fn test_view_accessors() {
        let client = TradeDeskClient::builder().build().unwrap();
        assert_eq!(client.orderbook().view(), View::OrderBook);
        assert_eq!(client.tradebook().view(), View::TradeBook);
        assert_eq!(client.profile().view(), View::Profile);
    }
}
