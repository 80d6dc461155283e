//! Low-level HTTP client — `TradeDeskHttp`.
//!
//! One method per backend endpoint. Returns raw JSON bodies; reading the
//! `success` envelope happens in the sub-clients. Internal to the SDK — the
//! high-level client wraps this.

use crate::auth::Credentials;
use crate::domain::view::View;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::network::{LOGIN_PATH, START_BACKEND_PATH};

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Default per-request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the TradeDesk REST API.
///
/// No auth header is ever attached: the backend tracks the session on its side
/// (in the browser, through its own cookie).
pub struct TradeDeskHttp {
    base_url: String,
    client: Client,
}

impl TradeDeskHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// `timeout` applies on native targets only; the browser owns request
    /// lifetimes on WASM.
    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn login(&self, credentials: &Credentials) -> Result<Value, HttpError> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        self.send(Method::POST, &url, Some(credentials)).await
    }

    // ── Backend ──────────────────────────────────────────────────────────

    pub async fn start_backend(&self) -> Result<Value, HttpError> {
        let url = format!("{}{}", self.base_url, START_BACKEND_PATH);
        self.send(Method::POST, &url, None::<&()>).await
    }

    // ── Views ────────────────────────────────────────────────────────────

    /// GET one view, resending transient failures as `retry` allows.
    pub async fn get_view(&self, view: View, retry: &RetryPolicy) -> Result<Value, HttpError> {
        let url = format!("{}{}", self.base_url, view.path());
        let Some(config) = retry.config() else {
            return self.send(Method::GET, &url, None::<&()>).await;
        };

        let mut attempt = 0;
        loop {
            let err = match self.send(Method::GET, &url, None::<&()>).await {
                Ok(payload) => return Ok(payload),
                Err(e) => e,
            };
            if attempt >= config.max_retries || !config.should_retry(&err) {
                return Err(err);
            }
            let delay = config.delay_for_attempt(attempt);
            attempt += 1;
            tracing::debug!(
                view = %view,
                attempt,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "retrying fetch"
            );
            futures_timer::Delay::new(delay).await;
        }
    }

    // ── Internal ─────────────────────────────────────────────────────────

    /// One round trip. A 2xx body must parse as JSON; anything else is an error.
    async fn send<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Value, HttpError> {
        tracing::debug!(method = %method, url, "request");

        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<Value>().await?);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited,
            400..=499 => HttpError::BadRequest(body),
            code => HttpError::ServerError { status: code, body },
        })
    }
}

impl Clone for TradeDeskHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = TradeDeskHttp::new("http://localhost:8000/").unwrap();
        assert_eq!(http.base_url(), "http://localhost:8000");
    }
}
