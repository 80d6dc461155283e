//! Retry policies for the view fetches.
//!
//! Every endpoint is sent once by default: a failed request is reported and the
//! user decides whether to try again. Only the read-only view fetches can opt
//! into retries, through the client builder. Login and activation never retry.

use std::time::Duration;

use crate::error::HttpError;

/// Retry policy for a view fetch.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Send once.
    #[default]
    None,
    /// [`RetryConfig::default`]: transport failures, 429 and 502/503/504.
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    pub fn is_none(&self) -> bool {
        matches!(self, RetryPolicy::None)
    }

    /// The backoff settings to use, or `None` for a single attempt.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::default()),
            RetryPolicy::Custom(config) => Some(config.clone()),
        }
    }
}

/// Backoff settings for a retried fetch.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the first one.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Spread each delay by up to ±25%.
    pub jitter: bool,
    /// Response statuses worth another attempt (429 included).
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Whether a failed fetch should be sent again.
    ///
    /// Rejections never reach here: a view has no success flag, and any
    /// status outside the list (401, 404, 500, ...) is final.
    pub fn should_retry(&self, error: &HttpError) -> bool {
        match error {
            HttpError::ServerError { status, .. } => self.retryable_statuses.contains(status),
            HttpError::RateLimited => self.retryable_statuses.contains(&429),
            HttpError::Timeout => true,
            HttpError::Reqwest(e) => {
                #[cfg(not(target_arch = "wasm32"))]
                let retryable = e.is_connect() || e.is_timeout();
                #[cfg(target_arch = "wasm32")]
                let retryable = e.is_timeout() || e.is_request();
                retryable
            }
            HttpError::Unauthorized | HttpError::NotFound(_) | HttpError::BadRequest(_) => false,
        }
    }

    /// Delay before retry number `attempt + 1`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let ms = if self.jitter {
            let spread = capped * 0.25;
            (capped + (rand::random::<f64>() - 0.5) * 2.0 * spread).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(ms as u64)
    }
}
