//! HTTP client layer — `TradeDeskHttp` with opt-in retry policies.

pub mod client;
pub mod retry;

pub use client::TradeDeskHttp;
pub use retry::{RetryConfig, RetryPolicy};
