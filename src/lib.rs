//! # TradeDesk SDK
//!
//! A Rust client for the TradeDesk trading backend supporting both native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Views, data buckets, errors, boundary constants (always available, WASM-safe)
//! 2. **Auth** — Login credential record and wire types
//! 3. **HTTP API** — `TradeDeskHttp`, one method per backend endpoint
//! 4. **High-Level Client** — `TradeDeskClient` with nested sub-clients
//! 5. **Controllers** — the login form controller and the session data orchestrator,
//!    reporting to the presentation layer through an [`controller::EventSink`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradedesk::prelude::*;
//!
//! let client = TradeDeskClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let (sink, mut events) = ChannelSink::new();
//! let mut login = AuthController::new(client, sink);
//! login.update_field(CredentialField::Totp, "123456");
//! // ...
//! let session = match login.submit().await {
//!     Submission::Authenticated(auth) => auth.into_session(),
//!     Submission::Editing { controller, .. } => return retry(controller),
//! };
//! session.activate().await?;
//! session.select_tab(View::OrderBook).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared helpers for reading backend response envelopes.
pub mod shared;

/// Views and the client-held data buckets.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and endpoint constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credential record, login wire types.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TradeDeskClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: Controllers ─────────────────────────────────────────────────────

/// Login controller, session orchestrator and UI events.
pub mod controller;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::{ActivationState, Buckets, DataBucket, View};

    // Errors
    pub use crate::error::{AuthError, ErrorKind, HttpError, SdkError, SessionError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth types
    pub use crate::auth::{CredentialField, Credentials, LoginResponse};

    // UI events
    pub use crate::controller::events::{
        ChannelSink, EventSink, Notification, NullSink, Route, Severity, UiEvent,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, BackendClient, ClientConfig, TradeDeskClient, TradeDeskClientBuilder,
        ViewClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Controllers
    #[cfg(feature = "http")]
    pub use crate::controller::auth::{AuthController, Authenticated, Submission};
    #[cfg(feature = "http")]
    pub use crate::controller::session::{SessionOrchestrator, SessionSnapshot};
}
