//! Controllers — the login form and the post-login session.
//!
//! Each controller owns its state exclusively and reports changes through an
//! [`EventSink`]. Control passes from [`auth::AuthController`] to
//! [`session::SessionOrchestrator`] only through a successful login.

#[cfg(feature = "http")]
pub mod auth;
pub mod events;
#[cfg(feature = "http")]
pub mod session;

pub use events::{CallbackSink, ChannelSink, EventSink, Notification, NullSink, Route, Severity, UiEvent};
