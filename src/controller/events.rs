//! UI events delivered from the controllers to the presentation layer.
//!
//! The controllers decide what to show (title, description, severity) and
//! where to navigate; rendering toasts and pages is up to the host.

use chrono::{DateTime, Utc};
use futures::channel::mpsc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{ActivationState, View};

// ─── Notifications ───────────────────────────────────────────────────────────

/// Toast variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A user-facing message with its severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            issued_at: Utc::now(),
        }
    }

    pub fn login_succeeded() -> Self {
        Self::new("Login Successful", "Redirecting to dashboard...", Severity::Default)
    }

    pub fn login_rejected() -> Self {
        Self::new(
            "Login Failed",
            "Please check your credentials and try again.",
            Severity::Destructive,
        )
    }

    pub fn login_error() -> Self {
        Self::new(
            "Error",
            "An unexpected error occurred. Please try again later.",
            Severity::Destructive,
        )
    }

    pub fn backend_started() -> Self {
        Self::new(
            "Backend Started",
            "The backend activity has been initiated successfully.",
            Severity::Default,
        )
    }

    pub fn backend_start_failed() -> Self {
        Self::new(
            "Error",
            "Failed to start backend activity. Please try again.",
            Severity::Destructive,
        )
    }

    pub fn fetch_failed(view: View) -> Self {
        Self::new(
            "Error",
            format!("Failed to fetch {} data. Please try again.", view.as_str()),
            Severity::Destructive,
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

// ─── Navigation ──────────────────────────────────────────────────────────────

/// Pages of the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
        }
    }
}

// ─── Events ──────────────────────────────────────────────────────────────────

/// Everything the controllers report to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Notify(Notification),
    Navigate(Route),
    /// The activation control changed state.
    ActivationChanged(ActivationState),
    /// A bucket was overwritten with a freshly arrived payload.
    BucketUpdated { view: View, payload: Value },
}

impl UiEvent {
    pub fn as_notification(&self) -> Option<&Notification> {
        match self {
            UiEvent::Notify(n) => Some(n),
            _ => None,
        }
    }
}

/// Observer for controller events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: UiEvent);
}

/// Channel-backed sink; the receiver is a `Stream` of [`UiEvent`].
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: UiEvent) {
        // A dropped receiver means the view is gone.
        let _ = self.tx.unbounded_send(event);
    }
}

/// Sink that calls a closure for every event.
pub struct CallbackSink<F>(pub F);

impl<F> EventSink for CallbackSink<F>
where
    F: Fn(UiEvent) + Send + Sync,
{
    fn emit(&self, event: UiEvent) {
        (self.0)(event)
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: UiEvent) {}
}
