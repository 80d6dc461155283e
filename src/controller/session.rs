//! Session data orchestrator — backend activation and the three data views.
//!
//! State lives behind an `async_lock::RwLock` that is never held across a
//! request, so fetches for different (or the same) views interleave freely and
//! each response is applied when it arrives. Two racing fetches for one view
//! leave the bucket holding whichever response arrived last.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_lock::RwLock;
use serde_json::Value;

use crate::client::TradeDeskClient;
use crate::controller::events::{EventSink, Notification, UiEvent};
use crate::domain::{ActivationState, Buckets, DataBucket, View};
use crate::error::{SdkError, SessionError};

#[derive(Debug, Default)]
struct SessionState {
    activation: ActivationState,
    tab: View,
    buckets: Buckets,
}

/// Marks an activation request as in flight until dropped.
///
/// Dropping clears the mark on every exit path, including the caller
/// abandoning the future mid-request.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Point-in-time copy of the orchestrator's state, for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub activation: ActivationState,
    pub activation_enabled: bool,
    pub tab: View,
    pub buckets: Buckets,
}

/// Owns activation status and the three data buckets for one dashboard.
///
/// Cloning yields a handle to the same state, so UI callbacks can each hold one.
#[derive(Clone)]
pub struct SessionOrchestrator {
    client: TradeDeskClient,
    sink: Arc<dyn EventSink>,
    state: Arc<RwLock<SessionState>>,
    /// An activation request is in flight; the control is disabled meanwhile.
    activating: Arc<AtomicBool>,
}

impl SessionOrchestrator {
    pub fn new(client: TradeDeskClient, sink: impl EventSink + 'static) -> Self {
        Self::with_sink(client, Arc::new(sink))
    }

    pub fn with_sink(client: TradeDeskClient, sink: Arc<dyn EventSink>) -> Self {
        Self {
            client,
            sink,
            state: Arc::new(RwLock::new(SessionState::default())),
            activating: Arc::new(AtomicBool::new(false)),
        }
    }

    // ── Activation ───────────────────────────────────────────────────────

    /// Start server-side trading activity.
    ///
    /// Fails with [`SessionError::AlreadyActive`] without touching the network
    /// once activation has succeeded or while an attempt is in flight. A
    /// rejected, failed or abandoned attempt leaves the state inactive and the
    /// control enabled.
    pub async fn activate(&self) -> Result<(), SdkError> {
        let _in_flight = {
            let state = self.state.read().await;
            match InFlight::claim(&self.activating) {
                Some(guard) if !state.activation.is_active() => guard,
                _ => {
                    tracing::debug!("activation control disabled, ignoring");
                    return Err(SessionError::AlreadyActive.into());
                }
            }
        };

        let result = self.client.backend().start().await;

        let mut state = self.state.write().await;
        match result {
            Ok(_) => {
                state.activation = ActivationState::Active;
                tracing::info!("backend activated");
                self.sink
                    .emit(UiEvent::ActivationChanged(ActivationState::Active));
                self.sink
                    .emit(UiEvent::Notify(Notification::backend_started()));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), error = %e, "backend activation failed");
                self.sink
                    .emit(UiEvent::Notify(Notification::backend_start_failed()));
                Err(e)
            }
        }
    }

    pub async fn is_active(&self) -> bool {
        self.state.read().await.activation.is_active()
    }

    /// Whether the activation control should be enabled.
    pub async fn can_activate(&self) -> bool {
        let state = self.state.read().await;
        !state.activation.is_active() && !self.activating.load(Ordering::Acquire)
    }

    // ── Views ────────────────────────────────────────────────────────────

    /// Fetch one view and overwrite its bucket with the payload.
    ///
    /// On failure the bucket keeps its previous value and a destructive
    /// notification naming the view is emitted. Other buckets are never touched.
    pub async fn fetch(&self, view: View) -> Result<(), SdkError> {
        match self.client.view(view).get().await {
            Ok(payload) => {
                let mut state = self.state.write().await;
                state.buckets.get_mut(view).replace(payload.clone());
                tracing::debug!(view = %view, "bucket updated");
                self.sink.emit(UiEvent::BucketUpdated { view, payload });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(view = %view, kind = ?e.kind(), error = %e, "fetch failed");
                self.sink
                    .emit(UiEvent::Notify(Notification::fetch_failed(view)));
                Err(e)
            }
        }
    }

    /// Switch to a tab; switching issues that tab's fetch.
    pub async fn select_tab(&self, view: View) -> Result<(), SdkError> {
        self.state.write().await.tab = view;
        self.fetch(view).await
    }

    pub async fn current_tab(&self) -> View {
        self.state.read().await.tab
    }

    pub async fn bucket(&self, view: View) -> DataBucket {
        self.state.read().await.buckets.get(view).clone()
    }

    /// Payload of a view, or its empty value if never fetched.
    pub async fn data(&self, view: View) -> Value {
        self.state.read().await.buckets.get(view).value()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            activation: state.activation,
            activation_enabled: !state.activation.is_active()
                && !self.activating.load(Ordering::Acquire),
            tab: state.tab,
            buckets: state.buckets.clone(),
        }
    }
}

impl std::fmt::Debug for SessionOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionOrchestrator")
            .field("base_url", &self.client.base_url())
            .finish_non_exhaustive()
    }
}
