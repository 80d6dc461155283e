//! Login form controller.
//!
//! `Editing → Submitting → Editing | Authenticated`. Submitting consumes the
//! controller; a failed attempt hands it back with the form untouched, a
//! successful one yields an [`Authenticated`] handoff and the credentials are
//! dropped (and wiped) with the controller.

use std::fmt;
use std::sync::Arc;

use crate::auth::{CredentialField, Credentials, LoginResponse};
use crate::client::TradeDeskClient;
use crate::controller::events::{EventSink, Notification, Route, UiEvent};
use crate::controller::session::SessionOrchestrator;
use crate::error::{AuthError, ErrorKind, SdkError};

/// Owns the login form's field state.
pub struct AuthController {
    client: TradeDeskClient,
    sink: Arc<dyn EventSink>,
    credentials: Credentials,
}

/// Result of [`AuthController::submit`].
#[derive(Debug)]
pub enum Submission {
    /// Login accepted; navigation to the dashboard has been emitted.
    Authenticated(Authenticated),
    /// Still on the login view. The form keeps every field, password included.
    Editing {
        controller: AuthController,
        error: SdkError,
    },
}

impl Submission {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Submission::Authenticated(_))
    }
}

impl AuthController {
    pub fn new(client: TradeDeskClient, sink: impl EventSink + 'static) -> Self {
        Self::with_sink(client, Arc::new(sink))
    }

    pub fn with_sink(client: TradeDeskClient, sink: Arc<dyn EventSink>) -> Self {
        Self {
            client,
            sink,
            credentials: Credentials::default(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Merge one field into the form. No validation.
    pub fn update_field(&mut self, field: CredentialField, value: impl Into<String>) {
        self.credentials.set(field, value);
    }

    /// Same as [`update_field`](Self::update_field), keyed by the input's `name`.
    pub fn update_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), AuthError> {
        let field = name.parse::<CredentialField>()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Fields the input layer should still mark as required.
    pub fn missing_fields(&self) -> Vec<CredentialField> {
        self.credentials.missing_fields()
    }

    /// Send the credentials once and report the outcome.
    ///
    /// Emits a notification in every case; on success also emits
    /// `Navigate(Route::Dashboard)`. Never retried.
    pub async fn submit(self) -> Submission {
        let result = self.client.auth().login(&self.credentials).await;

        match result {
            Ok(response) => {
                tracing::info!("login succeeded");
                self.sink.emit(UiEvent::Notify(Notification::login_succeeded()));
                self.sink.emit(UiEvent::Navigate(Route::Dashboard));
                Submission::Authenticated(Authenticated {
                    client: self.client,
                    sink: self.sink,
                    response,
                })
            }
            Err(error) => {
                let notification = match error.kind() {
                    ErrorKind::Rejected => Notification::login_rejected(),
                    _ => Notification::login_error(),
                };
                tracing::warn!(kind = ?error.kind(), error = %error, "login failed");
                self.sink.emit(UiEvent::Notify(notification));
                Submission::Editing {
                    controller: self,
                    error,
                }
            }
        }
    }
}

impl fmt::Debug for AuthController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthController")
            .field("base_url", &self.client.base_url())
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Handoff from a successful login to the session view.
pub struct Authenticated {
    client: TradeDeskClient,
    sink: Arc<dyn EventSink>,
    response: LoginResponse,
}

impl Authenticated {
    /// The backend's login response, extra fields included.
    pub fn response(&self) -> &LoginResponse {
        &self.response
    }

    /// Start the session view, reporting to the same sink as the login form.
    pub fn into_session(self) -> SessionOrchestrator {
        SessionOrchestrator::with_sink(self.client, self.sink)
    }

    pub fn into_session_with(self, sink: impl EventSink + 'static) -> SessionOrchestrator {
        SessionOrchestrator::new(self.client, sink)
    }
}

impl fmt::Debug for Authenticated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticated")
            .field("base_url", &self.client.base_url())
            .field("response", &self.response)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::NullSink;

    fn controller() -> AuthController {
        let client = TradeDeskClient::builder().build().unwrap();
        AuthController::new(client, NullSink)
    }

    #[test]
    fn test_update_field_keeps_last_value_per_field() {
        let mut c = controller();
        c.update_field(CredentialField::Totp, "1");
        c.update_field(CredentialField::Password, "p1");
        c.update_field(CredentialField::Totp, "123456");
        c.update_field(CredentialField::ApiKey, "k");
        c.update_field(CredentialField::ClientId, "c");
        c.update_field(CredentialField::Password, "p");
        assert_eq!(c.credentials(), &Credentials::new("123456", "k", "c", "p"));
        assert!(c.missing_fields().is_empty());
    }

    #[test]
    fn test_update_field_named() {
        let mut c = controller();
        c.update_field_named("clientId", "c42").unwrap();
        assert_eq!(c.credentials().client_id, "c42");
        assert!(c.update_field_named("otp", "1").is_err());
        assert_eq!(c.missing_fields().len(), 3);
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let mut c = controller();
        c.update_field(CredentialField::Password, "hunter2");
        assert!(!format!("{:?}", c).contains("hunter2"));
    }
}
