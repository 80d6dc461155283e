//! Unified SDK error types.

use thiserror::Error;

use crate::auth::CredentialField;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The backend answered with `success: false`.
    #[error("Login rejected by backend")]
    Rejected,

    #[error("Missing required field: {0}")]
    MissingField(CredentialField),

    #[error("Unknown credential field: {0}")]
    UnknownField(String),
}

/// Session orchestration errors.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Activation already succeeded; the control is disabled.
    #[error("Backend already active")]
    AlreadyActive,

    /// The backend answered the activation request with `success: false`.
    #[error("Backend activation rejected")]
    ActivationRejected,

    #[error("Unknown view: {0}")]
    UnknownView(String),
}

/// The two failure kinds every operation distinguishes, plus disabled controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Well-formed response carrying a false success flag.
    Rejected,
    /// The request did not complete or the response could not be parsed.
    Transport,
    /// The operation is not available in the current state.
    Unavailable,
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Auth(AuthError::Rejected) => ErrorKind::Rejected,
            SdkError::Session(SessionError::ActivationRejected) => ErrorKind::Rejected,
            SdkError::Session(SessionError::AlreadyActive) => ErrorKind::Unavailable,
            SdkError::Http(_) => ErrorKind::Transport,
            SdkError::Auth(_) | SdkError::Session(_) | SdkError::Validation(_) => {
                ErrorKind::Unavailable
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_classified_apart_from_transport() {
        assert_eq!(SdkError::from(AuthError::Rejected).kind(), ErrorKind::Rejected);
        assert_eq!(
            SdkError::from(SessionError::ActivationRejected).kind(),
            ErrorKind::Rejected
        );
        assert_eq!(
            SdkError::from(HttpError::ServerError {
                status: 500,
                body: String::new()
            })
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(SdkError::from(HttpError::Unauthorized).kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_every_http_failure_is_transport() {
        for err in [
            HttpError::Timeout,
            HttpError::RateLimited,
            HttpError::NotFound("gone".into()),
            HttpError::BadRequest("bad".into()),
        ] {
            assert!(SdkError::from(err).is_transport());
        }
    }

    #[test]
    fn test_already_active_is_unavailable() {
        let err = SdkError::from(SessionError::AlreadyActive);
        assert_eq!(err.kind(), ErrorKind::Unavailable);
        assert_eq!(err.to_string(), "Session error: Backend already active");
    }
}
