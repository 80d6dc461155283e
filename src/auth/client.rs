//! Auth sub-client — credential login.

use crate::auth::{Credentials, LoginResponse};
use crate::client::TradeDeskClient;
use crate::error::{AuthError, SdkError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a TradeDeskClient,
}

impl<'a> Auth<'a> {
    /// Send the full credential record to the backend. Never retried.
    ///
    /// The backend tracks the session itself; nothing from the response is
    /// attached to later requests. A well-formed body without a true `success`
    /// flag is [`AuthError::Rejected`].
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, SdkError> {
        let body = self.client.http.login(credentials).await?;
        let resp = LoginResponse::from(body);
        if !resp.success {
            return Err(AuthError::Rejected.into());
        }
        Ok(resp)
    }
}
