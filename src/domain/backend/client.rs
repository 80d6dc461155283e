//! Backend sub-client — start server-side trading activity.

use crate::client::TradeDeskClient;
use crate::domain::backend::ActivationResponse;
use crate::error::{SdkError, SessionError};

pub struct Backend<'a> {
    pub(crate) client: &'a TradeDeskClient,
}

impl<'a> Backend<'a> {
    /// Issue one activation request. Never retried.
    ///
    /// A well-formed body without a true `success` flag is
    /// [`SessionError::ActivationRejected`].
    pub async fn start(&self) -> Result<ActivationResponse, SdkError> {
        let body = self.client.http.start_backend().await?;
        let resp = ActivationResponse::from(body);
        if !resp.success {
            return Err(SessionError::ActivationRejected.into());
        }
        Ok(resp)
    }
}
