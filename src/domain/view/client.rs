//! View sub-client — raw payload reads for the three dashboard tabs.

use serde_json::Value;

use crate::client::TradeDeskClient;
use crate::domain::view::View;
use crate::error::SdkError;

/// Sub-client for one read endpoint.
pub struct ViewClient<'a> {
    pub(crate) client: &'a TradeDeskClient,
    pub(crate) view: View,
}

impl<'a> ViewClient<'a> {
    pub fn view(&self) -> View {
        self.view
    }

    /// Fetch the payload verbatim (never cached — always fresh).
    pub async fn get(&self) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .get_view(self.view, &self.client.fetch_retry)
            .await?)
    }
}
