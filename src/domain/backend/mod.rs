//! Backend domain — activation of server-side trading activity.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

pub use crate::shared::Outcome as ActivationResponse;

/// Activation status of the server-side trading process.
///
/// `Inactive → Active` is one-way for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationState {
    #[default]
    Inactive,
    Active,
}

impl ActivationState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Caption of the activation button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inactive => "Start Backend",
            Self::Active => "Backend Active",
        }
    }
}
