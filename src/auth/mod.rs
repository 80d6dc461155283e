//! Authentication — the four-field credential record and login wire types.
//!
//! ## Security Model
//!
//! - The password and API key are wiped from memory when the record is dropped
//!   and never appear in `Debug` output or logs.
//! - The SDK attaches no token to requests after login. In the browser any session
//!   cookie set by the backend is carried automatically.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::AuthError;

pub use crate::shared::Outcome as LoginResponse;

// ============================================================================
// Credential fields
// ============================================================================

/// One of the four login form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    Totp,
    ApiKey,
    ClientId,
    Password,
}

impl CredentialField {
    pub const ALL: [CredentialField; 4] = [
        CredentialField::Totp,
        CredentialField::ApiKey,
        CredentialField::ClientId,
        CredentialField::Password,
    ];

    /// Form input name, identical to the JSON key sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Totp => "totp",
            Self::ApiKey => "apikey",
            Self::ClientId => "clientId",
            Self::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Totp => "TOTP",
            Self::ApiKey => "API Key",
            Self::ClientId => "Client ID",
            Self::Password => "Password",
        }
    }

    /// Whether the input masks what is typed.
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CredentialField {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CredentialField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| AuthError::UnknownField(s.to_string()))
    }
}

// ============================================================================
// Credentials
// ============================================================================

/// Login request body: `{totp, apikey, clientId, password}`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub totp: String,
    pub apikey: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        totp: impl Into<String>,
        apikey: impl Into<String>,
        client_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            totp: totp.into(),
            apikey: apikey.into(),
            client_id: client_id.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::Totp => &self.totp,
            CredentialField::ApiKey => &self.apikey,
            CredentialField::ClientId => &self.client_id,
            CredentialField::Password => &self.password,
        }
    }

    /// Replace one field, leaving the other three untouched.
    pub fn set(&mut self, field: CredentialField, value: impl Into<String>) {
        let slot = match field {
            CredentialField::Totp => &mut self.totp,
            CredentialField::ApiKey => &mut self.apikey,
            CredentialField::ClientId => &mut self.client_id,
            CredentialField::Password => &mut self.password,
        };
        slot.zeroize();
        *slot = value.into();
    }

    /// Fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<CredentialField> {
        CredentialField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// First missing field as an error, for hosts without `required` inputs.
    pub fn ensure_complete(&self) -> Result<(), AuthError> {
        match self.missing_fields().first() {
            Some(field) => Err(AuthError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("totp", &self.totp)
            .field("apikey", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("password", &"<redacted>")
            .finish()
    }
}
