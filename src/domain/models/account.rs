/// Domain models for open-banking accounts.
///
/// Accounts come back from the data API as a `results` array; everything
/// except `account_id` is display metadata passed through untouched.
use serde::{Deserialize, Serialize};

/// Provider metadata attached to an account (pass-through)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Human-readable provider name
    #[serde(default)]
    pub display_name: Option<String>,

    /// Provider identifier within the open-banking network
    #[serde(default)]
    pub provider_id: Option<String>,

    /// Provider logo URL
    #[serde(default)]
    pub logo_uri: Option<String>,
}

/// A bank account belonging to the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque account identifier, used as the key for transaction fetches
    pub account_id: String,

    /// Account type (e.g. "TRANSACTION", "SAVINGS")
    #[serde(default)]
    pub account_type: Option<String>,

    /// Display name shown to the user
    #[serde(default)]
    pub display_name: Option<String>,

    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: Option<String>,

    /// Originating provider metadata
    #[serde(default)]
    pub provider: Option<Provider>,
}

impl Account {
    /// Creates an account with only the identifier set, for tests and fixtures
    pub fn with_id(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            account_type: None,
            display_name: None,
            currency: None,
            provider: None,
        }
    }
}
