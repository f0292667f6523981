/// Session cache record: the single mutable state carried per session key.
///
/// Every orchestrator step reads the whole record, rebuilds it, and writes it
/// back as a full replacement. There is no field-level update path, so a
/// reader can never observe a torn mix of old and new fields.
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::transaction::{CategoryTotal, Transaction};

/// Access token obtained from the authorization-code exchange.
///
/// Treated as valid for the remainder of the session; expiry tracking and
/// refresh are out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeToken {
    /// Opaque bearer credential
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    /// Seconds until expiry, as reported by the auth server (pass-through)
    #[serde(default)]
    pub expires_in: Option<i64>,

    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Per-session cache of pipeline state.
///
/// Invariants: `transactions` is non-empty only when `accounts` is non-empty
/// and `token` is present; `aggregates` is derived solely from `transactions`
/// and is cleared whenever `transactions` changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCache {
    /// Authorization code awaiting exchange, if any
    #[serde(default)]
    pub code: Option<String>,

    /// Token from a successful exchange
    #[serde(default)]
    pub token: Option<ExchangeToken>,

    /// Accounts, empty until fetched
    #[serde(default)]
    pub accounts: Vec<Account>,

    /// Flat merged transaction list, empty until fetched
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Per-category totals, empty until computed
    #[serde(default)]
    pub aggregates: Vec<CategoryTotal>,
}

impl SessionCache {
    /// Whether a successful code exchange has produced a usable bearer token
    pub fn is_exchanged(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(|t| !t.access_token.is_empty())
    }

    /// Bearer token for authenticated data-API calls, if exchanged
    pub fn access_token(&self) -> Option<&str> {
        self.token
            .as_ref()
            .map(|t| t.access_token.as_str())
            .filter(|t| !t.is_empty())
    }
}
