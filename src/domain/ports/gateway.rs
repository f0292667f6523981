/// Remote data gateway port (trait) for dependency injection.
///
/// Covers the three categories of outbound calls the pipeline makes. Each
/// call site knows its concrete request and response shape, so the contract
/// is a set of typed methods rather than a generic request helper.
use crate::domain::errors::GatewayError;
use crate::domain::models::{Account, ExchangeToken, Transaction};
use async_trait::async_trait;
use serde::Serialize;

/// Form-encoded body of the OAuth2 authorization-code exchange
#[derive(Debug, Clone, Serialize)]
pub struct TokenExchangeRequest {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub code: String,
}

impl TokenExchangeRequest {
    /// Builds an authorization-code grant request
    pub fn authorization_code(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            grant_type: "authorization_code".to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            code: code.into(),
        }
    }
}

/// Gateway to the remote open-banking API.
///
/// Implementations perform the HTTP call, attach bearer auth where the
/// operation requires it, and map the raw response to typed records or a
/// single `GatewayError` signal. No retries at this layer.
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Exchanges an authorization code for an access token.
    ///
    /// # Errors
    /// `GatewayError` on transport failure, non-2xx status, or a body that
    /// does not parse as a token response.
    async fn exchange_code(
        &self,
        request: &TokenExchangeRequest,
    ) -> Result<ExchangeToken, GatewayError>;

    /// Lists the accounts visible to the given access token.
    ///
    /// # Errors
    /// `GatewayError` on transport failure, non-2xx status, or malformed body.
    async fn list_accounts(&self, access_token: &str) -> Result<Vec<Account>, GatewayError>;

    /// Lists transactions for one account.
    ///
    /// # Errors
    /// `GatewayError` on transport failure, non-2xx status, or malformed body.
    async fn list_account_transactions(
        &self,
        access_token: &str,
        account_id: &str,
    ) -> Result<Vec<Transaction>, GatewayError>;
}
