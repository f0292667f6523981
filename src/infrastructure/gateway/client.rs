//! reqwest-backed implementation of the `DataGateway` port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::domain::errors::GatewayError;
use crate::domain::models::config::{HttpConfig, ProviderConfig};
use crate::domain::models::{Account, ExchangeToken, Transaction};
use crate::domain::ports::{DataGateway, TokenExchangeRequest};

use super::types::ResultsEnvelope;

/// HTTP client for the open-banking authorization server and data API.
///
/// One pooled `reqwest::Client` serves both hosts. The configured timeout
/// bounds every call; failures are not retried here.
pub struct HttpDataGateway {
    http_client: ReqwestClient,
    auth_base_url: String,
    data_api_base_url: String,
}

impl HttpDataGateway {
    /// Creates a gateway from provider endpoints and HTTP settings.
    ///
    /// # Errors
    /// Returns `GatewayError::Transport` if the underlying client cannot be
    /// built.
    pub fn new(provider: &ProviderConfig, http: &HttpConfig) -> Result<Self, GatewayError> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .pool_max_idle_per_host(http.pool_max_idle_per_host)
            .tcp_nodelay(true)
            .build()?;

        Ok(Self {
            http_client,
            auth_base_url: provider.auth_base_url.trim_end_matches('/').to_string(),
            data_api_base_url: provider.data_api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Performs an authenticated GET and unwraps the `results` envelope.
    async fn get_results<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<Vec<T>, GatewayError> {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let envelope: ResultsEnvelope<T> = Self::decode(response).await?;
        Ok(envelope.results)
    }

    /// Checks the status and deserializes the body, keeping the raw text for
    /// the error path so malformed payloads stay observable in logs.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            let error = GatewayError::from_status(status, body);
            if error.is_auth_rejection() {
                warn!("remote rejected credentials: {}", error);
            } else {
                warn!("remote call failed: {}", error);
            }
            return Err(error);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| {
            warn!("malformed response body: {}", err);
            GatewayError::Malformed(err.to_string())
        })
    }
}

#[async_trait]
impl DataGateway for HttpDataGateway {
    #[instrument(skip(self, request), fields(grant_type = %request.grant_type))]
    async fn exchange_code(
        &self,
        request: &TokenExchangeRequest,
    ) -> Result<ExchangeToken, GatewayError> {
        let url = format!("{}/connect/token", self.auth_base_url);
        debug!("POST {}", url);

        let response = self.http_client.post(&url).form(request).send().await?;

        Self::decode(response).await
    }

    #[instrument(skip(self, access_token))]
    async fn list_accounts(&self, access_token: &str) -> Result<Vec<Account>, GatewayError> {
        let url = format!("{}/data/v1/accounts", self.data_api_base_url);
        self.get_results(&url, access_token).await
    }

    #[instrument(skip(self, access_token), fields(account_id))]
    async fn list_account_transactions(
        &self,
        access_token: &str,
        account_id: &str,
    ) -> Result<Vec<Transaction>, GatewayError> {
        let url = format!(
            "{}/data/v1/accounts/{}/transactions",
            self.data_api_base_url, account_id
        );
        self.get_results(&url, access_token).await
    }
}
