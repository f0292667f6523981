//! Integration tests for the HTTP data gateway against a mock server.
//!
//! Coverage:
//! - Form-encoded token exchange request shape
//! - Bearer auth on data-API reads
//! - Full transaction wire-shape parsing
//! - Non-2xx and malformed-body failures collapsing to `GatewayError`

use bankfeed::domain::models::config::{HttpConfig, ProviderConfig};
use bankfeed::domain::ports::{DataGateway, TokenExchangeRequest};
use bankfeed::{GatewayError, HttpDataGateway};
use mockito::{Matcher, Server};
use rust_decimal::Decimal;
use std::str::FromStr;

fn gateway_for(server: &Server) -> HttpDataGateway {
    let provider = ProviderConfig {
        client_id: "client-1".to_string(),
        client_secret: "secret-1".to_string(),
        redirect_uri: "https://localhost:3000/callback".to_string(),
        auth_base_url: server.url(),
        data_api_base_url: server.url(),
    };
    HttpDataGateway::new(&provider, &HttpConfig::default()).expect("Failed to build gateway")
}

fn exchange_request(code: &str) -> TokenExchangeRequest {
    TokenExchangeRequest::authorization_code(
        "client-1",
        "secret-1",
        "https://localhost:3000/callback",
        code,
    )
}

#[tokio::test]
async fn test_exchange_code_sends_form_encoded_grant() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/connect/token")
        .match_header(
            "content-type",
            Matcher::Regex("application/x-www-form-urlencoded.*".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("client_id".into(), "client-1".into()),
            Matcher::UrlEncoded("client_secret".into(), "secret-1".into()),
            Matcher::UrlEncoded("redirect_uri".into(), "https://localhost:3000/callback".into()),
            Matcher::UrlEncoded("code".into(), "code-123".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "access_token": "jwt-abc",
                "token_type": "Bearer",
                "expires_in": 3600
            })
            .to_string(),
        )
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let token = gateway
        .exchange_code(&exchange_request("code-123"))
        .await
        .expect("Exchange failed");

    assert_eq!(token.access_token, "jwt-abc");
    assert_eq!(token.token_type.as_deref(), Some("Bearer"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_exchange_code_non_2xx_is_gateway_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/connect/token")
        .with_status(400)
        .with_body(r#"{"error": "invalid_grant"}"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let err = gateway
        .exchange_code(&exchange_request("bad-code"))
        .await
        .unwrap_err();

    match err {
        GatewayError::Status { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_accounts_attaches_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/v1/accounts")
        .match_header("authorization", "Bearer jwt-abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "results": [
                    {"account_id": "acc-1", "display_name": "Current", "currency": "GBP"},
                    {"account_id": "acc-2"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let accounts = gateway.list_accounts("jwt-abc").await.expect("Accounts failed");

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].account_id, "acc-1");
    assert_eq!(accounts[1].account_id, "acc-2");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_account_transactions_parses_full_wire_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/data/v1/accounts/acc-1/transactions")
        .match_header("authorization", "Bearer jwt-abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "results": [{
                    "transaction_id": "txn-1",
                    "timestamp": "2024-03-01T10:30:00Z",
                    "description": "SUPERMARKET",
                    "amount": -24.99,
                    "currency": "GBP",
                    "transaction_type": "DEBIT",
                    "transaction_category": "PURCHASE",
                    "transaction_classification": ["Shopping", "Groceries"],
                    "merchant_name": "Supermarket Ltd",
                    "running_balance": {"amount": 100.01, "currency": "GBP"},
                    "meta": {
                        "bank_transaction_id": "bank-1",
                        "provider_transaction_category": "DEB"
                    }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let transactions = gateway
        .list_account_transactions("jwt-abc", "acc-1")
        .await
        .expect("Transactions failed");

    assert_eq!(transactions.len(), 1);
    let txn = &transactions[0];
    assert_eq!(txn.transaction_id, "txn-1");
    assert_eq!(txn.amount, Decimal::from_str("-24.99").unwrap());
    assert_eq!(txn.transaction_category.as_deref(), Some("PURCHASE"));
    assert_eq!(txn.transaction_classification, vec!["Shopping", "Groceries"]);
    assert_eq!(
        txn.running_balance.as_ref().unwrap().amount,
        Decimal::from_str("100.01").unwrap()
    );
    assert_eq!(
        txn.meta.as_ref().unwrap().provider_transaction_category.as_deref(),
        Some("DEB")
    );
}

#[tokio::test]
async fn test_malformed_body_is_gateway_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/data/v1/accounts")
        .with_status(200)
        .with_body("this is not json")
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let err = gateway.list_accounts("jwt-abc").await.unwrap_err();
    assert!(matches!(err, GatewayError::Malformed(_)));
}

#[tokio::test]
async fn test_unauthorized_read_is_gateway_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/data/v1/accounts")
        .with_status(401)
        .with_body(r#"{"error": "invalid_token"}"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let err = gateway.list_accounts("stale-token").await.unwrap_err();
    assert!(err.is_auth_rejection());
}
