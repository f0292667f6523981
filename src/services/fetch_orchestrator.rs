/// Session-scoped data-fetch orchestration pipeline.
///
/// Sequences the dependent remote calls (exchange code, list accounts, list
/// transactions per account, aggregate by category) over a per-session cache
/// record. Each operation re-reads the cache, decides what remote work
/// remains, performs it through the gateway, and writes back a complete
/// replacement record.
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use futures::future;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{FetchError, FetchResult, GatewayError};
use crate::domain::models::config::ProviderConfig;
use crate::domain::models::{Account, CategoryTotal, SessionCache, Transaction};
use crate::domain::ports::{CacheStore, DataGateway, TokenExchangeRequest};

/// Transactions older than this are excluded from aggregation.
const AGGREGATION_WINDOW_DAYS: i64 = 7;

/// Orchestrates the exchange → accounts → transactions → aggregate pipeline.
///
/// Holds no cross-call state besides a per-session-key lock map: every step
/// re-reads the cache through the store, so operations are idempotent with
/// respect to already-cached results and safe to call repeatedly.
///
/// Concurrent calls for the same session key serialize on that key's lock,
/// so read-modify-write cycles cannot lose updates to each other. Calls for
/// different keys do not contend.
pub struct FetchOrchestrator {
    gateway: Arc<dyn DataGateway>,
    store: Arc<dyn CacheStore>,
    provider: ProviderConfig,
    // Grows with distinct session keys; fine for a single-process deployment.
    session_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FetchOrchestrator {
    /// Creates an orchestrator over the given gateway and cache store.
    pub fn new(
        gateway: Arc<dyn DataGateway>,
        store: Arc<dyn CacheStore>,
        provider: ProviderConfig,
    ) -> Self {
        Self {
            gateway,
            store,
            provider,
            session_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// On success the session cache is replaced with a record holding only
    /// the new token: account, transaction, and aggregate state tied to the
    /// prior token is discarded. On failure the cache is left untouched.
    ///
    /// # Errors
    /// - `InvalidInput` if the code is empty (no remote call attempted)
    /// - `Gateway` if the token exchange fails
    #[instrument(skip(self, authorization_code), err)]
    pub async fn exchange_code(
        &self,
        session_key: &str,
        authorization_code: &str,
    ) -> FetchResult<()> {
        if authorization_code.trim().is_empty() {
            return Err(FetchError::InvalidInput(
                "authorization code is empty".to_string(),
            ));
        }

        let lock = self.session_lock(session_key).await;
        let _guard = lock.lock().await;

        let request = TokenExchangeRequest::authorization_code(
            self.provider.client_id.clone(),
            self.provider.client_secret.clone(),
            self.provider.redirect_uri.clone(),
            authorization_code,
        );

        let token = self.gateway.exchange_code(&request).await?;

        let cache = SessionCache {
            token: Some(token),
            ..Default::default()
        };
        self.store.set(session_key, cache).await?;

        info!("exchanged authorization code for access token");
        Ok(())
    }

    /// Refreshes the account list from the remote API.
    ///
    /// Always performs a remote fetch; account lists can change, so cached
    /// accounts are never reused by this operation.
    ///
    /// # Errors
    /// - `Unauthenticated` if no successful exchange has happened
    /// - `Gateway` if the remote fetch fails (cache unchanged)
    #[instrument(skip(self), err)]
    pub async fn fetch_accounts(&self, session_key: &str) -> FetchResult<Vec<Account>> {
        let lock = self.session_lock(session_key).await;
        let _guard = lock.lock().await;
        self.fetch_accounts_inner(session_key).await
    }

    /// Returns the session's merged transaction list, fetching it if needed.
    ///
    /// Cached transactions are treated as a complete result: a non-empty
    /// cache short-circuits with zero remote calls. Otherwise accounts are
    /// fetched first when absent, then every account's transactions are
    /// requested concurrently and merged in account-list order.
    ///
    /// # Errors
    /// - `Unauthenticated` if no successful exchange has happened
    /// - `Gateway` if the accounts fetch fails, or every per-account request
    ///   fails. Individual account failures otherwise degrade to "no
    ///   transactions for that account" and are logged, not propagated.
    #[instrument(skip(self), err)]
    pub async fn fetch_transactions(&self, session_key: &str) -> FetchResult<Vec<Transaction>> {
        let lock = self.session_lock(session_key).await;
        let _guard = lock.lock().await;
        self.fetch_transactions_inner(session_key).await
    }

    /// Aggregates cached (or freshly fetched) transactions by category over
    /// the trailing seven-day window.
    ///
    /// "Now" is read once per call. Group order is unspecified.
    ///
    /// # Errors
    /// Propagates `fetch_transactions` failures when nothing is cached.
    #[instrument(skip(self), err)]
    pub async fn aggregate(&self, session_key: &str) -> FetchResult<Vec<CategoryTotal>> {
        let lock = self.session_lock(session_key).await;
        let _guard = lock.lock().await;
        self.aggregate_inner(session_key).await
    }

    async fn fetch_accounts_inner(&self, session_key: &str) -> FetchResult<Vec<Account>> {
        let cache = self.store.get(session_key).await?;
        let token = cache
            .access_token()
            .ok_or(FetchError::Unauthenticated)?
            .to_string();

        let accounts = self.gateway.list_accounts(&token).await?;
        debug!(count = accounts.len(), "fetched accounts");

        let mut next = cache;
        next.accounts = accounts.clone();
        self.store.set(session_key, next).await?;

        Ok(accounts)
    }

    async fn fetch_transactions_inner(&self, session_key: &str) -> FetchResult<Vec<Transaction>> {
        let cache = self.store.get(session_key).await?;
        if !cache.transactions.is_empty() {
            debug!(
                count = cache.transactions.len(),
                "transactions already cached; skipping remote fetch"
            );
            return Ok(cache.transactions);
        }

        if cache.accounts.is_empty() {
            self.fetch_accounts_inner(session_key).await?;
        }

        let cache = self.store.get(session_key).await?;
        let token = cache
            .access_token()
            .ok_or(FetchError::Unauthenticated)?
            .to_string();

        // Fan out one request per account; join_all keeps results in
        // account-list order and drops in-flight requests if this call is
        // cancelled.
        let fetches = cache.accounts.iter().map(|account| {
            let gateway = Arc::clone(&self.gateway);
            let token = token.clone();
            let account_id = account.account_id.clone();
            async move {
                let outcome = gateway
                    .list_account_transactions(&token, &account_id)
                    .await;
                (account_id, outcome)
            }
        });
        let outcomes = future::join_all(fetches).await;

        let attempted = outcomes.len();
        let mut merged: Vec<Transaction> = Vec::new();
        let mut first_error: Option<GatewayError> = None;
        let mut failed = 0usize;

        for (account_id, outcome) in outcomes {
            match outcome {
                Ok(batch) => merged.extend(batch),
                Err(err) => {
                    warn!(%account_id, "account transaction fetch failed: {}", err);
                    failed += 1;
                    first_error.get_or_insert(err);
                }
            }
        }

        if let Some(err) = first_error {
            if failed == attempted {
                return Err(err.into());
            }
            // Partial fan-out: the merged list under-reports the failed
            // accounts. Persisted anyway, but loudly.
            warn!(
                failed,
                attempted, "partial fan-out; merged transactions are incomplete"
            );
        }

        let mut next = cache;
        next.transactions = merged.clone();
        // Aggregates are derived from transactions; stale ones must go.
        next.aggregates = Vec::new();
        self.store.set(session_key, next).await?;

        Ok(merged)
    }

    async fn aggregate_inner(&self, session_key: &str) -> FetchResult<Vec<CategoryTotal>> {
        let cache = self.store.get(session_key).await?;
        let transactions = if cache.transactions.is_empty() {
            self.fetch_transactions_inner(session_key).await?
        } else {
            cache.transactions
        };

        let now = Utc::now();
        let window_start = now - Duration::days(AGGREGATION_WINDOW_DAYS);

        let mut totals: Vec<CategoryTotal> = Vec::new();
        for txn in transactions
            .iter()
            .filter(|t| t.timestamp > window_start)
        {
            let key = txn.category_key();
            match totals
                .iter_mut()
                .find(|entry| entry.category.as_deref() == key)
            {
                Some(entry) => entry.total += txn.amount,
                None => totals.push(CategoryTotal {
                    category: key.map(str::to_string),
                    total: txn.amount,
                }),
            }
        }
        debug!(groups = totals.len(), "aggregated transactions by category");

        let mut next = self.store.get(session_key).await?;
        next.aggregates = totals.clone();
        self.store.set(session_key, next).await?;

        Ok(totals)
    }

    async fn session_lock(&self, session_key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.session_locks.lock().await;
        locks
            .entry(session_key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
