//! In-memory session cache store.
//!
//! Single-process adapter for the `CacheStore` port. A distributed backend
//! (Redis, memcached) would slot in behind the same trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::StoreError;
use crate::domain::models::SessionCache;
use crate::domain::ports::CacheStore;

/// Process-local cache store keyed by opaque session key.
///
/// Reads clone the whole record and writes replace it wholesale, matching
/// the store contract: no partial-field updates, last write wins.
#[derive(Default)]
pub struct InMemoryCacheStore {
    records: RwLock<HashMap<String, SessionCache>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, session_key: &str) -> Result<SessionCache, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(session_key).cloned().unwrap_or_default())
    }

    async fn set(&self, session_key: &str, cache: SessionCache) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.insert(session_key.to_string(), cache);
        Ok(())
    }
}
