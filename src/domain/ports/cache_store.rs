/// Session cache store port (trait) for dependency injection.
///
/// The store owns the only durable copy of the per-session cache record.
/// Services depend on this trait, not concrete implementations.
use crate::domain::errors::StoreError;
use crate::domain::models::SessionCache;
use async_trait::async_trait;

/// Keyed storage for session cache records.
///
/// Semantics:
/// - `get` never fails on a missing key; it returns the empty record
/// - `set` is a full-record, last-write-wins replacement; there is no
///   field-level update API
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Retrieves the cache record for a session key, or the empty record if
    /// none exists yet.
    ///
    /// # Errors
    /// Returns error only if the backend itself fails.
    async fn get(&self, session_key: &str) -> Result<SessionCache, StoreError>;

    /// Replaces the cache record for a session key.
    ///
    /// # Errors
    /// Returns error only if the backend itself fails.
    async fn set(&self, session_key: &str, cache: SessionCache) -> Result<(), StoreError>;
}
