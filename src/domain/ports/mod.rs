//! Port trait definitions (Hexagonal Architecture)
//!
//! Ports are the seams between the orchestration core and the outside
//! world. Infrastructure adapters implement them; services depend on them.

pub mod cache_store;
pub mod gateway;

pub use cache_store::CacheStore;
pub use gateway::{DataGateway, TokenExchangeRequest};
