//! Bankfeed - Open-Banking Data-Fetch Orchestrator
//!
//! Bankfeed performs an OAuth2 authorization-code exchange against an
//! open-banking API, then fetches and aggregates account data for a single
//! session: exchange code -> list accounts -> list transactions per account
//! -> aggregate by category, backed by a per-session cache.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Data models, port traits, and the error
//!   taxonomy
//! - **Service Layer** (`services`): The fetch orchestration pipeline
//! - **Infrastructure Layer** (`infrastructure`): HTTP gateway, cache store,
//!   configuration, and logging adapters
//! - **CLI Layer** (`cli`): Command-line interface

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{FetchError, FetchResult, GatewayError, StoreError};
pub use domain::models::{
    Account, CategoryTotal, Config, ExchangeToken, SessionCache, Transaction,
};
pub use domain::ports::{CacheStore, DataGateway, TokenExchangeRequest};
pub use infrastructure::cache::InMemoryCacheStore;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::gateway::HttpDataGateway;
pub use services::FetchOrchestrator;
