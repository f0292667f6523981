//! Domain layer for the Bankfeed fetch pipeline
//!
//! This module contains core business types and port definitions.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{FetchError, FetchResult, GatewayError, StoreError};
