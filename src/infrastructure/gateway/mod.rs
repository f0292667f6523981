//! Remote data gateway: HTTP adapter for the open-banking API.

pub mod client;
pub mod types;

pub use client::HttpDataGateway;
