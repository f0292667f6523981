//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - HTTP gateway to the open-banking API
//! - In-memory session cache store
//! - Configuration management
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod cache;
pub mod config;
pub mod gateway;
pub mod logging;
