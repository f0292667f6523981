//! Configuration management infrastructure
//!
//! Hierarchical configuration loading (defaults, YAML files, environment)
//! with post-load validation.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
