//! Domain models: pure data types with no I/O.

pub mod account;
pub mod cache;
pub mod config;
pub mod transaction;

pub use account::{Account, Provider};
pub use cache::{ExchangeToken, SessionCache};
pub use config::{Config, HttpConfig, LoggingConfig, ProviderConfig};
pub use transaction::{CategoryTotal, RunningBalance, Transaction, TransactionMeta};
