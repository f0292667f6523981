//! Wire envelope types for the open-banking data API.

use serde::Deserialize;

/// Standard response envelope: every data-API read wraps its records in a
/// `results` array.
#[derive(Debug, Deserialize)]
pub struct ResultsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}
