use serde::{Deserialize, Serialize};

/// Main configuration structure for Bankfeed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Open-banking provider credentials and endpoints
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Outbound HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Credentials and base URLs for the open-banking provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProviderConfig {
    /// OAuth2 client id issued by the provider
    #[serde(default)]
    pub client_id: String,

    /// OAuth2 client secret issued by the provider
    #[serde(default)]
    pub client_secret: String,

    /// Redirect URI registered with the provider
    #[serde(default)]
    pub redirect_uri: String,

    /// Authorization-server base URL
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,

    /// Data-API base URL
    #[serde(default = "default_data_api_base_url")]
    pub data_api_base_url: String,
}

fn default_auth_base_url() -> String {
    "https://auth.truelayer-sandbox.com".to_string()
}

fn default_data_api_base_url() -> String {
    "https://api.truelayer-sandbox.com".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: String::new(),
            auth_base_url: default_auth_base_url(),
            data_api_base_url: default_data_api_base_url(),
        }
    }
}

/// Outbound HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Per-request timeout in seconds; bounds every gateway call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum idle pooled connections per host
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_pool_max_idle_per_host() -> usize {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
