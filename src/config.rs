use std::time::Duration;

/// Base URL used when `PRODUCT_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Per-request time budget used when `PRODUCT_API_TIMEOUT_MS` is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const BASE_URL_ENV: &str = "PRODUCT_API_URL";
const TIMEOUT_MS_ENV: &str = "PRODUCT_API_TIMEOUT_MS";

/// Configuration for [`ApiClient`](crate::client::ApiClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL the `/products` endpoints are resolved against.
    pub base_url: String,
    /// Budget covering the full request, connection time included.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Replace the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build configuration from the environment.
    ///
    /// `PRODUCT_API_URL` overrides the base URL and `PRODUCT_API_TIMEOUT_MS`
    /// the timeout; unset, empty, or unparseable values fall back to the
    /// defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var(TIMEOUT_MS_ENV)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self { base_url, timeout }
    }
}
