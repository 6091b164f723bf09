use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ErrorKind, Result};
use crate::traits::ProductSource;
use crate::types::Product;

/// Message used when an error body carries nothing usable.
const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Message used when the error body itself cannot be read.
const UNREADABLE_BODY_MESSAGE: &str = "Unknown error";

/// HTTP client for the product catalog API.
///
/// Every failure leaving this client is a classified [`ApiError`]; no raw
/// transport or parse error reaches the caller. Requests share one connection
/// pool and one timeout covering the whole exchange, body included.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// The base URL is validated up front so a malformed one fails here, not
    /// on the first request.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            ApiError::invalid_params(format!("Invalid base URL: {}", config.base_url))
                .with_detail("original_error", e.to_string())
        })?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ApiError::new(ErrorKind::Unknown, 0, format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// The base URL requests are resolved against, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full product collection from `GET {base}/products`.
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        debug!(url = %url, "Fetching product collection");
        let response = self.execute(&url).await?;
        self.parse_response(response).await
    }

    /// Fetch one product from `GET {base}/products/{id}`.
    ///
    /// An empty `id` is rejected before any network access; the id is
    /// percent-encoded into the path otherwise.
    pub async fn get_product(&self, id: &str) -> Result<Product> {
        if id.is_empty() {
            return Err(ApiError::invalid_params("Product ID is required").with_detail("param", "id"));
        }
        let url = format!("{}/products/{}", self.base_url, urlencoding::encode(id));
        debug!(url = %url, id = %id, "Fetching product");
        let response = self.execute(&url).await?;
        self.parse_response(response).await
    }

    /// Issue a GET within the configured time budget.
    async fn execute(&self, url: &str) -> Result<Response> {
        self.http
            .get(url)
            .send()
            .await
            .map_err(|err| self.classify_transport_error(&err, url))
    }

    /// Map a transport-level failure to the taxonomy: timeouts become
    /// `Timeout` (408), everything else `Network` (status 0).
    fn classify_transport_error(&self, err: &reqwest::Error, url: &str) -> ApiError {
        if err.is_timeout() {
            warn!(url = %url, timeout_ms = self.timeout.as_millis() as u64, "Request timed out");
            ApiError::timeout(self.timeout).with_detail("url", url)
        } else {
            warn!(url = %url, error = %err, "Transport error");
            ApiError::network(err).with_detail("url", url)
        }
    }

    /// Turn a response into parsed data or a classified error.
    ///
    /// Non-success statuses produce an error whose kind follows the status
    /// mapping and whose message is extracted from the body. A success status
    /// with an unparseable body is `InvalidResponse`, never a silent default.
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => extract_error_message(&body),
                Err(_) => UNREADABLE_BODY_MESSAGE.to_string(),
            };
            let mut error = ApiError::new(
                ErrorKind::from_status(status.as_u16()),
                status.as_u16(),
                format!("Request failed: {message}"),
            )
            .with_detail("url", url)
            .with_detail("method", "GET");
            if let Some(reason) = status.canonical_reason() {
                error = error.with_detail("status_text", reason);
            }
            return Err(error);
        }

        let body = response
            .text()
            .await
            .map_err(|err| self.classify_transport_error(&err, &url))?;
        serde_json::from_str(&body).map_err(|err| {
            warn!(url = %url, error = %err, "Success status with unparseable body");
            ApiError::invalid_response(status.as_u16(), &err).with_detail("url", url)
        })
    }
}

impl ProductSource for ApiClient {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        ApiClient::fetch_products(self).await
    }

    async fn get_product(&self, id: &str) -> Result<Product> {
        ApiClient::get_product(self, id).await
    }
}

/// Best human-readable message from an error response body: a JSON `message`
/// or `error` string field wins, then the raw body text, then a generic
/// phrase for empty bodies.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return error.to_string();
        }
    }
    if body.trim().is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:3000/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let error = ApiClient::new(ClientConfig::new("not a url")).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidParams);
        assert_eq!(error.status(), 400);
        assert!(error.message().contains("not a url"));
    }

    #[test]
    fn test_extract_message_prefers_message_field() {
        let body = r#"{"message": "Database connection failed", "error": "Internal Server Error"}"#;
        assert_eq!(extract_error_message(body), "Database connection failed");
    }

    #[test]
    fn test_extract_message_falls_back_to_error_field() {
        let body = r#"{"error": "Internal Server Error"}"#;
        assert_eq!(extract_error_message(body), "Internal Server Error");
    }

    #[test]
    fn test_extract_message_uses_raw_text_for_non_json() {
        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_extract_message_generic_for_empty_body() {
        assert_eq!(extract_error_message(""), GENERIC_ERROR_MESSAGE);
        assert_eq!(extract_error_message("   "), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_extract_message_ignores_non_string_fields() {
        let body = r#"{"message": 42}"#;
        assert_eq!(extract_error_message(body), body);
    }
}
