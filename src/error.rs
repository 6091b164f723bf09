use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Result type alias for catalog client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Closed taxonomy of failures surfaced by the catalog client.
///
/// Every error leaving the client carries exactly one of these kinds;
/// consumers can match on it exhaustively instead of probing error strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Transport-level failure before any HTTP status was received
    #[serde(rename = "NetworkError")]
    Network,
    /// The server answered with a 5xx status
    #[serde(rename = "ServerError")]
    Server,
    /// A 4xx status with no more specific classification
    #[serde(rename = "ClientError")]
    Client,
    /// The request exceeded the configured time budget
    #[serde(rename = "TimeoutError")]
    Timeout,
    /// The server rejected the payload as semantically invalid (422)
    #[serde(rename = "ValidationError")]
    Validation,
    /// The requested resource does not exist (404)
    #[serde(rename = "NotFoundError")]
    NotFound,
    /// Authentication is missing or wrong (401)
    #[serde(rename = "UnauthorizedError")]
    Unauthorized,
    /// Authenticated but not allowed (403)
    #[serde(rename = "ForbiddenError")]
    Forbidden,
    /// A success status whose body could not be parsed
    #[serde(rename = "InvalidResponseError")]
    InvalidResponse,
    /// The caller supplied invalid parameters; no request was sent
    #[serde(rename = "InvalidParamsError")]
    InvalidParams,
    /// Anything that fits no other kind
    #[serde(rename = "UnknownError")]
    Unknown,
}

impl ErrorKind {
    /// Stable string label for logs and serialized error reports.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Network => "NetworkError",
            ErrorKind::Server => "ServerError",
            ErrorKind::Client => "ClientError",
            ErrorKind::Timeout => "TimeoutError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Unauthorized => "UnauthorizedError",
            ErrorKind::Forbidden => "ForbiddenError",
            ErrorKind::InvalidResponse => "InvalidResponseError",
            ErrorKind::InvalidParams => "InvalidParamsError",
            ErrorKind::Unknown => "UnknownError",
        }
    }

    /// Classify a non-success HTTP status.
    ///
    /// Specific statuses win over the 5xx range check; any status that
    /// matches neither (including success codes passed in by mistake) maps
    /// to [`ErrorKind::Unknown`].
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ErrorKind::NotFound,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            422 => ErrorKind::Validation,
            s if s >= 500 => ErrorKind::Server,
            _ => ErrorKind::Unknown,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse grouping of errors by where the fault lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// No HTTP status was received (status 0)
    Network,
    /// Server-side fault (5xx)
    Server,
    /// Client-side fault (4xx)
    Client,
    /// Anything else, including parse failures on success statuses
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Classified error raised by the catalog API client.
///
/// Fields are private so an error can only be built through the constructors,
/// which enforce a non-empty message. `status` is `0` when the failure
/// happened before any HTTP status was received.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    status: u16,
    #[serde(rename = "type")]
    kind: ErrorKind,
    details: Map<String, Value>,
    timestamp: DateTime<Utc>,
}

impl ApiError {
    /// Create a classified error. Panics if `message` is empty; an empty
    /// message is a programmer error, not a runtime condition.
    pub fn new(kind: ErrorKind, status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "ApiError message must be non-empty");
        Self {
            message,
            status,
            kind,
            details: Map::new(),
            timestamp: Utc::now(),
        }
    }

    /// Attach one structured context entry, builder-style.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Timeout error for a request that exceeded its time budget.
    pub fn timeout(timeout: Duration) -> Self {
        Self::new(ErrorKind::Timeout, 408, "Request timeout")
            .with_detail("timeout_ms", timeout.as_millis() as u64)
    }

    /// Transport failure with the underlying error preserved as a detail.
    pub fn network(source: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Network, 0, "Network error")
            .with_detail("original_error", source.to_string())
    }

    /// Caller-side parameter rejection; maps to status 400 without any
    /// request being sent.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParams, 400, message)
    }

    /// A success response whose body failed to parse. Keeps the original
    /// (successful) status so the contradiction is visible in reports.
    pub fn invalid_response(status: u16, source: impl fmt::Display) -> Self {
        Self::new(ErrorKind::InvalidResponse, status, "Invalid JSON response from server")
            .with_detail("original_error", source.to_string())
    }

    /// Human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status associated with the failure, `0` if none was received.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The taxonomy kind assigned at construction.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Structured context attached via [`with_detail`](Self::with_detail).
    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// Creation time of the error.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Coarse category derived from the status code.
    pub fn category(&self) -> ErrorCategory {
        match self.status {
            0 => ErrorCategory::Network,
            s if s >= 500 => ErrorCategory::Server,
            s if s >= 400 => ErrorCategory::Client,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Whether this error came from the request timeout.
    pub fn is_timeout(&self) -> bool {
        self.kind == ErrorKind::Timeout
    }

    /// Whether this error happened before any HTTP exchange completed.
    pub fn is_network_error(&self) -> bool {
        self.kind == ErrorKind::Network
    }
}
