use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Unified error type for the client.
///
/// Local failures (configuration, decoding) and remote failures (anything
/// classified from an HTTP exchange) are kept in separate variants so callers
/// can tell "you never reached the network" apart from "the platform said no".
#[derive(Debug, Error)]
pub enum Error {
    /// A problem detected locally, before any request was issued.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A remote failure, normalized into the closed taxonomy.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response body that did not match the expected model.
    #[error("response decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// The classified API error, if this is a remote failure.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Local configuration problems. Never retryable, never carry a `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no organization configured: pass one per call or set a client-level default")]
    MissingOrganization,

    #[error("no API token configured: set STRATUS_API_TOKEN or pass one to the builder")]
    MissingToken,

    #[error("invalid base URL `{0}`")]
    InvalidBaseUrl(String),

    #[error("failed to construct HTTP transport: {0}")]
    Transport(String),
}

/// Closed taxonomy of remote failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    RateLimited,
    InvalidRequest,
    UnprocessableEntity,
    ServerError,
    NetworkError,
    Timeout,
    Unknown,
}

impl ErrorKind {
    /// Canonical snake_case name, matching the platform's error vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::UnprocessableEntity => "unprocessable_entity",
            ErrorKind::ServerError => "server_error",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Unknown => "unknown",
        }
    }

    /// Map an HTTP status to a taxonomy member.
    ///
    /// Unmapped 4xx collapse to `InvalidRequest`, anything >= 500 to
    /// `ServerError`. Statuses outside 4xx/5xx have no mapping and the
    /// caller falls through to payload inference.
    pub(crate) fn from_status(status: u16) -> Option<Self> {
        match status {
            401 => Some(ErrorKind::Unauthorized),
            403 => Some(ErrorKind::Forbidden),
            404 => Some(ErrorKind::NotFound),
            409 => Some(ErrorKind::Conflict),
            422 => Some(ErrorKind::UnprocessableEntity),
            429 => Some(ErrorKind::RateLimited),
            400..=499 => Some(ErrorKind::InvalidRequest),
            500..=u16::MAX => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    /// Case-insensitive match of a `type`/`code` hint against the taxonomy.
    pub(crate) fn from_hint(hint: &str) -> Option<Self> {
        match hint.to_ascii_lowercase().as_str() {
            "unauthorized" => Some(ErrorKind::Unauthorized),
            "forbidden" => Some(ErrorKind::Forbidden),
            "not_found" => Some(ErrorKind::NotFound),
            "conflict" => Some(ErrorKind::Conflict),
            "rate_limited" => Some(ErrorKind::RateLimited),
            "invalid_request" => Some(ErrorKind::InvalidRequest),
            "unprocessable_entity" => Some(ErrorKind::UnprocessableEntity),
            "server_error" => Some(ErrorKind::ServerError),
            "network_error" => Some(ErrorKind::NetworkError),
            "timeout" => Some(ErrorKind::Timeout),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method + path of the request that produced an error, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
}

impl RequestContext {
    pub(crate) fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

/// A classified remote failure.
///
/// Built by the classifier only; the sole remote-error representation
/// surfaced to callers. Retry semantics are derived from `kind`/`status`,
/// never stored separately.
#[derive(Debug, Clone, Error)]
#[error("{kind}{}: {message}", format_status(.status))]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub details: Option<Value>,
    pub request_context: Option<RequestContext>,
}

fn format_status(status: &Option<u16>) -> String {
    match status {
        Some(s) => format!(" (HTTP {s})"),
        None => String::new(),
    }
}

impl ApiError {
    pub fn is_rate_limited(&self) -> bool {
        self.kind == ErrorKind::RateLimited
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Unauthorized | ErrorKind::Forbidden)
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status, Some(s) if (400..=499).contains(&s))
            || matches!(
                self.kind,
                ErrorKind::InvalidRequest
                    | ErrorKind::Unauthorized
                    | ErrorKind::Forbidden
                    | ErrorKind::NotFound
                    | ErrorKind::Conflict
                    | ErrorKind::UnprocessableEntity
                    | ErrorKind::RateLimited
            )
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status, Some(s) if s >= 500) || self.kind == ErrorKind::ServerError
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// The client never retries on its own; this only informs the caller's
    /// backoff policy.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::RateLimited
                | ErrorKind::Timeout
                | ErrorKind::ServerError
                | ErrorKind::NetworkError
        ) || matches!(self.status, Some(s) if s >= 500)
    }

    /// Server-suggested backoff for a rate-limited request.
    ///
    /// Both `retry_after` and `retry-after` spellings occur in the wild.
    pub fn retry_after_seconds(&self) -> Option<u64> {
        if self.kind != ErrorKind::RateLimited {
            return None;
        }
        let details = self.details.as_ref()?;
        details
            .get("retry_after")
            .or_else(|| details.get("retry-after"))?
            .as_u64()
    }
}
