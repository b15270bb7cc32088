use serde::{Deserialize, Serialize};

/// Unified error type for all remote store operations.
///
/// Each variant includes a `backend` field identifying which backend produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Callers in this workspace never retry: every remote call is a single attempt and any
/// error is a signal to fall back (persistence) or to report `sent = false` (notification).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum RemoteError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The access key was rejected (HTTP 401/403).
    Unauthorized {
        /// Backend that produced the error.
        backend: String,
        /// Original error message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The table or function does not exist (HTTP 404).
    NotFound {
        /// Backend that produced the error.
        backend: String,
        /// Table or function name.
        resource: String,
        /// Original error message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The backend refused the request (any other 4xx, constraint violations, etc.).
    Rejected {
        /// Backend that produced the error.
        backend: String,
        /// HTTP status code.
        status: u16,
        /// Backend error code (e.g. a `PostgREST` / Postgres code), if available.
        raw_code: Option<String>,
        /// Original error message from the backend.
        raw_message: String,
    },

    /// The backend failed internally (HTTP 5xx).
    ServerError {
        /// Backend that produced the error.
        backend: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        detail: String,
    },

    /// A remote function replied with an `{ "error": ... }` payload.
    FunctionError {
        /// Backend that produced the error.
        backend: String,
        /// Function name.
        function: String,
        /// HTTP status code.
        status: u16,
        /// Error message from the function.
        message: String,
    },

    /// The endpoint or key handed to the factory is unusable.
    InvalidConfiguration {
        /// Backend that produced the error.
        backend: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the backend's response.
    ParseError {
        /// Backend that produced the error.
        backend: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Backend that produced the error.
        backend: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl RemoteError {
    /// 是否为预期行为（配置错误、远端拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::NotFound { .. }
                | Self::Rejected { .. }
                | Self::FunctionError { .. }
                | Self::InvalidConfiguration { .. }
        )
    }

    /// Name of the backend that produced the error.
    #[must_use]
    pub fn backend(&self) -> &str {
        match self {
            Self::NetworkError { backend, .. }
            | Self::Timeout { backend, .. }
            | Self::Unauthorized { backend, .. }
            | Self::NotFound { backend, .. }
            | Self::Rejected { backend, .. }
            | Self::ServerError { backend, .. }
            | Self::FunctionError { backend, .. }
            | Self::InvalidConfiguration { backend, .. }
            | Self::ParseError { backend, .. }
            | Self::SerializationError { backend, .. } => backend,
        }
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { backend, detail } => {
                write!(f, "[{backend}] Network error: {detail}")
            }
            Self::Timeout { backend, detail } => {
                write!(f, "[{backend}] Request timeout: {detail}")
            }
            Self::Unauthorized {
                backend,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{backend}] Unauthorized: {msg}")
                } else {
                    write!(f, "[{backend}] Unauthorized")
                }
            }
            Self::NotFound {
                backend,
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{backend}] '{resource}' not found: {msg}")
                } else {
                    write!(f, "[{backend}] '{resource}' not found")
                }
            }
            Self::Rejected {
                backend,
                status,
                raw_message,
                ..
            } => {
                write!(f, "[{backend}] Rejected (HTTP {status}): {raw_message}")
            }
            Self::ServerError {
                backend,
                status,
                detail,
            } => {
                write!(f, "[{backend}] Server error (HTTP {status}): {detail}")
            }
            Self::FunctionError {
                backend,
                function,
                status,
                message,
            } => {
                write!(
                    f,
                    "[{backend}] Function '{function}' failed (HTTP {status}): {message}"
                )
            }
            Self::InvalidConfiguration { backend, detail } => {
                write!(f, "[{backend}] Invalid configuration: {detail}")
            }
            Self::ParseError { backend, detail } => {
                write!(f, "[{backend}] Parse error: {detail}")
            }
            Self::SerializationError { backend, detail } => {
                write!(f, "[{backend}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for RemoteError {}

/// Convenience type alias for `Result<T, RemoteError>`.
pub type Result<T> = std::result::Result<T, RemoteError>;
