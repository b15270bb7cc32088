//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use login_capture_remote::RemoteError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Configuration values are unusable
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Storage layer error (local fallback store)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Remote store error (converting from library)
    #[error("{0}")]
    Remote(#[from] RemoteError),
}

impl CoreError {
    /// Whether it is expected behavior (bad configuration, remote rejections), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigurationError(_) => true,
            Self::Remote(e) => e.is_expected(),
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Log an error at `warn` or `error` depending on [`CoreError::is_expected`].
pub(crate) fn log_classified(context: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}
