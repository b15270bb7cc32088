//! Login Capture Core Library
//!
//! Platform-independent submission flow:
//! - Field validation
//! - Persistence gateway (remote store first, local fallback store second)
//! - Notification gateway (remote function or mocked log line)
//! - Login session state machine
//!
//! Storage is abstracted through the [`FallbackStore`] trait and the remote
//! store through [`login_capture_remote::RemoteBackend`]; the platform layer
//! supplies both at startup via [`ServiceContext`].

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{GatewayConfig, RemoteBinding};
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::FallbackStore;
