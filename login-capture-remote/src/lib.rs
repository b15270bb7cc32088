//! # login-capture-remote
//!
//! Client for the remote structured store used by the login capture demo.
//!
//! The store is a Supabase project: rows are inserted through `PostgREST`
//! (`POST /rest/v1/<table>`) and notifications go through an Edge Function
//! (`POST /functions/v1/<name>`). Both calls authenticate with the public
//! anon key, sent as `apikey` and as a bearer token.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use login_capture_remote::{create_backend, RemoteBackend, RemoteCredentials};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = create_backend(RemoteCredentials::new(
//!         "https://your-project.supabase.co",
//!         "your-anon-key",
//!     ))?;
//!
//!     backend
//!         .insert_row("login_attempts", &json!({ "username": "alice" }))
//!         .await?;
//!
//!     let reply = backend
//!         .invoke_function("send-login-notification", &json!({ "username": "alice" }))
//!         .await?;
//!     println!("{:?}", reply.message);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, RemoteError>`](RemoteError). Calls are
//! never retried here; callers decide how to degrade.

mod backends;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

pub use error::{RemoteError, Result};

pub use factory::create_backend;

pub use traits::RemoteBackend;

pub use types::{FunctionResponse, RemoteCredentials};

pub use utils::datetime;
pub use utils::log_sanitizer;

pub use backends::SupabaseBackend;
