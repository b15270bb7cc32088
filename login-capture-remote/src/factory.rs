//! Backend factory functions.

use std::sync::Arc;

use url::Url;

use crate::backends::SupabaseBackend;
use crate::error::{RemoteError, Result};
use crate::traits::RemoteBackend;
use crate::types::RemoteCredentials;

/// Creates a [`RemoteBackend`] instance from the given credentials.
///
/// The endpoint must be an absolute `http`/`https` URL and the access key
/// must be non-empty. The returned backend is wrapped in
/// `Arc<dyn RemoteBackend>` for easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use login_capture_remote::{create_backend, RemoteCredentials};
///
/// let backend = create_backend(RemoteCredentials::new(
///     "https://your-project.supabase.co",
///     "your-anon-key",
/// ))
/// .unwrap();
/// ```
pub fn create_backend(credentials: RemoteCredentials) -> Result<Arc<dyn RemoteBackend>> {
    validate_credentials(&credentials)?;
    Ok(Arc::new(SupabaseBackend::new(credentials)?))
}

fn validate_credentials(credentials: &RemoteCredentials) -> Result<()> {
    let invalid = |detail: String| RemoteError::InvalidConfiguration {
        backend: "supabase".to_string(),
        detail,
    };

    let url = Url::parse(credentials.endpoint.trim())
        .map_err(|e| invalid(format!("endpoint is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "endpoint scheme must be http or https, got '{}'",
            url.scheme()
        )));
    }
    if credentials.access_key.trim().is_empty() {
        return Err(invalid("access key is empty".to_string()));
    }
    Ok(())
}
