//! Public types shared by every remote backend.

use serde::{Deserialize, Serialize};

/// Connection settings for a remote structured store.
///
/// `Debug` never prints the access key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCredentials {
    /// Project base URL, e.g. `https://abc.supabase.co`.
    pub endpoint: String,
    /// Public (anon) access key sent as `apikey` and bearer token.
    pub access_key: String,
}

impl RemoteCredentials {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }
}

impl std::fmt::Debug for RemoteCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCredentials")
            .field("endpoint", &self.endpoint)
            .field("access_key", &"***")
            .finish()
    }
}

/// Successful reply of a remote function.
///
/// Functions answer `{ "success": true, "message": "..." }`; both fields are
/// optional so that bare `{}` or non-JSON 2xx bodies still count as success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResponse {
    /// `success` flag reported by the function.
    #[serde(default)]
    pub success: Option<bool>,
    /// Human-readable message reported by the function.
    #[serde(default)]
    pub message: Option<String>,
}
