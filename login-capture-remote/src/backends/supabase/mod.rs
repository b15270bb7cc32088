//! Supabase backend (`PostgREST` inserts + Edge Function invocation)

mod backend;
mod error;
mod http;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;
use crate::types::RemoteCredentials;

pub(crate) use types::{FunctionErrorBody, PostgrestErrorBody};

/// REST path prefix for table access.
pub(crate) const REST_PATH: &str = "/rest/v1";
/// Path prefix for Edge Functions.
pub(crate) const FUNCTIONS_PATH: &str = "/functions/v1";

/// Supabase remote backend
pub struct SupabaseBackend {
    pub(crate) client: Client,
    /// Base URL without a trailing slash.
    pub(crate) base_url: String,
    pub(crate) access_key: String,
}

impl SupabaseBackend {
    pub fn new(credentials: RemoteCredentials) -> Result<Self> {
        Ok(Self {
            client: create_http_client("supabase")?,
            base_url: credentials.endpoint.trim_end_matches('/').to_string(),
            access_key: credentials.access_key,
        })
    }

    pub(crate) fn table_url(&self, table: &str) -> String {
        format!("{}{REST_PATH}/{table}", self.base_url)
    }

    pub(crate) fn function_url(&self, name: &str) -> String {
        format!("{}{FUNCTIONS_PATH}/{name}", self.base_url)
    }
}
