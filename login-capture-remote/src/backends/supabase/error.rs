//! Supabase error mapping

use crate::error::RemoteError;
use crate::traits::{ErrorContext, RawApiError, RemoteErrorMapper};
use crate::utils::log_sanitizer::truncate_for_log;

use super::SupabaseBackend;

/// Supabase status/code mapping
/// Reference: <https://postgrest.org/en/stable/references/errors.html>
impl RemoteErrorMapper for SupabaseBackend {
    fn backend_name(&self) -> &'static str {
        "supabase"
    }

    fn map_error(&self, raw: RawApiError, context: &ErrorContext) -> RemoteError {
        let backend = self.backend_name().to_string();
        match (raw.status, context) {
            // 401: missing/invalid apikey or JWT
            // 403: row level security denied the insert (PGRST / 42501)
            (401 | 403, _) => RemoteError::Unauthorized {
                backend,
                raw_message: Some(raw.message),
            },

            // 404: unknown table (PGRST205) or undeployed function
            (404, _) => RemoteError::NotFound {
                backend,
                resource: context.resource().to_string(),
                raw_message: Some(raw.message),
            },

            // 5xx: gateway / database failure
            (500..=599, _) => RemoteError::ServerError {
                backend,
                status: raw.status,
                detail: truncate_for_log(&raw.message),
            },

            // Edge Function replied with `{ "error": ... }`
            (_, ErrorContext::Function(function)) => RemoteError::FunctionError {
                backend,
                function: function.clone(),
                status: raw.status,
                message: raw.message,
            },

            // Other table errors: constraint violations (23xxx), bad payload (PGRST1xx), ...
            (_, ErrorContext::Table(_)) => RemoteError::Rejected {
                backend,
                status: raw.status,
                raw_code: raw.code,
                raw_message: raw.message,
            },
        }
    }
}
