//! Generic HTTP client tools
//!
//! Reusable request processing shared by every backend: sending the request,
//! logging, and reading the response body. Each backend still builds its own
//! `RequestBuilder` (URL, auth headers, body) and interprets the status code.
//!
//! Remote calls in this workspace are single-attempt, so there is no retry
//! layer here.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::RemoteError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(backend_name: &str) -> Result<Client, RemoteError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| RemoteError::InvalidConfiguration {
            backend: backend_name.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `backend_name` - backend name (for logging and errors)
    /// * `method_name` - request method name (such as "POST", used for logs)
    /// * `url` - target URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP response, including non-2xx
    /// * `Err(RemoteError::Timeout)` / `Err(RemoteError::NetworkError)` when no response arrived
    pub async fn execute_request(
        request_builder: RequestBuilder,
        backend_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), RemoteError> {
        log::debug!("[{backend_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RemoteError::Timeout {
                    backend: backend_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                RemoteError::NetworkError {
                    backend: backend_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{backend_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| RemoteError::NetworkError {
                backend: backend_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{backend_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }
}

/// Whether an HTTP status code counts as success.
pub fn is_success(status_code: u16) -> bool {
    (200..300).contains(&status_code)
}
