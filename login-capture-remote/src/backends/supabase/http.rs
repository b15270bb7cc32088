//! Supabase HTTP 请求方法

use serde_json::Value;

use crate::error::Result;
use crate::http_client::{HttpUtils, is_success};
use crate::traits::{ErrorContext, RawApiError, RemoteErrorMapper};
use crate::utils::log_sanitizer::{redact_secrets, truncate_for_log};

use super::{FunctionErrorBody, PostgrestErrorBody, SupabaseBackend};

impl SupabaseBackend {
    /// 执行 POST 请求，返回 2xx 响应体；非 2xx 映射为统一错误
    pub(crate) async fn post(
        &self,
        url: &str,
        body: &Value,
        extra_headers: &[(&str, &str)],
        context: &ErrorContext,
    ) -> Result<String> {
        let body_json =
            serde_json::to_string(body).map_err(|e| self.serialization_error(e))?;
        log::debug!(
            "[{}] Request Body: {}",
            self.backend_name(),
            redact_secrets(body)
        );

        let mut request = self
            .client
            .post(url)
            .header("apikey", &self.access_key)
            .header("Authorization", format!("Bearer {}", self.access_key))
            .header("Content-Type", "application/json")
            .body(body_json);
        for (name, value) in extra_headers {
            request = request.header(*name, *value);
        }

        let (status, text) =
            HttpUtils::execute_request(request, self.backend_name(), "POST", url).await?;

        if is_success(status) {
            return Ok(text);
        }

        let raw = self.raw_error(status, &text, context);
        log::warn!(
            "[{}] {} failed: HTTP {status} {}",
            self.backend_name(),
            context.resource(),
            truncate_for_log(&raw.message)
        );
        Err(self.map_error(raw, context))
    }

    /// 从错误响应体中提取错误码与消息
    fn raw_error(&self, status: u16, text: &str, context: &ErrorContext) -> RawApiError {
        match context {
            ErrorContext::Table(_) => {
                // JSON 错误体只取 message，不回退到可能含 details 的原文
                match serde_json::from_str::<PostgrestErrorBody>(text) {
                    Ok(body) => {
                        let message = body
                            .message
                            .filter(|m| !m.is_empty())
                            .unwrap_or_else(|| format!("HTTP {status}"));
                        RawApiError::with_code(status, body.code, message)
                    }
                    Err(_) => RawApiError::new(status, fallback_message(status, text)),
                }
            }
            ErrorContext::Function(_) => {
                let body: FunctionErrorBody = serde_json::from_str(text).unwrap_or_default();
                let message = body
                    .error
                    .or(body.message)
                    .unwrap_or_else(|| fallback_message(status, text));
                RawApiError::new(status, message)
            }
        }
    }
}

fn fallback_message(status: u16, text: &str) -> String {
    if text.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        truncate_for_log(text)
    }
}
