//! 通知函数处理器
//!
//! 服务端的 `send-login-notification` 函数：接收 `{ "username": ... }`，
//! 记录一条通知日志，并向 `login_notifications` 表写入一行。
//! 与传输层无关，调用方负责把 [`FunctionReply`] 转换为 HTTP 响应。

use std::sync::Arc;

use login_capture_remote::RemoteBackend;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{CoreError, CoreResult};
use crate::services::LOGIN_NOTIFICATIONS_TABLE;
use crate::types::NotificationRecord;

/// 所有响应都携带的 CORS 头
pub const CORS_HEADERS: [(&str, &str); 2] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
];

/// 函数响应
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionReply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// JSON 响应体；预检请求没有响应体
    pub body: Option<Value>,
}

impl FunctionReply {
    fn new(status: u16, body: Option<Value>) -> Self {
        let mut headers: Vec<(String, String)> = CORS_HEADERS
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        Self {
            status,
            headers,
            body,
        }
    }

    fn preflight() -> Self {
        Self::new(204, None)
    }

    fn ok(message: String) -> Self {
        Self::new(200, Some(json!({ "success": true, "message": message })))
    }

    fn bad_request(error: &str) -> Self {
        Self::new(400, Some(json!({ "error": error })))
    }

    /// 查找响应头（不区分大小写）
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Deserialize)]
struct NotificationRequest {
    username: Option<String>,
}

/// 通知函数
pub struct NotificationFunction {
    store: Arc<dyn RemoteBackend>,
}

impl NotificationFunction {
    #[must_use]
    pub fn new(store: Arc<dyn RemoteBackend>) -> Self {
        Self { store }
    }

    /// 处理一次调用
    pub async fn handle(&self, method: &str, body: &[u8]) -> FunctionReply {
        if method.eq_ignore_ascii_case("OPTIONS") {
            return FunctionReply::preflight();
        }

        match self.record(body).await {
            Ok(username) => {
                FunctionReply::ok(format!("Notification sent for login attempt by {username}"))
            }
            Err(e) => {
                log::warn!("[notification] Request failed: {e}");
                FunctionReply::bad_request(&e.to_string())
            }
        }
    }

    async fn record(&self, body: &[u8]) -> CoreResult<String> {
        let request: NotificationRequest = serde_json::from_slice(body)
            .map_err(|e| CoreError::SerializationError(format!("Invalid request body: {e}")))?;
        let username = request
            .username
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| CoreError::SerializationError("username is required".to_string()))?;

        log::info!("[notification] Login attempt by: {username}");

        let record = NotificationRecord::sent(username.as_str());
        let row =
            serde_json::to_value(&record).map_err(|e| CoreError::SerializationError(e.to_string()))?;
        self.store
            .insert_row(LOGIN_NOTIFICATIONS_TABLE, &row)
            .await?;

        Ok(username)
    }
}
