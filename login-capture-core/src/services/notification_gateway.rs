//! 通知网关

use std::sync::Arc;

use serde_json::json;

use crate::config::RemoteBinding;
use crate::services::{ServiceContext, NOTIFICATION_FUNCTION};
use crate::types::NotifyReceipt;

/// 通知网关
///
/// 从不向调用方返回错误；结果不影响提交的 Outcome。
pub struct NotificationGateway {
    ctx: Arc<ServiceContext>,
}

impl NotificationGateway {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 发送登录通知
    ///
    /// - 未配置远端：只记录日志，返回 `{ sent: true, mocked: true }`
    /// - 已配置：调用远端通知函数，失败时返回 `{ sent: false, mocked: false }`
    pub async fn notify(&self, username: &str) -> NotifyReceipt {
        let backend = match &self.ctx.remote {
            RemoteBinding::Configured(backend) => backend,
            RemoteBinding::Unconfigured => {
                log::info!("[Mock notification] Login attempt by: {username}");
                return NotifyReceipt::mocked();
            }
        };

        let body = json!({ "username": username });
        match backend.invoke_function(NOTIFICATION_FUNCTION, &body).await {
            Ok(reply) => {
                log::debug!(
                    "[notification] {NOTIFICATION_FUNCTION} accepted for {username}: {}",
                    reply.message.as_deref().unwrap_or("-")
                );
                NotifyReceipt::sent()
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[notification] Failed to notify for {username}: {e}");
                } else {
                    log::error!("[notification] Failed to notify for {username}: {e}");
                }
                NotifyReceipt::failed()
            }
        }
    }
}
