//! 提交编排服务

use std::sync::Arc;

use crate::services::{NotificationGateway, PersistenceGateway, ServiceContext};
use crate::types::{CredentialAttempt, Credentials, FormField, Outcome, ValidationErrors};

const USERNAME_REQUIRED: &str = "Username is required";
const PASSWORD_REQUIRED: &str = "Password is required";

/// 校验表单输入
///
/// 用户名 trim 后不能为空；密码只检查是否为空（不 trim）。所有出错字段一并返回。
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if credentials.username.trim().is_empty() {
        errors.insert(FormField::Username, USERNAME_REQUIRED);
    }
    if credentials.password.is_empty() {
        errors.insert(FormField::Password, PASSWORD_REQUIRED);
    }
    errors.into_result()
}

/// 提交编排服务
///
/// 校验 → 持久化 → 通知 → 结果。两次网关调用顺序执行，
/// 持久化失败不会跳过通知。
pub struct SubmissionService {
    persistence: PersistenceGateway,
    notification: NotificationGateway,
}

impl SubmissionService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            persistence: PersistenceGateway::new(Arc::clone(&ctx)),
            notification: NotificationGateway::new(ctx),
        }
    }

    /// 提交一次登录
    ///
    /// 校验失败返回 `Err(ValidationErrors)`，此时不会调用任何网关。
    /// 校验通过后总是返回 `Ok(Outcome)`；两条存储路径都失败时为 `Outcome::Failed`。
    pub async fn submit(&self, username: &str, password: &str) -> Result<Outcome, ValidationErrors> {
        let credentials = Credentials::new(username, password);
        validate_credentials(&credentials)?;

        let attempt = CredentialAttempt::new(credentials);

        let stored = match self.persistence.store(&attempt).await {
            Ok(receipt) => Some(receipt),
            Err(e) => {
                log::error!(
                    "[submission] Login attempt by {} could not be stored: {e}",
                    attempt.username
                );
                None
            }
        };

        let notified = self.notification.notify(&attempt.username).await;
        log::debug!(
            "[submission] Notification for {}: sent={}, mocked={}",
            attempt.username,
            notified.sent,
            notified.mocked
        );

        let outcome = stored.map_or(Outcome::Failed, Outcome::from);
        log::info!("[submission] Login attempt by {} -> {outcome:?}", attempt.username);
        Ok(outcome)
    }
}
