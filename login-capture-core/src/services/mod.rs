//! 业务逻辑服务层

mod login_session;
mod notification_function;
mod notification_gateway;
mod persistence_gateway;
mod submission_service;

pub use login_session::{LoginSession, SessionState, SessionSubmit, DEFAULT_TRANSITION_DELAY};
pub use notification_function::{FunctionReply, NotificationFunction, CORS_HEADERS};
pub use notification_gateway::NotificationGateway;
pub use persistence_gateway::PersistenceGateway;
pub use submission_service::{validate_credentials, SubmissionService};

use std::sync::Arc;

use crate::config::RemoteBinding;
use crate::traits::FallbackStore;

/// 远端登录尝试表
pub const LOGIN_ATTEMPTS_TABLE: &str = "login_attempts";
/// 远端通知记录表
pub const LOGIN_NOTIFICATIONS_TABLE: &str = "login_notifications";
/// 远端通知函数
pub const NOTIFICATION_FUNCTION: &str = "send-login-notification";

/// 服务上下文 - 持有所有依赖
///
/// 平台层在启动时创建此上下文，注入远端绑定与本地回退存储实现；之后只读。
pub struct ServiceContext {
    /// 远端存储绑定
    pub remote: RemoteBinding,
    /// 本地回退存储
    pub fallback_store: Arc<dyn FallbackStore>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(remote: RemoteBinding, fallback_store: Arc<dyn FallbackStore>) -> Self {
        Self {
            remote,
            fallback_store,
        }
    }
}
