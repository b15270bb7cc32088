//! 登录尝试相关类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 表单原始输入
///
/// `Debug` 输出中密码始终被隐藏。
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// 用户名（按输入原样保存，不做 trim）
    pub username: String,
    /// 密码
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// 一次登录尝试记录
///
/// 提交时创建，创建后不可变；每次提交恰好持久化一次，不去重。
/// 序列化形状即远端 `login_attempts` 行与本地回退存储条目的形状。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialAttempt {
    /// 用户名
    pub username: String,
    /// 密码（明文保存）
    pub password: String,
    /// 创建时间
    #[serde(with = "login_capture_remote::datetime")]
    pub created_at: DateTime<Utc>,
}

impl CredentialAttempt {
    /// 以当前时间创建记录
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::at(credentials, Utc::now())
    }

    /// 以指定时间创建记录
    #[must_use]
    pub fn at(credentials: Credentials, created_at: DateTime<Utc>) -> Self {
        Self {
            username: credentials.username,
            password: credentials.password,
            created_at,
        }
    }
}

impl std::fmt::Debug for CredentialAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialAttempt")
            .field("username", &self.username)
            .field("password", &"***")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// 通知记录（`login_notifications` 行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// 用户名
    pub username: String,
    /// 是否已发送
    pub notification_sent: bool,
    /// 创建时间
    #[serde(with = "login_capture_remote::datetime")]
    pub created_at: DateTime<Utc>,
}

impl NotificationRecord {
    /// 创建一条已发送的通知记录
    #[must_use]
    pub fn sent(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            notification_sent: true,
            created_at: Utc::now(),
        }
    }
}
