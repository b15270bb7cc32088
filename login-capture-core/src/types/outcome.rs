//! 提交结果类型

use serde::{Deserialize, Serialize};

/// 远端写入成功时的提示
pub const MSG_STORED_REMOTE: &str = "Login successful";
/// 回退到本地存储时的提示
pub const MSG_STORED_LOCAL: &str = "Login stored locally (remote store not configured)";
/// 失败时的通用提示
pub const MSG_FAILED: &str = "Something went wrong. Please try again.";

/// 持久化网关结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreReceipt {
    /// 是否写入了远端
    pub stored_remote: bool,
}

/// 通知网关结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyReceipt {
    /// 是否视为已发送
    pub sent: bool,
    /// 是否为 mock（未配置远端时）
    pub mocked: bool,
}

impl NotifyReceipt {
    #[must_use]
    pub fn mocked() -> Self {
        Self {
            sent: true,
            mocked: true,
        }
    }

    #[must_use]
    pub fn sent() -> Self {
        Self {
            sent: true,
            mocked: false,
        }
    }

    #[must_use]
    pub fn failed() -> Self {
        Self {
            sent: false,
            mocked: false,
        }
    }
}

/// 一次提交的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// 远端写入成功
    StoredRemote,
    /// 远端不可用，本地回退写入成功
    StoredLocalFallback,
    /// 远端与本地均失败
    Failed,
}

impl Outcome {
    /// 是否视为成功（尝试已存储）
    #[must_use]
    pub fn is_stored(self) -> bool {
        !matches!(self, Self::Failed)
    }

    /// 面向用户的提示
    #[must_use]
    pub fn feedback(self) -> Feedback {
        match self {
            Self::StoredRemote => Feedback::Success(MSG_STORED_REMOTE.to_string()),
            Self::StoredLocalFallback => Feedback::Success(MSG_STORED_LOCAL.to_string()),
            Self::Failed => Feedback::Error(MSG_FAILED.to_string()),
        }
    }
}

impl From<StoreReceipt> for Outcome {
    fn from(receipt: StoreReceipt) -> Self {
        if receipt.stored_remote {
            Self::StoredRemote
        } else {
            Self::StoredLocalFallback
        }
    }
}

/// 提示信号（toast）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
