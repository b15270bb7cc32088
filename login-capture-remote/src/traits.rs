use async_trait::async_trait;
use serde_json::Value;

use crate::error::{RemoteError, Result};
use crate::types::FunctionResponse;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 错误码（如 Postgres SQLSTATE）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供目标资源
#[derive(Debug, Clone)]
pub(crate) enum ErrorContext {
    /// 写入的表名
    Table(String),
    /// 调用的函数名
    Function(String),
}

impl ErrorContext {
    pub fn resource(&self) -> &str {
        match self {
            Self::Table(name) | Self::Function(name) => name,
        }
    }
}

/// 后端错误映射 Trait（内部使用）
/// 各后端实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait RemoteErrorMapper {
    /// 返回后端标识符
    fn backend_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: &ErrorContext) -> RemoteError;

    /// 快捷方法：序列化错误
    fn serialization_error(&self, detail: impl ToString) -> RemoteError {
        RemoteError::SerializationError {
            backend: self.backend_name().to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Remote structured store Trait
///
/// Exposes only the two write paths the login flow needs: a single-row
/// insert and a function invocation. No read or query operations.
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    /// Backend identifier
    fn id(&self) -> &'static str;

    /// Insert one row into `table`.
    ///
    /// `row` is a JSON object. Single attempt; any non-2xx reply is an error.
    async fn insert_row(&self, table: &str, row: &Value) -> Result<()>;

    /// Invoke the remote function `name` with a JSON body.
    async fn invoke_function(&self, name: &str, body: &Value) -> Result<FunctionResponse>;
}
