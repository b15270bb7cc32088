//! Supabase API 类型定义

use serde::Deserialize;

/// `PostgREST` 错误响应
///
/// `{ "code": "23505", "message": "...", "details": "...", "hint": null }`
///
/// 只保留 `code` 与 `message`；`details` 会回显行内的值（如
/// `Key (username)=(...)`），不进入错误与日志。
#[derive(Debug, Default, Deserialize)]
pub struct PostgrestErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Edge Function 错误响应：`{ "error": "..." }`
#[derive(Debug, Default, Deserialize)]
pub struct FunctionErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    /// 网关层错误（如函数不存在）使用 `message`
    #[serde(default)]
    pub message: Option<String>,
}
