//! Supabase `RemoteBackend` trait 实现

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::traits::{ErrorContext, RemoteBackend};
use crate::types::FunctionResponse;

use super::SupabaseBackend;

#[async_trait]
impl RemoteBackend for SupabaseBackend {
    fn id(&self) -> &'static str {
        "supabase"
    }

    async fn insert_row(&self, table: &str, row: &Value) -> Result<()> {
        let url = self.table_url(table);
        // PostgREST bulk insert format; `return=minimal` answers 201 with an empty body.
        let body = Value::Array(vec![row.clone()]);
        self.post(
            &url,
            &body,
            &[("Prefer", "return=minimal")],
            &ErrorContext::Table(table.to_string()),
        )
        .await?;
        Ok(())
    }

    async fn invoke_function(&self, name: &str, body: &Value) -> Result<FunctionResponse> {
        let url = self.function_url(name);
        let text = self
            .post(&url, body, &[], &ErrorContext::Function(name.to_string()))
            .await?;

        if text.trim().is_empty() {
            return Ok(FunctionResponse::default());
        }
        // 2xx 即视为成功，响应体格式不影响结果
        if let Ok(resp) = serde_json::from_str::<FunctionResponse>(&text) {
            return Ok(resp);
        }
        log::debug!("[{}] Function {name} replied with a non-JSON body", self.id());
        Ok(FunctionResponse::default())
    }
}
