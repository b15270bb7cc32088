//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use login_capture_remote::{FunctionResponse, RemoteBackend, RemoteError};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::config::RemoteBinding;
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::FallbackStore;
use crate::types::CredentialAttempt;

// ===== MockRemoteBackend =====

/// 记录所有调用的远端存储；失败时同样记录调用
pub struct MockRemoteBackend {
    inserts: RwLock<Vec<(String, Value)>>,
    invocations: RwLock<Vec<(String, Value)>>,
    insert_error: RwLock<Option<RemoteError>>,
    invoke_error: RwLock<Option<RemoteError>>,
}

impl MockRemoteBackend {
    pub fn new() -> Self {
        Self {
            inserts: RwLock::new(Vec::new()),
            invocations: RwLock::new(Vec::new()),
            insert_error: RwLock::new(None),
            invoke_error: RwLock::new(None),
        }
    }

    pub async fn fail_inserts(&self, err: RemoteError) {
        *self.insert_error.write().await = Some(err);
    }

    pub async fn fail_invocations(&self, err: RemoteError) {
        *self.invoke_error.write().await = Some(err);
    }

    pub async fn insert_calls(&self) -> usize {
        self.inserts.read().await.len()
    }

    pub async fn inserted_rows(&self) -> Vec<(String, Value)> {
        self.inserts.read().await.clone()
    }

    pub async fn invocations(&self) -> Vec<(String, Value)> {
        self.invocations.read().await.clone()
    }
}

#[async_trait]
impl RemoteBackend for MockRemoteBackend {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn insert_row(&self, table: &str, row: &Value) -> login_capture_remote::Result<()> {
        self.inserts
            .write()
            .await
            .push((table.to_string(), row.clone()));
        match self.insert_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn invoke_function(
        &self,
        name: &str,
        body: &Value,
    ) -> login_capture_remote::Result<FunctionResponse> {
        self.invocations
            .write()
            .await
            .push((name.to_string(), body.clone()));
        match self.invoke_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(FunctionResponse {
                success: Some(true),
                message: None,
            }),
        }
    }
}

// ===== MockFallbackStore =====

pub struct MockFallbackStore {
    attempts: RwLock<Vec<CredentialAttempt>>,
    append_calls: AtomicUsize,
    failing: bool,
}

impl MockFallbackStore {
    pub fn new() -> Self {
        Self {
            attempts: RwLock::new(Vec::new()),
            append_calls: AtomicUsize::new(0),
            failing: false,
        }
    }

    /// append 总是返回 `StorageError`
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn append_calls(&self) -> usize {
        self.append_calls.load(Ordering::SeqCst)
    }

    pub async fn attempts(&self) -> Vec<CredentialAttempt> {
        self.attempts.read().await.clone()
    }
}

#[async_trait]
impl FallbackStore for MockFallbackStore {
    async fn append(&self, attempt: &CredentialAttempt) -> CoreResult<()> {
        self.append_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(CoreError::StorageError("quota exceeded".to_string()));
        }
        self.attempts.write().await.push(attempt.clone());
        Ok(())
    }

    async fn load_all(&self) -> CoreResult<Vec<CredentialAttempt>> {
        Ok(self.attempts().await)
    }
}

// ===== 工厂方法 =====

pub fn configured_context(
    remote: &Arc<MockRemoteBackend>,
    fallback: &Arc<MockFallbackStore>,
) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(
        RemoteBinding::Configured(remote.clone()),
        fallback.clone(),
    ))
}

pub fn unconfigured_context(fallback: &Arc<MockFallbackStore>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(
        RemoteBinding::Unconfigured,
        fallback.clone(),
    ))
}

pub fn remote_rejected() -> RemoteError {
    RemoteError::Rejected {
        backend: "mock".to_string(),
        status: 400,
        raw_code: Some("23502".to_string()),
        raw_message: "null value in column \"password\"".to_string(),
    }
}

pub fn remote_unreachable() -> RemoteError {
    RemoteError::NetworkError {
        backend: "mock".to_string(),
        detail: "connection refused".to_string(),
    }
}
