//! 持久化网关
//!
//! 远端写入一次；远端失败或未配置时追加到本地回退存储。

use std::sync::Arc;

use login_capture_remote::RemoteBackend;

use crate::config::RemoteBinding;
use crate::error::{log_classified, CoreError, CoreResult};
use crate::services::{ServiceContext, LOGIN_ATTEMPTS_TABLE};
use crate::types::{CredentialAttempt, StoreReceipt};

/// 持久化网关
pub struct PersistenceGateway {
    ctx: Arc<ServiceContext>,
}

impl PersistenceGateway {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 存储一次尝试
    ///
    /// 远端成功返回 `stored_remote = true`；远端任何错误（含未配置）都回退到本地，
    /// 返回 `stored_remote = false`。仅当本地回退也失败时返回错误。不重试。
    pub async fn store(&self, attempt: &CredentialAttempt) -> CoreResult<StoreReceipt> {
        match &self.ctx.remote {
            RemoteBinding::Configured(backend) => {
                match Self::store_remote(backend.as_ref(), attempt).await {
                    Ok(()) => {
                        log::info!(
                            "[persistence] Stored login attempt by {} in remote table {LOGIN_ATTEMPTS_TABLE}",
                            attempt.username
                        );
                        return Ok(StoreReceipt {
                            stored_remote: true,
                        });
                    }
                    Err(e) => log_classified(
                        &format!(
                            "[persistence] Remote insert failed for {}, falling back to local store",
                            attempt.username
                        ),
                        &e,
                    ),
                }
            }
            RemoteBinding::Unconfigured => {
                log::warn!(
                    "[persistence] Remote store not configured, storing attempt by {} locally",
                    attempt.username
                );
            }
        }

        self.store_local(attempt).await?;
        Ok(StoreReceipt {
            stored_remote: false,
        })
    }

    async fn store_remote(backend: &dyn RemoteBackend, attempt: &CredentialAttempt) -> CoreResult<()> {
        let row = serde_json::to_value(attempt)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        backend.insert_row(LOGIN_ATTEMPTS_TABLE, &row).await?;
        Ok(())
    }

    async fn store_local(&self, attempt: &CredentialAttempt) -> CoreResult<()> {
        match self.ctx.fallback_store.append(attempt).await {
            Ok(()) => {
                log::info!(
                    "[persistence] Stored login attempt by {} in local fallback store",
                    attempt.username
                );
                Ok(())
            }
            Err(e) => {
                log::error!(
                    "[persistence] Local fallback failed for {}: {e}",
                    attempt.username
                );
                Err(e)
            }
        }
    }
}
