//! 进程内回退存储

use async_trait::async_trait;
use login_capture_core::error::CoreResult;
use login_capture_core::traits::FallbackStore;
use login_capture_core::types::CredentialAttempt;
use tokio::sync::RwLock;

/// In-memory fallback store. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryFallbackStore {
    attempts: RwLock<Vec<CredentialAttempt>>,
}

impl InMemoryFallbackStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FallbackStore for InMemoryFallbackStore {
    async fn append(&self, attempt: &CredentialAttempt) -> CoreResult<()> {
        self.attempts.write().await.push(attempt.clone());
        Ok(())
    }

    async fn load_all(&self) -> CoreResult<Vec<CredentialAttempt>> {
        Ok(self.attempts.read().await.clone())
    }
}
