//! 本地回退存储抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::CredentialAttempt;

/// 回退存储中保存尝试列表的固定槽位名
pub const FALLBACK_SLOT: &str = "login_attempts";

/// 本地回退存储 Trait
///
/// 单个命名槽位（[`FALLBACK_SLOT`]）保存按追加顺序排列的尝试列表。
/// 每次追加都是「读取整个列表 → 追加 → 写回整个列表」，
/// 实现必须串行化追加，避免多个实例共享同一存储时丢失更新。
///
/// 平台实现:
/// - `JsonFileFallbackStore` (JSON 文件)
/// - `InMemoryFallbackStore` (进程内)
#[async_trait]
pub trait FallbackStore: Send + Sync {
    /// 追加一条尝试记录
    ///
    /// # Arguments
    /// * `attempt` - 尝试记录
    async fn append(&self, attempt: &CredentialAttempt) -> CoreResult<()>;

    /// 按追加顺序加载所有记录
    async fn load_all(&self) -> CoreResult<Vec<CredentialAttempt>>;
}
