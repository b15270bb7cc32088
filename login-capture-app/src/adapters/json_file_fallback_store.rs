//! JSON file based fallback store
//!
//! The file holds a single object keyed by [`FALLBACK_SLOT`]:
//!
//! ```json
//! { "login_attempts": [ { "username": "...", "password": "...", "created_at": "..." } ] }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, PoisonError};

use async_trait::async_trait;
use login_capture_core::error::{CoreError, CoreResult};
use login_capture_core::traits::{FallbackStore, FALLBACK_SLOT};
use login_capture_core::types::CredentialAttempt;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

/// 回退存储文件名
pub const STORE_FILE_NAME: &str = "login_attempts.json";
const MAX_STORE_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10MB

type PathLocks = std::sync::Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>;

/// 进程内按文件路径共享的追加锁
static PATH_LOCKS: LazyLock<PathLocks> =
    LazyLock::new(|| std::sync::Mutex::new(HashMap::new()));

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// 同一路径的所有实例拿到同一把锁
fn lock_for(path: &Path) -> Arc<Mutex<()>> {
    let key = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut locks = PATH_LOCKS.lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(locks.entry(key).or_default())
}

/// Fallback store persisted as a JSON file.
///
/// Every append reads the whole list, pushes one attempt and writes the list
/// back. Appends are serialized by an async mutex shared by every instance
/// in the process that points at the same file.
pub struct JsonFileFallbackStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileFallbackStore {
    /// Store backed by `path`. The file and its parent directories are created
    /// on first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        log::debug!("[fallback] Store file: {}", path.display());
        let write_lock = lock_for(&path);
        Self { path, write_lock }
    }

    /// Store at `<dir>/login_attempts.json`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> CoreResult<Map<String, Value>> {
        let metadata = match tokio::fs::metadata(&self.path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read store file metadata: {e}"
                )))
            }
        };

        if metadata.len() > MAX_STORE_FILE_SIZE {
            return Err(CoreError::StorageError(format!(
                "Store file too large: {} bytes (max: {MAX_STORE_FILE_SIZE} bytes)",
                metadata.len()
            )));
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to read store file: {e}")))?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content) {
            Ok(Value::Object(doc)) => Ok(doc),
            Ok(_) => Err(CoreError::SerializationError(
                "Invalid store format: expected a JSON object".to_string(),
            )),
            Err(e) => Err(CoreError::SerializationError(format!(
                "Invalid store format: {e}"
            ))),
        }
    }

    fn attempts_in(doc: &Map<String, Value>) -> CoreResult<Vec<CredentialAttempt>> {
        match doc.get(FALLBACK_SLOT) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                CoreError::SerializationError(format!("Invalid {FALLBACK_SLOT} format: {e}"))
            }),
        }
    }

    async fn write_document(&self, doc: &Map<String, Value>) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }

        let content = serde_json::to_string_pretty(doc)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        // 先写临时文件再重命名，避免写到一半的文件
        let tmp_path = self.path.with_extension(format!(
            "json.{}.{}.tmp",
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        tokio::fs::write(&tmp_path, content)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to write store file: {e}")))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to replace store file: {e}")))
    }
}

#[async_trait]
impl FallbackStore for JsonFileFallbackStore {
    async fn append(&self, attempt: &CredentialAttempt) -> CoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.read_document().await?;
        let mut attempts = Self::attempts_in(&doc)?;
        attempts.push(attempt.clone());

        let value = serde_json::to_value(&attempts)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        doc.insert(FALLBACK_SLOT.to_string(), value);
        self.write_document(&doc).await?;

        log::debug!(
            "[fallback] Appended attempt for {} ({} total)",
            attempt.username,
            attempts.len()
        );
        Ok(())
    }

    async fn load_all(&self) -> CoreResult<Vec<CredentialAttempt>> {
        let _guard = self.write_lock.lock().await;
        let doc = self.read_document().await?;
        Self::attempts_in(&doc)
    }
}
