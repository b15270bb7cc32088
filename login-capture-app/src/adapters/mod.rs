//! Fallback store adapters.

mod in_memory_fallback_store;
mod json_file_fallback_store;

pub use in_memory_fallback_store::InMemoryFallbackStore;
pub use json_file_fallback_store::{JsonFileFallbackStore, STORE_FILE_NAME};
