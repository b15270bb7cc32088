//! Storage layer abstraction trait definition

mod fallback_store;

pub use fallback_store::{FallbackStore, FALLBACK_SLOT};
