//! Utility modules.

/// Timestamp serialization helpers shared by row types.
pub mod datetime;

/// Log sanitization utilities to prevent secret exposure.
pub mod log_sanitizer;
