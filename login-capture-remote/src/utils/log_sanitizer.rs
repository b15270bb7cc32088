//! Log sanitization utilities
//!
//! Keeps submitted secrets and oversized bodies out of debug/error logs.
//! Passwords are stored verbatim by the remote table, but they must never
//! appear in a log line.

use serde_json::Value;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Replacement written in place of secret values.
const REDACTED: &str = "***";

/// Object keys whose values are masked by [`redact_secrets`].
const SECRET_KEYS: &[&str] = &["password", "apikey", "api_key", "access_key", "authorization"];

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Render a JSON body for logging with secret fields masked.
///
/// Walks nested objects and arrays; keys are matched case-insensitively.
pub fn redact_secrets(body: &Value) -> String {
    let mut masked = body.clone();
    mask(&mut masked);
    truncate_for_log(&masked.to_string())
}

fn mask(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map.iter_mut() {
                let lowered = key.to_ascii_lowercase();
                if SECRET_KEYS.contains(&lowered.as_str()) {
                    *inner = Value::String(REDACTED.to_string());
                } else {
                    mask(inner);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "你".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn password_masked_in_row_array() {
        let body = json!([{ "username": "alice", "password": "secret123" }]);
        let logged = redact_secrets(&body);
        assert!(logged.contains("alice"));
        assert!(!logged.contains("secret123"));
        assert!(logged.contains(REDACTED));
    }

    #[test]
    fn keys_matched_case_insensitively() {
        let body = json!({ "Password": "hunter2", "nested": { "ApiKey": "k" } });
        let logged = redact_secrets(&body);
        assert!(!logged.contains("hunter2"));
        assert!(!logged.contains("\"k\""));
    }

    #[test]
    fn non_secret_body_untouched() {
        let body = json!({ "username": "bob" });
        assert_eq!(redact_secrets(&body), r#"{"username":"bob"}"#);
    }
}
