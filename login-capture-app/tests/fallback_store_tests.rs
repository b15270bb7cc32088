#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the fallback store adapters.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use login_capture_app::adapters::{InMemoryFallbackStore, JsonFileFallbackStore, STORE_FILE_NAME};
use login_capture_core::error::CoreError;
use login_capture_core::traits::FallbackStore;
use login_capture_core::types::{CredentialAttempt, Credentials};

fn attempt(username: &str, password: &str) -> CredentialAttempt {
    CredentialAttempt::at(
        Credentials::new(username, password),
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    )
}

fn temp_store() -> (JsonFileFallbackStore, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let store = JsonFileFallbackStore::in_dir(&tmp.path().join("nested").join("data"));
    (store, tmp)
}

#[tokio::test]
async fn missing_file_loads_empty() {
    let (store, _tmp) = temp_store();
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn append_creates_file_and_keeps_order() {
    let (store, _tmp) = temp_store();

    store.append(&attempt("alice", "secret123")).await.unwrap();
    store.append(&attempt("bob", "hunter2")).await.unwrap();

    assert!(store.path().exists());
    assert!(store.path().ends_with(STORE_FILE_NAME));

    let all = store.load_all().await.unwrap();
    let names: Vec<_> = all.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob"]);
    assert_eq!(all[0].password, "secret123");
}

#[tokio::test]
async fn identical_attempts_are_not_deduplicated() {
    let (store, _tmp) = temp_store();

    store.append(&attempt("alice", "secret123")).await.unwrap();
    store.append(&attempt("alice", "secret123")).await.unwrap();

    assert_eq!(store.load_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn file_layout_is_single_named_slot() {
    let (store, _tmp) = temp_store();
    store.append(&attempt("alice", "secret123")).await.unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let list = doc["login_attempts"].as_array().expect("slot holds an array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["username"], "alice");
    assert_eq!(list[0]["password"], "secret123");
    assert_eq!(list[0]["created_at"], "2024-05-01T12:00:00.000Z");
}

#[tokio::test]
async fn other_keys_in_file_survive_append() {
    let (store, _tmp) = temp_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), r#"{"theme":"dark"}"#).unwrap();

    store.append(&attempt("alice", "secret123")).await.unwrap();

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(doc["theme"], "dark");
    assert_eq!(doc["login_attempts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn new_instance_sees_previous_records() {
    let (store, _tmp) = temp_store();
    store.append(&attempt("alice", "secret123")).await.unwrap();

    let reopened = JsonFileFallbackStore::new(store.path().to_path_buf());
    reopened.append(&attempt("bob", "pw")).await.unwrap();

    assert_eq!(store.load_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn corrupt_file_fails_append() {
    let (store, _tmp) = temp_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "not json").unwrap();

    let err = store.append(&attempt("alice", "secret123")).await.unwrap_err();

    assert!(matches!(err, CoreError::SerializationError(_)), "{err:?}");
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "not json");
}

#[tokio::test]
async fn concurrent_appends_lose_nothing() {
    let (store, _tmp) = temp_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.append(&attempt(&format!("user{i}"), "pw")).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.load_all().await.unwrap().len(), 20);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn separate_instances_on_one_file_lose_nothing() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let first = Arc::new(JsonFileFallbackStore::in_dir(tmp.path()));
    let second = Arc::new(JsonFileFallbackStore::in_dir(tmp.path()));

    let handles: Vec<_> = (0..40)
        .map(|i| {
            let store = if i % 2 == 0 {
                Arc::clone(&first)
            } else {
                Arc::clone(&second)
            };
            tokio::spawn(async move { store.append(&attempt(&format!("user{i}"), "pw")).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(first.load_all().await.unwrap().len(), 40);
    let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[tokio::test]
async fn in_memory_store_keeps_order() {
    let store = InMemoryFallbackStore::new();

    store.append(&attempt("alice", "a")).await.unwrap();
    store.append(&attempt("bob", "b")).await.unwrap();

    let names: Vec<_> = store
        .load_all()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.username)
        .collect();
    assert_eq!(names, ["alice", "bob"]);
}
