use super::*;

fn session(token: &str) -> Session {
    Session {
        token: token.to_owned(),
        user: User {
            id: "mock-user-003".to_owned(),
            username: "demouser".to_owned(),
            email: "demo@demo.com".to_owned(),
            created_at: "2024-01-01T00:00:00.000Z".to_owned(),
            profile: None,
        },
    }
}

// =============================================================================
// MemorySessionStore
// =============================================================================

#[test]
fn memory_store_starts_empty_and_replaces() {
    let store = MemorySessionStore::new();
    assert_eq!(store.get().unwrap(), None);

    store.set(&session("a")).unwrap();
    store.set(&session("b")).unwrap();
    assert_eq!(store.get().unwrap().unwrap().token, "b");

    store.clear().unwrap();
    assert_eq!(store.get().unwrap(), None);
}

// =============================================================================
// FileSessionStore
// =============================================================================

#[test]
fn file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    assert_eq!(store.get().unwrap(), None);
    store.clear().unwrap();
}

#[test]
fn file_store_round_trips_through_fixed_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("nested/session.json"));
    store.set(&session("mock-jwt-token-demo-11111")).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.get(TOKEN_KEY).map(String::as_str), Some("mock-jwt-token-demo-11111"));
    let user: User = serde_json::from_str(&entries[USER_KEY]).unwrap();
    assert_eq!(user.username, "demouser");

    assert_eq!(store.get().unwrap(), Some(session("mock-jwt-token-demo-11111")));
}

#[test]
fn file_store_clear_removes_both_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    store.set(&session("tok")).unwrap();
    store.clear().unwrap();

    assert_eq!(store.get().unwrap(), None);
    assert!(!store.path().exists());
}

#[test]
fn file_store_clear_keeps_unrelated_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"theme":"dark","token":"t","user":"{}"}"#).unwrap();

    let store = FileSessionStore::new(&path);
    store.clear().unwrap();

    let entries: BTreeMap<String, String> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries["theme"], "dark");
}

#[test]
fn file_store_token_without_user_is_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"token":"orphan"}"#).unwrap();
    assert_eq!(FileSessionStore::new(&path).get().unwrap(), None);
}

#[test]
fn file_store_unreadable_user_is_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"token":"t","user":"not json"}"#).unwrap();
    assert_eq!(FileSessionStore::new(&path).get().unwrap(), None);
}

#[test]
fn file_store_corrupt_file_is_an_error_on_get() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "[1, 2").unwrap();
    let store = FileSessionStore::new(&path);
    assert!(matches!(store.get(), Err(StoreError::Serde(_))));

    store.set(&session("fresh")).unwrap();
    assert_eq!(store.get().unwrap().unwrap().token, "fresh");
}
