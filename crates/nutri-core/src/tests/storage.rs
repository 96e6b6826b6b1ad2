use crate::{
    FileStore, KeyValueStore, MemoryStore, NutritionProfile, PROFILE_KEY, SESSION_KEY,
    StorageError, load_json, save_json,
};

use std::fs;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use tempfile::TempDir;

fn file_store() -> (TempDir, FileStore) {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path().join("storage")).unwrap();
    (temp, store)
}

// =========================================================================
// FileStore
// =========================================================================

#[test]
fn given_missing_directory_when_open_then_directory_is_created() {
    // Given
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested").join("storage");

    // When
    let store = FileStore::open(&dir).unwrap();

    // Then
    assert!(dir.is_dir());
    assert_eq!(store.dir(), dir.as_path());
}

#[test]
fn given_value_set_when_get_then_value_returned() {
    // Given
    let (_temp, store) = file_store();
    store.set(SESSION_KEY, r#"{"id":1}"#).unwrap();

    // When
    let value = store.get(SESSION_KEY);

    // Then
    assert_that!(value, ok(some(eq(r#"{"id":1}"#))));
}

#[test]
fn given_value_set_when_set_again_then_last_write_wins() {
    let (_temp, store) = file_store();

    store.set(PROFILE_KEY, "first").unwrap();
    store.set(PROFILE_KEY, "second").unwrap();

    assert_eq!(store.get(PROFILE_KEY).unwrap().as_deref(), Some("second"));
}

#[test]
fn given_write_when_complete_then_no_temp_files_remain() {
    let (_temp, store) = file_store();

    store.set(SESSION_KEY, "{}").unwrap();

    let names: Vec<String> = fs::read_dir(store.dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![String::from("user.json")]);
}

#[test]
fn given_absent_key_when_get_then_none() {
    let (_temp, store) = file_store();

    assert_that!(store.get("nothing"), ok(none()));
}

#[test]
fn given_absent_key_when_remove_then_ok() {
    let (_temp, store) = file_store();

    assert_that!(store.remove(SESSION_KEY), ok(anything()));
}

#[test]
fn given_value_when_remove_then_absent() {
    let (_temp, store) = file_store();
    store.set(SESSION_KEY, "{}").unwrap();

    store.remove(SESSION_KEY).unwrap();

    assert_that!(store.get(SESSION_KEY), ok(none()));
}

#[test]
fn given_path_like_key_when_set_then_invalid_key_error() {
    let (_temp, store) = file_store();

    let result = store.set("../escape", "{}");

    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert!(matches!(error, StorageError::InvalidKey { .. }));
    assert!(!error.is_transient());
}

#[test]
fn given_corrupted_value_when_discarded_then_backup_kept_and_key_absent() {
    // Given
    let (_temp, store) = file_store();
    store.set(SESSION_KEY, "not json").unwrap();

    // When
    store.discard_corrupted(SESSION_KEY).unwrap();

    // Then
    assert_that!(store.get(SESSION_KEY), ok(none()));
    let backups: Vec<String> = fs::read_dir(store.dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("user.json.corrupted."))
        .collect();
    assert_eq!(backups.len(), 1);
}

// =========================================================================
// MemoryStore
// =========================================================================

#[test]
fn given_memory_store_when_set_and_remove_then_len_tracks_entries() {
    let store = MemoryStore::new();
    assert!(store.is_empty());

    store.set(SESSION_KEY, "{}").unwrap();
    store.set(PROFILE_KEY, "{}").unwrap();
    assert_eq!(store.len(), 2);

    store.remove(SESSION_KEY).unwrap();
    assert_eq!(store.len(), 1);
    assert_that!(store.get(SESSION_KEY), ok(none()));
}

#[test]
fn given_memory_store_when_discard_corrupted_then_key_removed() {
    let store = MemoryStore::new();
    store.set(PROFILE_KEY, "garbage").unwrap();

    store.discard_corrupted(PROFILE_KEY).unwrap();

    assert!(store.is_empty());
}

// =========================================================================
// JSON helpers
// =========================================================================

#[test]
fn given_saved_profile_when_load_json_then_same_profile() {
    let store = MemoryStore::new();
    let mut profile = NutritionProfile::default();
    profile.weight_kg = 82.5.into();
    profile.dietary_restrictions = String::from("Vegan");

    save_json(&store, PROFILE_KEY, &profile).unwrap();
    let loaded: Option<NutritionProfile> = load_json(&store, PROFILE_KEY);

    assert_eq!(loaded, Some(profile));
}

#[test]
fn given_malformed_json_when_load_json_then_none_and_value_discarded() {
    // Given
    let (_temp, store) = file_store();
    store.set(PROFILE_KEY, "{ broken").unwrap();

    // When
    let loaded: Option<NutritionProfile> = load_json(&store, PROFILE_KEY);

    // Then
    assert!(loaded.is_none());
    assert_that!(store.get(PROFILE_KEY), ok(none()));
}

#[test]
fn given_invalid_key_when_load_json_then_none() {
    let store = MemoryStore::new();

    let loaded: Option<NutritionProfile> = load_json(&store, "bad key");

    assert!(loaded.is_none());
}
