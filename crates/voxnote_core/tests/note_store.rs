use std::collections::HashSet;
use voxnote_core::{
    KeyValueStorage, MemoryStorage, NoteStore, StorageError, StorageResult, StoreError,
    NOTES_STORAGE_KEY,
};

/// Storage whose writes always fail, as a full disk would.
struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "no space left"),
        })
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Ok(())
    }
}

#[test]
fn creates_are_most_recent_first_with_unique_ids() {
    let mut store = NoteStore::load(MemoryStorage::new());
    store.create("first").unwrap();
    store.create("second").unwrap();
    store.create("third").unwrap();

    let contents: Vec<_> = store.notes().iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, ["third", "second", "first"]);

    let ids: HashSet<_> = store.notes().iter().map(|n| n.id).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn create_empty_content_is_rejected_without_state_change() {
    let mut store = NoteStore::load(MemoryStorage::new());
    store.create("kept").unwrap();

    let err = store.create("").unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.len(), 1);
}

#[test]
fn create_whitespace_only_content_is_accepted() {
    // Emptiness is raw equality to "", no trimming.
    let mut store = NoteStore::load(MemoryStorage::new());
    store.create("   ").unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_present_id_removes_exactly_one() {
    let mut store = NoteStore::load(MemoryStorage::new());
    let keep = store.create("keep me").unwrap();
    let drop = store.create("drop me").unwrap();

    assert!(store.delete(drop.id).unwrap());
    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].id, keep.id);
}

#[test]
fn delete_absent_id_is_a_silent_noop() {
    let mut store = NoteStore::load(MemoryStorage::new());
    let note = store.create("only note").unwrap();
    store.delete(note.id).unwrap();

    assert!(!store.delete(note.id).unwrap());
    assert!(store.is_empty());
}

#[test]
fn search_empty_query_returns_full_sequence() {
    let mut store = NoteStore::load(MemoryStorage::new());
    store.create("Buy milk").unwrap();
    store.create("Walk dog").unwrap();

    let all = store.search("");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].content, "Walk dog");
    assert_eq!(all[1].content, "Buy milk");
}

#[test]
fn search_matches_case_insensitive_substring_only() {
    let mut store = NoteStore::load(MemoryStorage::new());
    store.create("Buy milk").unwrap();
    store.create("Walk dog").unwrap();

    let hits = store.search("MILK");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].content, "Buy milk");
    assert!(store.search("bicycle").is_empty());
}

#[test]
fn persist_and_reload_roundtrips_ids_content_and_timestamps() {
    let mut store = NoteStore::load(MemoryStorage::new());
    let newer = store.create("newer").unwrap();
    let older = store.create("even newer").unwrap();
    let expected: Vec<_> = store.notes().to_vec();

    let reloaded = NoteStore::load(store.into_storage());
    assert_eq!(reloaded.notes(), expected.as_slice());
    assert_eq!(reloaded.notes()[0].id, older.id);
    assert_eq!(reloaded.notes()[1].created_at, newer.created_at);
}

#[test]
fn failed_persist_rolls_back_the_create() {
    let mut store = NoteStore::load(BrokenStorage);

    let err = store.create("never lands").unwrap_err();
    assert!(matches!(err, StoreError::Storage(_)));
    // Memory must not drift ahead of the mirror.
    assert!(store.is_empty());
}

#[test]
fn malformed_persisted_state_loads_as_empty() {
    let mut storage = MemoryStorage::new();
    storage.set(NOTES_STORAGE_KEY, "{not json at all").unwrap();

    let store = NoteStore::load(storage);
    assert!(store.is_empty());
}

#[test]
fn persisted_layout_uses_external_field_names() {
    let mut store = NoteStore::load(MemoryStorage::new());
    store.create("Buy milk").unwrap();

    let storage = store.into_storage();
    let raw = storage.get(NOTES_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value.as_array().unwrap()[0];
    assert!(entry.get("identifier").is_some());
    assert!(entry.get("createdAt").is_some());
    assert_eq!(entry.get("content").unwrap(), "Buy milk");
}

#[test]
fn full_lifecycle_create_reject_delete_search() {
    let mut store = NoteStore::load(MemoryStorage::new());

    let milk = store.create("Buy milk").unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].content, "Buy milk");

    assert!(store.create("").is_err());
    assert_eq!(store.len(), 1);

    store.delete(milk.id).unwrap();
    assert!(store.is_empty());

    store.create("Buy milk").unwrap();
    store.create("Walk dog").unwrap();
    let hits = store.search("milk");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].content, "Buy milk");
}
