use json_records::{Error, RecordStore};
use serde_json::json;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("json_records_test_{}.json", name))
}

fn fresh_store(name: &str) -> (RecordStore, std::path::PathBuf) {
    let path = temp_path(name);
    let _ = std::fs::remove_file(&path);
    (RecordStore::open(&path).unwrap(), path)
}

// ---- create -----------------------------------------------------------------

#[test]
fn create_assigns_first_id_on_empty_store() {
    let (store, path) = fresh_store("create_first");
    let ann = store.create(&json!({"name": "Ann", "age": 30})).unwrap();
    assert_eq!(ann.id, 1);
    assert_eq!(ann.name, "Ann");
    assert_eq!(ann.age(), Some(30));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn create_allocates_one_past_max() {
    let (store, path) = fresh_store("create_max");
    std::fs::write(&path, r#"[{"id": 7, "name": "Old"}, {"id": 3, "name": "Older"}]"#).unwrap();

    let rec = store.create(&json!({"name": "New"})).unwrap();
    assert_eq!(rec.id, 8);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn create_does_not_fill_gaps_below_max() {
    let (store, path) = fresh_store("create_gaps");
    for name in ["a", "b", "c"] {
        store.create(&json!({ "name": name })).unwrap();
    }
    store.delete(2).unwrap();

    let rec = store.create(&json!({"name": "d"})).unwrap();
    assert_eq!(rec.id, 4);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn create_without_age_leaves_it_absent() {
    let (store, path) = fresh_store("create_no_age");
    let bob = store.create(&json!({"name": "Bob"})).unwrap();
    assert_eq!(bob.age(), None);
    assert!(bob.extra.get("age").is_none());

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert!(raw[0].get("age").is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn create_keeps_null_age_verbatim() {
    let (store, path) = fresh_store("create_null_age");
    let rec = store.create(&json!({"name": "Bob", "age": null})).unwrap();
    assert_eq!(rec.age(), None);
    assert_eq!(store.get(rec.id).unwrap().extra["age"], json!(null));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn create_ignores_client_supplied_id() {
    let (store, path) = fresh_store("create_client_id");
    let rec = store.create(&json!({"id": 500, "name": "Sneaky"})).unwrap();
    assert_eq!(rec.id, 1);
    assert!(rec.extra.get("id").is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn create_preserves_extra_fields() {
    let (store, path) = fresh_store("create_extra");
    let rec = store
        .create(&json!({"name": "Ann", "email": "ann@example.com", "tags": ["a", "b"]}))
        .unwrap();
    assert_eq!(rec.extra["email"], json!("ann@example.com"));

    let stored = store.get(rec.id).unwrap();
    assert_eq!(stored.extra["tags"], json!(["a", "b"]));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn create_invalid_leaves_storage_untouched() {
    let (store, path) = fresh_store("create_invalid");
    store.create(&json!({"name": "Ann"})).unwrap();
    let before = std::fs::read(&path).unwrap();

    let err = store.create(&json!({"name": "", "age": 5})).unwrap_err();
    assert!(matches!(err, Error::Invalid(_)));
    assert_eq!(std::fs::read(&path).unwrap(), before);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn create_invalid_on_missing_file_creates_nothing() {
    let (store, path) = fresh_store("create_invalid_missing");
    assert!(store.create(&json!({"name": "Bob", "age": -1})).is_err());
    assert!(!path.exists());
}

// ---- get --------------------------------------------------------------------

#[test]
fn get_returns_created_record() {
    let (store, path) = fresh_store("get_roundtrip");
    let candidate = json!({"name": "Ann", "age": 30, "city": "Oslo"});
    let created = store.create(&candidate).unwrap();

    let fetched = store.get(created.id).unwrap();
    assert_eq!(fetched, created);

    let mut expected = candidate.clone();
    expected["id"] = json!(created.id);
    assert_eq!(serde_json::to_value(&fetched).unwrap(), expected);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn get_missing_is_not_found() {
    let (store, path) = fresh_store("get_missing");
    store.create(&json!({"name": "Ann"})).unwrap();
    assert_eq!(store.get(999).unwrap_err(), Error::NotFound(999));
    let _ = std::fs::remove_file(&path);
}

// ---- delete -----------------------------------------------------------------

#[test]
fn delete_returns_removed_id() {
    let (store, path) = fresh_store("delete_ok");
    let rec = store.create(&json!({"name": "ToDelete", "age": 10})).unwrap();
    assert_eq!(store.delete(rec.id).unwrap(), rec.id);
    assert_eq!(store.get(rec.id).unwrap_err(), Error::NotFound(rec.id));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn delete_missing_leaves_file_byte_identical() {
    let (store, path) = fresh_store("delete_missing");
    store.create(&json!({"name": "Ann"})).unwrap();
    let before = std::fs::read(&path).unwrap();

    assert_eq!(store.delete(999).unwrap_err(), Error::NotFound(999));
    assert_eq!(std::fs::read(&path).unwrap(), before);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn delete_removes_every_duplicate() {
    let (store, path) = fresh_store("delete_dupes");
    std::fs::write(
        &path,
        r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}, {"id": 1, "name": "c"}]"#,
    )
    .unwrap();

    store.delete(1).unwrap();
    let left = store.list().unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, 2);
    let _ = std::fs::remove_file(&path);
}

// ---- list -------------------------------------------------------------------

#[test]
fn list_empty_store() {
    let (store, path) = fresh_store("list_empty");
    assert!(store.list().unwrap().is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn list_keeps_insertion_order() {
    let (store, path) = fresh_store("list_order");
    for name in ["c", "a", "b"] {
        store.create(&json!({ "name": name })).unwrap();
    }
    let names: Vec<_> = store.list().unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
    let _ = std::fs::remove_file(&path);
}

// ---- full scenario ----------------------------------------------------------

#[test]
fn create_create_delete_scenario() {
    let (store, path) = fresh_store("scenario");

    let ann = store.create(&json!({"name": "Ann", "age": 30})).unwrap();
    assert_eq!(serde_json::to_value(&ann).unwrap(), json!({"id": 1, "name": "Ann", "age": 30}));

    let bo = store.create(&json!({"name": "Bo"})).unwrap();
    assert_eq!(bo.id, 2);

    assert_eq!(store.delete(1).unwrap(), 1);
    assert_eq!(store.get(1).unwrap_err(), Error::NotFound(1));

    let all = serde_json::to_value(store.list().unwrap()).unwrap();
    assert_eq!(all, json!([{"id": 2, "name": "Bo"}]));
    let _ = std::fs::remove_file(&path);
}

// ---- builder ----------------------------------------------------------------

#[test]
fn builder_pretty_by_default() {
    let (store, path) = fresh_store("builder_pretty");
    store.create(&json!({"name": "Ann"})).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains('\n'));
    assert!(raw.contains("  \"name\""));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn builder_compact_json() {
    let path = temp_path("builder_compact");
    let _ = std::fs::remove_file(&path);
    let store = RecordStore::builder(&path).pretty(false).build().unwrap();
    store.create(&json!({"name": "Ann"})).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains('\n'));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn builder_writes_unicode_unescaped() {
    let (store, path) = fresh_store("builder_unicode");
    store.create(&json!({"name": "Зоя"})).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("Зоя"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn builder_rejects_directory_path() {
    let err = RecordStore::open(std::env::temp_dir()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn builder_rejects_empty_path() {
    let err = RecordStore::open("").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn separate_handles_share_the_file() {
    let (store, path) = fresh_store("two_handles");
    store.create(&json!({"name": "Ann"})).unwrap();

    let other = RecordStore::open(&path).unwrap();
    assert_eq!(other.get(1).unwrap().name, "Ann");
    assert_eq!(other.path(), path.as_path());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn debug_impls_dont_panic() {
    let path = temp_path("debug");
    let store = RecordStore::open(&path).unwrap();
    let dbg = format!("{:?}", store);
    assert!(dbg.contains("RecordStore"));
    assert!(dbg.contains("path"));

    let dbg_builder = format!("{:?}", RecordStore::builder(&path));
    assert!(dbg_builder.contains("RecordStoreBuilder"));
    let _ = std::fs::remove_file(&path);
}
