//! Integration tests for the Platform Store: built-ins, custom entries and
//! persistence of the custom subset through the preferences table.

use std::sync::Arc;

use rstest::rstest;
use streamhub::database::{preferences, Database};
use streamhub::managers::platform_store::{PlatformStore, PlatformStoreTrait, CUSTOM_PLATFORMS_KEY};
use streamhub::types::platform::{BUILT_IN_PLATFORMS, CUSTOM_ICON};
use tempfile::TempDir;

fn memory_db() -> Arc<Database> {
    Arc::new(Database::open_in_memory().expect("open_in_memory failed"))
}

#[test]
fn test_builtins_in_fixed_order() {
    let store = PlatformStore::load(memory_db());
    let names: Vec<&str> = store.list().iter().map(|p| p.name.as_str()).collect();
    let expected: Vec<&str> = BUILT_IN_PLATFORMS.iter().map(|(name, _, _)| *name).collect();
    assert_eq!(names, expected);
    assert_eq!(store.list()[0].url, "https://www.primevideo.com");
    assert_eq!(store.list()[6].name, "Airtel XStream");
}

#[rstest]
#[case("example.com", "https://example.com")]
#[case("http://example.com", "http://example.com")]
#[case("https://example.com/path", "https://example.com/path")]
#[case("not a url", "https://not a url")]
fn test_add_normalizes_url(#[case] input: &str, #[case] expected: &str) {
    let mut store = PlatformStore::load(memory_db());
    let entry = store.add("Test", input).unwrap();
    assert_eq!(entry.url, expected);
    assert_eq!(entry.icon, CUSTOM_ICON);
    assert!(entry.is_custom);
}

#[test]
fn test_add_appends_after_builtins() {
    let mut store = PlatformStore::load(memory_db());
    let a = store.add("A", "a.io").unwrap();
    let b = store.add("B", "b.io").unwrap();
    let list = store.list();
    assert_eq!(list.len(), 9);
    assert_eq!(list[7].id, a.id);
    assert_eq!(list[8].id, b.id);
}

#[test]
fn test_same_name_and_url_are_distinct_entries() {
    let mut store = PlatformStore::load(memory_db());
    let first = store.add("Twin", "twin.tv").unwrap();
    let second = store.add("Twin", "twin.tv").unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.custom_platforms().len(), 2);

    assert!(store.remove(&first.id).unwrap());
    let remaining = store.custom_platforms();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut store = PlatformStore::load(memory_db());
    store.add("A", "a.io").unwrap();
    assert!(!store.remove("does-not-exist").unwrap());
    assert_eq!(store.list().len(), 8);
}

#[test]
fn test_custom_entries_survive_reload() {
    let db = memory_db();
    let added = {
        let mut store = PlatformStore::load(db.clone());
        store.add("Crunchyroll", "crunchyroll.com").unwrap()
    };

    let store = PlatformStore::load(db);
    let custom = store.custom_platforms();
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].id, added.id);
    assert_eq!(custom[0].name, "Crunchyroll");
    assert_eq!(custom[0].url, "https://crunchyroll.com");
}

#[test]
fn test_builtins_never_persisted() {
    let db = memory_db();
    let mut store = PlatformStore::load(db.clone());
    store.add("Mine", "mine.tv").unwrap();

    let raw = preferences::get(db.connection(), CUSTOM_PLATFORMS_KEY)
        .unwrap()
        .expect("custom platforms should be written after add");
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Mine");
    assert_eq!(records[0]["isCustom"], true);
    assert_eq!(records[0]["icon"], "globe");
}

#[test]
fn test_removal_is_persisted() {
    let db = memory_db();
    let mut store = PlatformStore::load(db.clone());
    let entry = store.add("Gone", "gone.tv").unwrap();
    store.remove(&entry.id).unwrap();

    let reloaded = PlatformStore::load(db);
    assert!(reloaded.custom_platforms().is_empty());
    assert_eq!(reloaded.list().len(), 7);
}

#[rstest]
#[case("not json at all")]
#[case("{\"an\":\"object\"}")]
#[case("[{\"name\":\"missing url\"}]")]
fn test_corrupt_data_yields_builtins_only(#[case] raw: &str) {
    let db = memory_db();
    preferences::set(db.connection(), CUSTOM_PLATFORMS_KEY, raw).unwrap();
    let store = PlatformStore::load(db);
    assert_eq!(store.list().len(), 7);
    assert!(store.custom_platforms().is_empty());
}

#[test]
fn test_record_without_id_gets_one() {
    let db = memory_db();
    preferences::set(
        db.connection(),
        CUSTOM_PLATFORMS_KEY,
        r#"[{"name":"Legacy","url":"https://legacy.tv","icon":"globe","isCustom":true}]"#,
    )
    .unwrap();
    let store = PlatformStore::load(db);
    let custom = store.custom_platforms();
    assert_eq!(custom.len(), 1);
    assert!(!custom[0].id.is_empty());
}

#[test]
fn test_file_backed_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("streamhub.db");

    let added = {
        let db = Arc::new(Database::open(&path).unwrap());
        let mut store = PlatformStore::load(db);
        store.add("Mubi", "mubi.com").unwrap()
    };

    let db = Arc::new(Database::open(&path).unwrap());
    let store = PlatformStore::load(db);
    assert_eq!(store.get(&added.id).map(|p| p.url.as_str()), Some("https://mubi.com"));
}
