use super::*;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("quota".into()))
    }
}

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), Ok(None));
}

#[test]
fn memory_store_overwrites_values() {
    let mut store = MemoryStore::with("theme", "light");
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
}

#[test]
fn memory_store_keys_are_independent() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("other"), Ok(None));
}

#[test]
fn storage_errors_render_readable_messages() {
    let store = BrokenStore;
    let err = store.get("theme").unwrap_err();
    assert_eq!(err.to_string(), "preference storage unavailable");

    let mut store = BrokenStore;
    let err = store.set("theme", "dark").unwrap_err();
    assert_eq!(err.to_string(), "preference storage rejected operation: quota");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn default_store_is_in_memory_off_browser() {
    let mut store = default_store();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
}
