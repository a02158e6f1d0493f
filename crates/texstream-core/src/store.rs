use crate::error::{StoreError, StoreResult};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Named-blob persistence backend. Blobs are keyed by a bare name; the
/// backend decides how a name maps to actual storage.
pub trait BlobStore {
    fn read(&self, name: &str) -> StoreResult<String>;
    fn write(&self, name: &str, contents: &str) -> StoreResult<()>;
}

/// File-backed store: blob `name` lives at `<root>/<name>.json`.
pub struct DataDirStore {
    root: PathBuf,
}

impl DataDirStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root_dir(&self) -> &PathBuf {
        &self.root
    }

    pub fn blob_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl BlobStore for DataDirStore {
    fn read(&self, name: &str) -> StoreResult<String> {
        let path = self.blob_path(name);
        if !path.exists() {
            return Err(StoreError::NotFound { name: name.to_string() });
        }
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, name: &str, contents: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.blob_path(name), contents)?;
        Ok(())
    }
}

/// In-memory store for embedding hosts and tests. Tracks how many writes
/// have been issued so callers can assert on rewrite behavior.
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(name: &str, contents: &str) -> Self {
        let store = Self::new();
        store
            .blobs
            .lock()
            .unwrap()
            .insert(name.to_string(), contents.to_string());
        store
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, name: &str) -> StoreResult<String> {
        self.blobs
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { name: name.to_string() })
    }

    fn write(&self, name: &str, contents: &str) -> StoreResult<()> {
        let mut blobs = self.blobs.lock().unwrap();
        blobs.insert(name.to_string(), contents.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "texstream-store-{label}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn data_dir_store_round_trips() {
        let store = DataDirStore::new(scratch_dir("roundtrip"));
        store.write("texture_config", "{\"k\":1}").unwrap();
        assert_eq!(store.read("texture_config").unwrap(), "{\"k\":1}");
        let _ = fs::remove_dir_all(store.root_dir());
    }

    #[test]
    fn data_dir_store_reports_not_found() {
        let store = DataDirStore::new(scratch_dir("missing"));
        let err = store.read("texture_config").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn memory_store_counts_writes() {
        let store = MemoryStore::new();
        assert!(store.read("texture_config").unwrap_err().is_not_found());
        store.write("texture_config", "{}").unwrap();
        store.write("texture_config", "{}").unwrap();
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.read("texture_config").unwrap(), "{}");
    }
}
