use crate::errors::AppResult;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Persistence port: string values stored under string keys.
///
/// The store logic depends on this trait only, so tests can swap the
/// file-backed implementation for an in-memory one.
pub trait KvBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// One `<key>.json` file per key under the data directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// HashMap backend for unit tests.
#[derive(Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
