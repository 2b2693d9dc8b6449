// Rust guideline compliant 2026-10-16

//! Key-value storage backends.
//!
//! The board is persisted as a single value under a single key. `FileStore`
//! keeps one JSON file per key inside a directory and replaces it atomically;
//! `MemoryStore` keeps values in process memory for tests and embedders.

use crate::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A string-to-string store where each write replaces a whole value.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Readers observe either the old or the new value, never a mix.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Directory-backed store holding one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding the value files.
    dir: PathBuf,
}

impl FileStore {
    /// Creates a new FileStore rooted at `dir`.
    ///
    /// The directory is not created; writes fail until it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { dir })
    }

    /// Returns the directory holding the value files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path that backs `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or contains path components.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn validate_key(key: &str) -> Result<()> {
        let bad_char = |c: char| c == '/' || c == '\\' || c.is_control();
        if key.is_empty() || key.starts_with('.') || key.contains(bad_char) {
            return Err(Error::InvalidKey(key.to_string()));
        }
        Ok(())
    }

    /// Executes a closure with an exclusive lock on the value file of `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock file cannot be created
    /// - Another process holds the lock
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, key: &str, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path_for(key)?.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file
            .try_lock_exclusive()
            .map_err(|e| Error::Lock(format!("{}: {}", lock_path.display(), e)))?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let path = self.path_for(key)?;
        self.with_lock(key, || {
            // Temp file in the same directory so the rename stays atomic
            let temp_path = path.with_extension("json.tmp");
            {
                let mut file = File::create(&temp_path)?;
                file.write_all(value.as_bytes())?;
                file.sync_all()?;
            }
            std::fs::rename(&temp_path, &path)?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.with_lock(key, || match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        })
    }
}

/// In-memory store, scoped to the owning value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
