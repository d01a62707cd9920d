//! In-process [`AttributeStore`] used for dry runs and tests.

use super::AttributeStore;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

type Attributes = BTreeMap<PathBuf, BTreeMap<String, Vec<u8>>>;

/// Attribute store that keeps everything in memory.
///
/// Files do not need to exist. A read-only store rejects every mutation with
/// [`io::ErrorKind::PermissionDenied`], which mimics a locked or read-only file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<Attributes>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the store read-only; existing attributes stay readable.
    #[must_use]
    pub fn into_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Attributes>> {
        self.files
            .lock()
            .map_err(|_| io::Error::other("memory attribute store lock poisoned"))
    }

    fn check_writable(&self, file: &Path) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", file.display()),
            ));
        }
        Ok(())
    }
}

impl AttributeStore for MemoryStore {
    fn get(&self, file: &Path, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self
            .lock()?
            .get(file)
            .and_then(|attrs| attrs.get(key))
            .cloned())
    }

    fn set(&self, file: &Path, key: &str, value: &[u8]) -> io::Result<()> {
        self.check_writable(file)?;
        self.lock()?
            .entry(file.to_path_buf())
            .or_default()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, file: &Path, key: &str) -> io::Result<()> {
        self.check_writable(file)?;
        let removed = self
            .lock()?
            .get_mut(file)
            .and_then(|attrs| attrs.remove(key));
        match removed {
            Some(_) => Ok(()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("attribute {key} not set on {}", file.display()),
            )),
        }
    }

    fn list_keys(&self, file: &Path) -> io::Result<Vec<String>> {
        Ok(self
            .lock()?
            .get(file)
            .map(|attrs| attrs.keys().cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
