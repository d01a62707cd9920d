//! [`AttributeStore`] backed by the operating system's extended attributes.

use super::AttributeStore;
use std::io;
use std::path::Path;

/// Reads and writes real extended attributes through the `xattr` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct XattrStore;

impl XattrStore {
    /// Whether the `xattr` crate has a backend for this platform at all.
    #[must_use]
    pub fn platform_supported() -> bool {
        xattr::SUPPORTED_PLATFORM
    }
}

impl AttributeStore for XattrStore {
    fn get(&self, file: &Path, key: &str) -> io::Result<Option<Vec<u8>>> {
        xattr::get(file, key)
    }

    fn set(&self, file: &Path, key: &str, value: &[u8]) -> io::Result<()> {
        xattr::set(file, key, value)
    }

    fn remove(&self, file: &Path, key: &str) -> io::Result<()> {
        xattr::remove(file, key)
    }

    fn list_keys(&self, file: &Path) -> io::Result<Vec<String>> {
        Ok(xattr::list(file)?
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }
}
