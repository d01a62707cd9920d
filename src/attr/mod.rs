//! Extended attribute access.
//!
//! The tag store only talks to files through [`AttributeStore`], so the real
//! filesystem ([`XattrStore`]) and the in-process [`MemoryStore`] are
//! interchangeable.

mod memory;
mod xattr_store;

pub use memory::MemoryStore;
pub use xattr_store::XattrStore;

use std::io;
use std::path::Path;

/// Attribute holding the Finder tag list.
pub const TAG_ATTRIBUTE: &str = "com.apple.metadata:_kMDItemUserTags";

/// Legacy Finder metadata that must be cleared before a new tag list is written.
pub const FINDER_INFO_ATTRIBUTE: &str = "com.apple.FinderInfo";

/// Key/value metadata attached to files.
pub trait AttributeStore {
    /// Read an attribute. `Ok(None)` means the attribute is not set.
    fn get(&self, file: &Path, key: &str) -> io::Result<Option<Vec<u8>>>;

    /// Set an attribute, replacing any previous value.
    fn set(&self, file: &Path, key: &str, value: &[u8]) -> io::Result<()>;

    fn remove(&self, file: &Path, key: &str) -> io::Result<()>;

    /// Names of all attributes currently set on the file.
    fn list_keys(&self, file: &Path) -> io::Result<Vec<String>>;
}

impl<T: AttributeStore + ?Sized> AttributeStore for &T {
    fn get(&self, file: &Path, key: &str) -> io::Result<Option<Vec<u8>>> {
        (**self).get(file, key)
    }

    fn set(&self, file: &Path, key: &str, value: &[u8]) -> io::Result<()> {
        (**self).set(file, key, value)
    }

    fn remove(&self, file: &Path, key: &str) -> io::Result<()> {
        (**self).remove(file, key)
    }

    fn list_keys(&self, file: &Path) -> io::Result<Vec<String>> {
        (**self).list_keys(file)
    }
}
