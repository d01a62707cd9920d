//! Tag list operations: list, add, remove, remove all.

use super::input::{normalize_all, TagInput};
use super::storage::{repair_encoded_tags, TagStore};
use super::types::{Tag, TagError};
use crate::attr::AttributeStore;
use std::iter;
use std::path::Path;
use tracing::info;

impl<S: AttributeStore> TagStore<S> {
    /// List the tags on `file` in stored order.
    ///
    /// Never fails: a file without tags, or a host without tagging, has none.
    #[must_use]
    pub fn list_tags(&self, file: &Path) -> Vec<Tag> {
        self.read_raw_tags(file)
            .into_iter()
            .map(|raw| Tag::from_encoded(&raw))
            .collect()
    }

    /// Add a single tag to `file`.
    pub fn add_tag(&self, file: &Path, tag: impl Into<TagInput>) -> Result<(), TagError> {
        self.add_tags(file, iter::once(tag.into()))
    }

    /// Add tags to `file`, skipping any whose encoded form is already present.
    ///
    /// Tags with the same name but different colors are distinct entries.
    pub fn add_tags<I>(&self, file: &Path, tags: I) -> Result<(), TagError>
    where
        I: IntoIterator,
        I::Item: Into<TagInput>,
    {
        let tags = normalize_all(tags)?;
        let mut raw_tags = repair_encoded_tags(&self.read_raw_tags(file));

        let mut added = 0_usize;
        for tag in &tags {
            let encoded = tag.to_encoded();
            if !raw_tags.contains(&encoded) {
                raw_tags.push(encoded);
                added = added.saturating_add(1);
            }
        }

        self.write_tags(file, &raw_tags)?;
        info!("Added {} tag(s) to {}", added, file.display());
        Ok(())
    }

    /// Remove a single tag from `file`.
    pub fn remove_tag(&self, file: &Path, tag: impl Into<TagInput>) -> Result<(), TagError> {
        self.remove_tags(file, iter::once(tag.into()))
    }

    /// Remove tags from `file`. Tags that are not present are ignored.
    ///
    /// Stored entries are compared in their repaired form, so `"A\nGRAY"`
    /// written by another tool matches the tag `A` with color code 1.
    pub fn remove_tags<I>(&self, file: &Path, tags: I) -> Result<(), TagError>
    where
        I: IntoIterator,
        I::Item: Into<TagInput>,
    {
        let tags = normalize_all(tags)?;
        let mut raw_tags = repair_encoded_tags(&self.read_raw_tags(file));

        let before = raw_tags.len();
        for tag in &tags {
            let encoded = tag.to_encoded();
            raw_tags.retain(|t| *t != encoded);
        }
        let removed = before.saturating_sub(raw_tags.len());

        self.write_tags(file, &raw_tags)?;
        info!("Removed {} tag(s) from {}", removed, file.display());
        Ok(())
    }

    /// Clear every tag on `file`.
    pub fn remove_all_tags(&self, file: &Path) -> Result<(), TagError> {
        self.write_tags(file, &[])?;
        info!("Removed all tags from {}", file.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "crud_tests.rs"]
mod crud_tests;
