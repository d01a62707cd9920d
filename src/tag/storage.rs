//! Tag store and the raw read/write of the tag list attribute.

use super::types::{Tag, TagError};
use crate::attr::{AttributeStore, FINDER_INFO_ATTRIBUTE, TAG_ATTRIBUTE};
use crate::capability::Capability;
use crate::codec::PlistFormat;
use std::path::Path;
use tracing::{debug, warn};

/// Reads and writes Finder tags on files through an [`AttributeStore`].
#[derive(Debug)]
pub struct TagStore<S> {
    attributes: S,
    capability: Capability,
    format: PlistFormat,
}

impl<S: AttributeStore> TagStore<S> {
    #[must_use]
    pub fn new(attributes: S, capability: Capability) -> Self {
        Self {
            attributes,
            capability,
            format: PlistFormat::default(),
        }
    }

    /// Use `format` when writing tag lists.
    #[must_use]
    pub fn with_format(mut self, format: PlistFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn capability(&self) -> Capability {
        self.capability
    }

    #[must_use]
    pub fn attributes(&self) -> &S {
        &self.attributes
    }

    /// Read the encoded tag strings stored on `file`.
    ///
    /// Any failure (unsupported platform, missing file, absent attribute,
    /// undecodable list) yields an empty list.
    pub(super) fn read_raw_tags(&self, file: &Path) -> Vec<String> {
        if !self.capability.is_enabled() {
            return Vec::new();
        }

        let bytes = match self.attributes.get(file, TAG_ATTRIBUTE) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                debug!("Could not read tags of {}: {e}", file.display());
                return Vec::new();
            }
        };

        PlistFormat::decode(&bytes).unwrap_or_else(|e| {
            warn!("Ignoring undecodable tag list on {}: {e}", file.display());
            Vec::new()
        })
    }

    /// Replace the tag list on `file` with `raw_tags`.
    ///
    /// Clears the legacy Finder info first, then re-parses every entry so
    /// malformed stored entries are repaired, drops duplicates (first one
    /// wins) and writes the whole list.
    pub(super) fn write_tags(&self, file: &Path, raw_tags: &[String]) -> Result<(), TagError> {
        if !self.capability.is_enabled() {
            debug!("Tagging disabled; not writing tags to {}", file.display());
            return Ok(());
        }

        self.delete_finder_info(file)?;

        let encoded = repair_encoded_tags(raw_tags);
        let bytes = self.format.encode(&encoded)?;
        self.attributes.set(file, TAG_ATTRIBUTE, &bytes)?;

        debug!("Wrote {} tag(s) to {}", encoded.len(), file.display());
        Ok(())
    }

    fn delete_finder_info(&self, file: &Path) -> Result<(), TagError> {
        let keys = self.attributes.list_keys(file)?;
        if keys.iter().any(|k| k == FINDER_INFO_ATTRIBUTE) {
            self.attributes.remove(file, FINDER_INFO_ATTRIBUTE)?;
            debug!("Removed Finder info from {}", file.display());
        }
        Ok(())
    }
}

/// Round-trip each entry through [`Tag`] and drop repeated results.
#[must_use]
pub fn repair_encoded_tags(raw_tags: &[String]) -> Vec<String> {
    let mut repaired: Vec<String> = Vec::with_capacity(raw_tags.len());
    for raw in raw_tags {
        let encoded = Tag::from_encoded(raw).to_encoded();
        if !repaired.contains(&encoded) {
            repaired.push(encoded);
        }
    }
    repaired
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
