//! Common test utilities

use std::path::{Path, PathBuf};
use taggit::{AttributeStore, PlistFormat, TAG_ATTRIBUTE};
use tempfile::TempDir;

/// Create a temporary directory for testing
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create an empty file inside `dir` and return its path
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"").expect("Failed to create test file");
    path
}

/// Store `tags` as the raw tag list of `file`, bypassing the tag store
#[allow(dead_code)] // Test utility for integration tests
pub fn seed_raw_tags(store: &impl AttributeStore, file: &Path, tags: &[&str]) {
    let tags: Vec<String> = tags.iter().map(|t| (*t).to_string()).collect();
    let bytes = PlistFormat::Binary
        .encode(&tags)
        .expect("Failed to encode tag list");
    store
        .set(file, TAG_ATTRIBUTE, &bytes)
        .expect("Failed to seed tag list");
}

/// Read the raw tag list of `file`, bypassing the tag store
#[allow(dead_code)] // Test utility for integration tests
pub fn read_raw_tags(store: &impl AttributeStore, file: &Path) -> Option<Vec<String>> {
    store
        .get(file, TAG_ATTRIBUTE)
        .expect("Failed to read tag list")
        .map(|bytes| PlistFormat::decode(&bytes).expect("Failed to decode tag list"))
}
