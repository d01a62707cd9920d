//! Finder tag management.
//!
//! This module provides:
//! - The tag value model: [`Tag`], its [`Color`], and the inputs a caller may
//!   pass ([`ColorInput`], [`TagInput`])
//! - The [`TagStore`], which lists, adds and removes tags on files
//!
//! Tags are stored on each file as a plist array of `"name\ncode"` strings in
//! the `com.apple.metadata:_kMDItemUserTags` extended attribute.

mod color;
mod crud;
mod input;
mod storage;
mod types;

pub use color::{resolve_color, Color, ColorInput};
pub use input::{normalize_all, TagInput};
pub use storage::{repair_encoded_tags, TagStore};
pub use types::{Tag, TagError};
