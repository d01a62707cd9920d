//! Tag type definitions and error types.

use super::color::{resolve_color, Color, ColorInput};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;
use tracing::warn;

/// Tag-related errors
#[derive(Error, Debug)]
pub enum TagError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Plist error: {0}")]
    PlistError(#[from] plist::Error),

    #[error("Invalid color '{0}'. Valid colors are NONE, GRAY, GREEN, PURPLE, BLUE, YELLOW, RED, ORANGE or codes 0-7")]
    InvalidColor(String),

    #[error("Invalid tag input: {0}")]
    InvalidTagInput(String),
}

/// A Finder tag: a name plus one of the eight fixed colors.
///
/// Only the [`Color`] is stored, so the color name and color code can never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    name: String,
    color: Color,
}

impl Tag {
    /// Build a tag, falling back to [`Color::None`] when the color input does
    /// not match the color table.
    ///
    /// An unknown color is logged as a warning and never fails construction.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<ColorInput>) -> Self {
        let name = name.into();
        let input = color.into();
        let color = resolve_color(&input).unwrap_or_else(|e| {
            warn!(tag = %name, "{e}; using NONE");
            Color::None
        });
        Self { name, color }
    }

    /// Build a tag from an already resolved color.
    #[must_use]
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Parse the two-line `"name\ncolor"` form stored in the tag list.
    ///
    /// The color is always the last line, so a name may itself span lines.
    /// Text without a line separator is a bare name with color `NONE`.
    #[must_use]
    pub fn from_encoded(encoded: &str) -> Self {
        let encoded = encoded.trim_end_matches(['\r', '\n']);
        match encoded.rsplit_once('\n') {
            Some((name, color)) => {
                let name = name.strip_suffix('\r').unwrap_or(name);
                Self::new(name, ColorInput::from_text(color))
            }
            None => Self::with_color(encoded, Color::None),
        }
    }

    /// Build a tag from `[name]` or `[name, color]`.
    pub fn from_pair<S: AsRef<str>>(fields: &[S]) -> Result<Self, TagError> {
        match fields {
            [name] => Ok(Self::new(name.as_ref(), ColorInput::default())),
            [name, color] => Ok(Self::new(name.as_ref(), ColorInput::from_text(color.as_ref()))),
            other => Err(TagError::InvalidTagInput(format!(
                "expected a name or a name and a color, got {} fields",
                other.len()
            ))),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Upper-case color name, e.g. `"RED"`.
    #[must_use]
    pub fn color_name(&self) -> &'static str {
        self.color.name()
    }

    #[must_use]
    pub fn color_code(&self) -> u8 {
        self.color.code()
    }

    /// The `"name\ncode"` string persisted in the tag list attribute.
    #[must_use]
    pub fn to_encoded(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.name, self.color.code())
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tag", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("color", &self.color)?;
        state.serialize_field("colorCode", &self.color.code())?;
        state.end()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
