//! Caller-facing tag inputs and their normalization into [`Tag`] values.

use super::color::{resolve_color, ColorInput};
use super::types::{Tag, TagError};

/// Any of the shapes a caller may hand to the tag store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInput {
    /// An already built tag, passed through unchanged.
    Tag(Tag),
    /// A bare name or the two-line `"name\ncolor"` form.
    Encoded(String),
    /// `[name]` or `[name, color]`.
    Pair(Vec<String>),
}

impl TagInput {
    /// Turn the input into a [`Tag`].
    ///
    /// Only a pair with the wrong number of fields fails; unknown colors fall
    /// back to `NONE`.
    pub fn normalize(self) -> Result<Tag, TagError> {
        match self {
            Self::Tag(tag) => Ok(tag),
            Self::Encoded(encoded) => Ok(Tag::from_encoded(&encoded)),
            Self::Pair(fields) => Tag::from_pair(&fields),
        }
    }

    /// Parse a command-line argument of the form `NAME` or `NAME:COLOR`.
    ///
    /// The split happens at the last colon, so `a:b:red` is the name `a:b`.
    /// A suffix that is not a known color stays part of the name.
    #[must_use]
    pub fn parse_cli(arg: &str) -> Self {
        match arg.rsplit_once(':') {
            Some((name, color)) if resolve_color(&ColorInput::from_text(color)).is_ok() => {
                Self::Pair(vec![name.to_string(), color.to_string()])
            }
            _ => Self::Pair(vec![arg.to_string()]),
        }
    }
}

impl From<Tag> for TagInput {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl From<&str> for TagInput {
    fn from(encoded: &str) -> Self {
        Self::Encoded(encoded.to_string())
    }
}

impl From<String> for TagInput {
    fn from(encoded: String) -> Self {
        Self::Encoded(encoded)
    }
}

impl From<(&str, &str)> for TagInput {
    fn from((name, color): (&str, &str)) -> Self {
        Self::Pair(vec![name.to_string(), color.to_string()])
    }
}

impl From<Vec<String>> for TagInput {
    fn from(fields: Vec<String>) -> Self {
        Self::Pair(fields)
    }
}

/// Normalize a batch of inputs, stopping at the first malformed one.
pub fn normalize_all<I>(inputs: I) -> Result<Vec<Tag>, TagError>
where
    I: IntoIterator,
    I::Item: Into<TagInput>,
{
    inputs.into_iter().map(|i| i.into().normalize()).collect()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
