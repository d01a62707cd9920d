//! Finder tag colors and the color-input resolution shared by every tag constructor.

use super::types::TagError;
use serde::Serialize;

/// One of the eight fixed Finder tag colors.
///
/// The discriminant is the color code stored in the tag list attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    #[default]
    None,
    Gray,
    Green,
    Purple,
    Blue,
    Yellow,
    Red,
    Orange,
}

impl Color {
    /// Every color, ordered by code.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Gray,
        Self::Green,
        Self::Purple,
        Self::Blue,
        Self::Yellow,
        Self::Red,
        Self::Orange,
    ];

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Gray => 1,
            Self::Green => 2,
            Self::Purple => 3,
            Self::Blue => 4,
            Self::Yellow => 5,
            Self::Red => 6,
            Self::Orange => 7,
        }
    }

    /// Upper-case color name, e.g. `"BLUE"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Gray => "GRAY",
            Self::Green => "GREEN",
            Self::Purple => "PURPLE",
            Self::Blue => "BLUE",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
            Self::Orange => "ORANGE",
        }
    }

    /// Look up a color by code. Returns `None` for anything outside `0..=7`.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| i64::from(c.code()) == code)
    }

    /// Look up a color by name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.into_iter().find(|c| c.name() == upper)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw color supplied by a caller: either a color name or a numeric code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    Name(String),
    Code(i64),
}

impl ColorInput {
    /// Classify free text coming from a stored tag or the command line.
    ///
    /// Only a non-empty run of ASCII digits that fits an `i64` is treated as a
    /// code; signs, whitespace and anything else make it a name.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(code) = text.parse::<i64>() {
                return Self::Code(code);
            }
        }
        Self::Name(text.to_string())
    }
}

impl Default for ColorInput {
    fn default() -> Self {
        Self::Code(0)
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

impl From<i64> for ColorInput {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl From<u8> for ColorInput {
    fn from(code: u8) -> Self {
        Self::Code(i64::from(code))
    }
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        Self::Code(i64::from(color.code()))
    }
}

impl std::fmt::Display for ColorInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Code(code) => write!(f, "{code}"),
        }
    }
}

/// Resolve a color input against the fixed color table.
///
/// This is the only place a name or code is mapped to a [`Color`]; the tag's
/// color name and color code are both read off the result.
pub fn resolve_color(input: &ColorInput) -> Result<Color, TagError> {
    let resolved = match input {
        ColorInput::Code(code) => Color::from_code(*code),
        ColorInput::Name(name) => Color::from_name(name),
    };
    resolved.ok_or_else(|| TagError::InvalidColor(input.to_string()))
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod color_tests;
