//! Property list encoding of the tag list attribute.

use crate::tag::TagError;
use serde::{Deserialize, Serialize};

/// On-disk format used when writing the tag list.
///
/// Reading accepts either format regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlistFormat {
    /// Binary plist, the format Finder writes.
    #[default]
    Binary,
    Xml,
}

impl PlistFormat {
    /// Encode an ordered list of strings as a plist array.
    pub fn encode(self, items: &[String]) -> Result<Vec<u8>, TagError> {
        let mut buf = Vec::new();
        match self {
            Self::Binary => plist::to_writer_binary(&mut buf, &items)?,
            Self::Xml => plist::to_writer_xml(&mut buf, &items)?,
        }
        Ok(buf)
    }

    /// Decode a plist array of strings, binary or XML.
    pub fn decode(bytes: &[u8]) -> Result<Vec<String>, TagError> {
        Ok(plist::from_bytes(bytes)?)
    }
}

impl std::str::FromStr for PlistFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" => Ok(Self::Binary),
            "xml" => Ok(Self::Xml),
            _ => Err(format!("Invalid plist format: {s}")),
        }
    }
}
