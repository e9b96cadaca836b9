//! Header block
//!
//! The three-line preamble written once when a store file is created.

use crate::error::{AqlError, Result};

use super::RECORD_MARKER;

/// Format version written into new files
pub const FORMAT_VERSION: &str = "1.0";

/// Line that closes the header
pub const SEPARATOR: &str = "---";

const VERSION_TAG: &str = "aql_version:";
const ENTITY_TAG: &str = "entity:";

/// Parsed header tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: String,
    pub entity: String,
}

/// A store file cut at the end of its header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitHeader<'a> {
    /// Header text exactly as found, separator line included
    pub header: &'a str,

    /// Everything after the separator line
    pub body: &'a str,

    /// 1-based line number of the first body line
    pub body_line: usize,
}

impl Header {
    /// Header for the current format version
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            entity: entity.into(),
        }
    }

    /// Render the header block, terminated by a newline
    pub fn render(&self) -> String {
        format!(
            "{} {}\n{} {}\n{}\n",
            VERSION_TAG, self.version, ENTITY_TAG, self.entity, SEPARATOR
        )
    }

    /// Read the tags out of a header block
    pub fn parse(text: &str) -> Result<Self> {
        let mut version = None;
        let mut entity = None;

        for line in text.lines() {
            if let Some(rest) = line.strip_prefix(VERSION_TAG) {
                version = Some(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix(ENTITY_TAG) {
                entity = Some(rest.trim().to_string());
            }
        }

        match (version, entity) {
            (Some(version), Some(entity)) => Ok(Self { version, entity }),
            (None, _) => Err(AqlError::Header("missing aql_version tag".to_string())),
            (_, None) => Err(AqlError::Header("missing entity tag".to_string())),
        }
    }
}

/// Locate the header separator
///
/// Returns `None` when no `---` line appears before the first record marker.
pub fn split_header(text: &str) -> Option<SplitHeader<'_>> {
    let mut offset = 0;

    for (index, line) in text.split_inclusive('\n').enumerate() {
        let content = line.trim_end_matches(['\r', '\n']);

        if content.starts_with(RECORD_MARKER) {
            return None;
        }

        offset += line.len();

        if content == SEPARATOR {
            return Some(SplitHeader {
                header: &text[..offset],
                body: &text[offset..],
                body_line: index + 2,
            });
        }
    }

    None
}
