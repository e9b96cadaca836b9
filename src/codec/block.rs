//! Record blocks
//!
//! Encoding and decoding of a single record's lines.

use crate::config::DecodeMode;
use crate::error::{AqlError, Result};
use crate::record::Record;

/// Prefix of the line that opens a record block
pub const RECORD_MARKER: &str = "- id:";

/// Indent of every continuation line
const INDENT: &str = "  ";

const NAME_TAG: &str = "name:";
const AGE_TAG: &str = "age:";
const CITY_TAG: &str = "city:";

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record as a newline-terminated block
pub fn encode_record(record: &Record) -> String {
    let mut out = String::with_capacity(64 + record.name.len() + record.city.len());
    encode_record_into(record, &mut out);
    out
}

/// Append the encoded block to `out`
pub fn encode_record_into(record: &Record, out: &mut String) {
    out.push_str(&format!(
        "{RECORD_MARKER} {}\n{INDENT}{NAME_TAG} \"{}\"\n{INDENT}{AGE_TAG} {}\n{INDENT}{CITY_TAG} \"{}\"\n",
        record.id, record.name, record.age, record.city
    ));
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode the first record block found in `block`
///
/// Returns `Ok(None)` when there is no `- id:` line, or when the id is not
/// positive and `mode` is lenient.
pub fn decode_block(block: &str, mode: DecodeMode) -> Result<Option<Record>> {
    let mut decoder = BlockDecoder::new(mode);

    for (index, line) in block.lines().enumerate() {
        if line.starts_with(RECORD_MARKER) && decoder.is_open() {
            break;
        }
        decoder.feed(line, index + 1)?;
    }

    decoder.close()
}

/// Decode every record block in `body`, in order
///
/// `first_line` is the 1-based line number of `body`'s first line within the
/// file, used in error messages.
pub fn decode_records(body: &str, first_line: usize, mode: DecodeMode) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut decoder = BlockDecoder::new(mode);

    for (offset, line) in body.lines().enumerate() {
        if let Some(record) = decoder.feed(line, first_line + offset)? {
            records.push(record);
        }
    }

    if let Some(record) = decoder.close()? {
        records.push(record);
    }

    Ok(records)
}

/// Line-by-line decoder holding at most one open block
struct BlockDecoder {
    mode: DecodeMode,
    current: Option<OpenBlock>,
}

struct OpenBlock {
    record: Record,
    /// Line of the `- id:` marker
    line: usize,
}

impl BlockDecoder {
    fn new(mode: DecodeMode) -> Self {
        Self { mode, current: None }
    }

    fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Consume one line; returns the previous record when a new block starts
    fn feed(&mut self, line: &str, line_no: usize) -> Result<Option<Record>> {
        if let Some(rest) = line.strip_prefix(RECORD_MARKER) {
            let id = parse_int(rest, line_no, "id")?;
            let finished = self.close()?;
            self.current = Some(OpenBlock {
                record: Record {
                    id,
                    ..Record::default()
                },
                line: line_no,
            });
            return Ok(finished);
        }

        // Lines outside a block, and unknown continuation lines, are ignored
        let Some(open) = self.current.as_mut() else {
            return Ok(None);
        };
        let Some(field) = line.strip_prefix(INDENT) else {
            return Ok(None);
        };

        if let Some(value) = field.strip_prefix(NAME_TAG) {
            open.record.name = parse_text(value);
        } else if let Some(value) = field.strip_prefix(AGE_TAG) {
            open.record.age = parse_int(value, line_no, "age")?;
        } else if let Some(value) = field.strip_prefix(CITY_TAG) {
            open.record.city = parse_text(value);
        }

        Ok(None)
    }

    /// Finish the open block, applying the decode mode to invalid ids
    fn close(&mut self) -> Result<Option<Record>> {
        let Some(open) = self.current.take() else {
            return Ok(None);
        };

        if open.record.has_valid_id() {
            return Ok(Some(open.record));
        }

        match self.mode {
            DecodeMode::Strict => Err(AqlError::InvalidRecord {
                line: open.line,
                id: open.record.id,
            }),
            DecodeMode::Lenient => {
                tracing::warn!(
                    "Skipping record at line {} with non-positive id {}",
                    open.line,
                    open.record.id
                );
                Ok(None)
            }
        }
    }
}

// =============================================================================
// Field Helpers
// =============================================================================

fn parse_int(raw: &str, line: usize, field: &str) -> Result<i64> {
    let token = raw.trim();
    token.parse::<i64>().map_err(|e| AqlError::Format {
        line,
        message: format!("invalid {} '{}': {}", field, token, e),
    })
}

/// Trim and drop one pair of surrounding quotes
fn parse_text(raw: &str) -> String {
    let token = raw.trim();
    token
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(token)
        .to_string()
}
