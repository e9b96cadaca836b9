//! Codec Module
//!
//! Text encoding for the store file. Pure and stateless.
//!
//! ## Responsibilities
//! - Render and locate the fixed header block
//! - Encode a record as a multi-line block
//! - Decode record blocks back, in file order
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Header (3 lines, written once)          │
//! │   aql_version: 1.0                      │
//! │   entity: person                        │
//! │   ---                                   │
//! ├─────────────────────────────────────────┤
//! │ Record 1                                │
//! │   - id: 1                               │
//! │     name: "Alice"                       │
//! │     age: 30                             │
//! │     city: "Springfield"                 │
//! ├─────────────────────────────────────────┤
//! │ Record 2 ...                            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Text fields are quoted but never escaped: a `"` or newline inside
//! `name`/`city` produces an ambiguous file.

mod block;
mod header;

pub use block::{decode_block, decode_records, encode_record, encode_record_into, RECORD_MARKER};
pub use header::{split_header, Header, SplitHeader, FORMAT_VERSION, SEPARATOR};
