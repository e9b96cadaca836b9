//! Single-record export
//!
//! Writes one record's block to `{entity}_{id}.aql` so it can be shared or
//! inspected on its own.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::Result;
use crate::record::Record;

/// File name used for an exported record
pub fn export_file_name(entity: &str, record: &Record) -> String {
    format!("{}_{}.aql", entity, record.id)
}

/// Write the encoded block into `dir`, replacing any earlier export
pub fn export_record(record: &Record, entity: &str, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(export_file_name(entity, record));
    fs::write(&path, codec::encode_record(record))?;

    tracing::debug!("Exported record {} to {}", record.id, path.display());
    Ok(path)
}
