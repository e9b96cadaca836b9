//! Person Store
//!
//! Owns the backing file and performs every read and write against it.
//!
//! ## Write Strategy
//! - `add` appends one block to the end of the file
//! - `update`/`delete` load everything and rewrite header + records into a
//!   temporary file, then rename it over the store file
//!
//! Record boundaries are only discoverable by scanning, so every operation
//! starts from a full read. Suitable for small record counts only.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::codec::{self, Header};
use crate::config::{Config, DecodeMode};
use crate::error::{AqlError, Result};
use crate::record::{Record, RecordId};

/// Returned by `read_raw` when the store file does not exist
pub const EMPTY_STORE_PLACEHOLDER: &str = "AQL store is empty. No records yet.";

/// File-backed store of person records
///
/// ## Concurrency
/// None. Every operation is an unsynchronized read-modify-write cycle;
/// wrap the store in a `SharedStore` (or another mutex) when several
/// threads use it.
pub struct PersonStore {
    config: Config,

    /// `{data_dir}/{file_name}`
    path: PathBuf,

    /// Header written into new files
    header: Header,
}

/// Everything loaded from the file by one full read
struct Contents {
    /// Header text to write back on rewrite
    header: String,
    records: Vec<Record>,
    ends_with_newline: bool,
    /// False when the file had no header separator (lenient mode only)
    has_header: bool,
}

impl PersonStore {
    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Validate config
    /// 2. Create the data directory if needed
    /// 3. Write the header if the file does not exist
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let path = config.store_path();
        let header = Header::new(config.entity.clone());
        Self::bootstrap_with(&path, &header, config.sync_writes)?;

        Ok(Self {
            config,
            path,
            header,
        })
    }

    /// Open a store file directly (convenience method)
    ///
    /// Uses default config with the data directory and file name taken from
    /// `path`.
    pub fn open_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                AqlError::Config(format!("not a file path: {}", path.display()))
            })?;
        let data_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let config = Config::builder()
            .data_dir(data_dir)
            .file_name(file_name)
            .build();
        Self::open(config)
    }

    /// Ensure the parent directory and a header-only file exist at `path`
    ///
    /// Idempotent. Returns `true` when the file was created by this call.
    pub fn bootstrap(path: &Path) -> Result<bool> {
        let header = Header::new(Config::default().entity);
        Self::bootstrap_with(path, &header, false)
    }

    fn bootstrap_with(path: &Path, header: &Header, sync: bool) -> Result<bool> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // create_new keeps an existing file untouched
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        file.write_all(header.render().as_bytes())?;
        if sync {
            file.sync_all()?;
        }

        tracing::info!("Created store file {}", path.display());
        Ok(true)
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// Read every record in file order
    ///
    /// Empty when the file is missing or holds only the header.
    pub fn get_all(&self) -> Result<Vec<Record>> {
        let records = self.load()?.map(|c| c.records).unwrap_or_default();
        tracing::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Find a record by id
    pub fn get(&self, id: RecordId) -> Result<Option<Record>> {
        Ok(self.get_all()?.into_iter().find(|r| r.id == id))
    }

    /// Number of records in the store
    pub fn count(&self) -> Result<usize> {
        Ok(self.get_all()?.len())
    }

    /// The id the next `add` will assign: 1 when empty, otherwise max + 1
    pub fn next_id(&self) -> Result<RecordId> {
        Self::next_id_for(&self.get_all()?)
    }

    /// Whole file contents, or a placeholder if the file does not exist
    pub fn read_raw(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Ok(EMPTY_STORE_PLACEHOLDER.to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Append a record, assigning it the next id
    ///
    /// Any id already on `record` is overwritten. Existing bytes in the file
    /// are never rewritten, unless the file has no header: then the whole
    /// file is rewritten with the canonical header in front.
    pub fn add(&self, record: &mut Record) -> Result<RecordId> {
        let mut contents = match self.load()? {
            Some(contents) => contents,
            None => {
                // File vanished after open; start it over with a header
                Self::bootstrap_with(&self.path, &self.header, self.config.sync_writes)?;
                Contents {
                    header: self.header.render(),
                    records: Vec::new(),
                    ends_with_newline: true,
                    has_header: true,
                }
            }
        };

        record.id = Self::next_id_for(&contents.records)?;

        if !contents.has_header {
            contents.records.push(record.clone());
            self.rewrite(&contents.header, &contents.records)?;
            tracing::debug!("Added record {} and restored header", record.id);
            return Ok(record.id);
        }

        let mut text = String::new();
        if !contents.ends_with_newline {
            text.push('\n');
        }
        codec::encode_record_into(record, &mut text);

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        self.finish_write(writer)?;

        tracing::debug!("Added record {} to {}", record.id, self.path.display());
        Ok(record.id)
    }

    /// Replace the record with the same id
    ///
    /// Returns `false` and leaves the file untouched when no record matches.
    pub fn update(&self, record: &Record) -> Result<bool> {
        let Some(mut contents) = self.load()? else {
            return Ok(false);
        };

        let Some(slot) = contents.records.iter_mut().find(|r| r.id == record.id) else {
            tracing::debug!("Update skipped: no record with id {}", record.id);
            return Ok(false);
        };
        *slot = record.clone();

        self.rewrite(&contents.header, &contents.records)?;
        tracing::debug!("Updated record {}", record.id);
        Ok(true)
    }

    /// Remove every record with `id`
    ///
    /// Returns `false` and leaves the file untouched when no record matches.
    pub fn delete(&self, id: RecordId) -> Result<bool> {
        let Some(mut contents) = self.load()? else {
            return Ok(false);
        };

        let before = contents.records.len();
        contents.records.retain(|r| r.id != id);
        if contents.records.len() == before {
            tracing::debug!("Delete skipped: no record with id {}", id);
            return Ok(false);
        }

        self.rewrite(&contents.header, &contents.records)?;
        tracing::debug!("Deleted record {}", id);
        Ok(true)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn next_id_for(records: &[Record]) -> Result<RecordId> {
        match records.iter().map(|r| r.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(AqlError::IdExhausted),
        }
    }

    /// Full read and decode; `None` when the file does not exist
    fn load(&self) -> Result<Option<Contents>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mode = self.config.decode_mode;
        let has_header;
        let (header, body, body_line) = match codec::split_header(&text) {
            Some(split) => {
                if mode == DecodeMode::Strict {
                    self.check_header(split.header)?;
                }
                has_header = true;
                (split.header.to_string(), split.body, split.body_line)
            }
            None if mode == DecodeMode::Strict => {
                return Err(AqlError::Header(format!(
                    "no '{}' separator in {}",
                    codec::SEPARATOR,
                    self.path.display()
                )));
            }
            None => {
                tracing::warn!(
                    "No header found in {}, scanning the whole file",
                    self.path.display()
                );
                has_header = false;
                (self.header.render(), text.as_str(), 1)
            }
        };

        let records = codec::decode_records(body, body_line, mode)?;

        Ok(Some(Contents {
            header,
            records,
            ends_with_newline: text.is_empty() || text.ends_with('\n'),
            has_header,
        }))
    }

    fn check_header(&self, text: &str) -> Result<()> {
        let found = Header::parse(text)?;
        if found.entity != self.header.entity {
            return Err(AqlError::Header(format!(
                "entity '{}' does not match expected '{}'",
                found.entity, self.header.entity
            )));
        }
        if found.version != self.header.version {
            return Err(AqlError::Header(format!(
                "unsupported format version '{}'",
                found.version
            )));
        }
        Ok(())
    }

    /// Write header + records to a temp file and rename it over the store
    fn rewrite(&self, header: &str, records: &[Record]) -> Result<()> {
        let mut text = String::with_capacity(header.len() + records.len() * 64);
        text.push_str(header);
        if !header.ends_with('\n') {
            text.push('\n');
        }
        for record in records {
            codec::encode_record_into(record, &mut text);
        }

        let tmp_path = self.tmp_path();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        self.finish_write(writer)?;

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Flush, and fsync when configured
    fn finish_write(&self, mut writer: BufWriter<File>) -> Result<()> {
        writer.flush()?;
        let file = writer
            .into_inner()
            .map_err(|e| AqlError::Io(e.into_error()))?;
        if self.config.sync_writes {
            file.sync_all()?;
        }
        Ok(())
    }

    /// "people.aql" → "people.aql.tmp"
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
