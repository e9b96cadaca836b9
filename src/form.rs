//! Form handling
//!
//! Turns raw form input plus an explicit selection into store calls. The
//! selection is a plain `Option<Record>` owned by the caller: `None` means
//! "new record", `Some` means "editing this record".

use crate::error::{AqlError, Result};
use crate::record::{Record, RecordId};
use crate::store::PersonStore;

/// Raw text fields as typed by a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub age: String,
    pub city: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, age: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            city: city.into(),
        }
    }

    /// Fill the form from a selected record
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age.to_string(),
            city: record.city.clone(),
        }
    }
}

/// Build the record a save would write
///
/// Keeps the selection's id (0 when nothing is selected). An empty age
/// field means 0.
pub fn apply(selection: Option<&Record>, input: &FormInput) -> Result<Record> {
    let age = match input.age.trim() {
        "" => 0,
        token => token
            .parse::<i64>()
            .map_err(|e| AqlError::InvalidInput(format!("age '{}': {}", token, e)))?,
    };

    Ok(Record {
        id: selection.map(|r| r.id).unwrap_or(0),
        name: input.name.clone(),
        age,
        city: input.city.clone(),
    })
}

/// Add a new record or update the selected one
///
/// Returns the record as written, with its id. The caller is expected to
/// clear its selection afterwards.
pub fn save(store: &PersonStore, selection: Option<&Record>, input: &FormInput) -> Result<Record> {
    let mut record = apply(selection, input)?;

    match selection {
        None => {
            store.add(&mut record)?;
        }
        Some(selected) => {
            if !store.update(&record)? {
                tracing::warn!("Selected record {} no longer exists", selected.id);
            }
        }
    }

    Ok(record)
}

/// Delete the selected record
///
/// Returns the deleted id, or `None` when nothing is selected or the
/// selected record no longer exists.
pub fn delete_selected(store: &PersonStore, selection: Option<&Record>) -> Result<Option<RecordId>> {
    let Some(selected) = selection else {
        return Ok(None);
    };

    if !store.delete(selected.id)? {
        tracing::warn!("Selected record {} no longer exists", selected.id);
        return Ok(None);
    }
    Ok(Some(selected.id))
}
