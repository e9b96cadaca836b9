//! Record definitions
//!
//! The single entity kept by the store.

/// Identifier assigned by the store; valid ids are always positive
pub type RecordId = i64;

/// A person record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Unique id, assigned by `PersonStore::add`
    pub id: RecordId,

    pub name: String,

    pub age: i64,

    pub city: String,
}

impl Record {
    /// Create an unsaved record (id 0 until the store assigns one)
    pub fn new(name: impl Into<String>, age: i64, city: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            age,
            city: city.into(),
        }
    }

    /// Same record with an explicit id
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    /// Whether the id is one the store could have assigned
    pub fn has_valid_id(&self) -> bool {
        self.id > 0
    }
}
