//! Shared Store
//!
//! A `PersonStore` behind a mutex, for callers that use one store from
//! several threads in the same process.

use parking_lot::Mutex;

use crate::error::Result;
use crate::record::{Record, RecordId};

use super::PersonStore;

/// Serializes every operation on the wrapped store
///
/// Each method holds the lock for one full read-modify-write cycle. Use
/// `with` to run several operations as one critical section.
pub struct SharedStore {
    inner: Mutex<PersonStore>,
}

impl SharedStore {
    pub fn new(store: PersonStore) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    /// Run `f` with exclusive access to the store
    pub fn with<T>(&self, f: impl FnOnce(&PersonStore) -> T) -> T {
        let store = self.inner.lock();
        f(&store)
    }

    pub fn get_all(&self) -> Result<Vec<Record>> {
        self.inner.lock().get_all()
    }

    pub fn get(&self, id: RecordId) -> Result<Option<Record>> {
        self.inner.lock().get(id)
    }

    pub fn add(&self, record: &mut Record) -> Result<RecordId> {
        self.inner.lock().add(record)
    }

    pub fn update(&self, record: &Record) -> Result<bool> {
        self.inner.lock().update(record)
    }

    pub fn delete(&self, id: RecordId) -> Result<bool> {
        self.inner.lock().delete(id)
    }

    pub fn read_raw(&self) -> Result<String> {
        self.inner.lock().read_raw()
    }

    /// Unwrap the store
    pub fn into_inner(self) -> PersonStore {
        self.inner.into_inner()
    }
}
