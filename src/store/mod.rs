//! Store Module
//!
//! The file-backed storage engine.
//!
//! ## Responsibilities
//! - Create the store file with its header on first open
//! - Full-scan reads through the codec
//! - Append-only inserts with max + 1 id assignment
//! - Full rewrites for updates and deletes
//!
//! ## Id Assignment
//! `next_id = empty ? 1 : max(ids) + 1`. Ids are not gap-filled: deleting
//! the highest id frees it for the next add, deleting any other id leaves a
//! permanent gap.

mod person_store;
mod shared;

pub use person_store::{PersonStore, EMPTY_STORE_PLACEHOLDER};
pub use shared::SharedStore;
