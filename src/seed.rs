//! Test data generation
//!
//! Fills a store through repeated single-record `add` calls, so bulk loads
//! follow the same append-only path as everything else.

use rand::Rng;

use crate::error::Result;
use crate::record::{Record, RecordId};
use crate::store::PersonStore;

/// Youngest generated age (inclusive)
pub const MIN_AGE: i64 = 18;

/// Oldest generated age (exclusive)
pub const MAX_AGE: i64 = 60;

/// Number of distinct generated city names
pub const CITY_COUNT: u32 = 100;

/// Add `count` generated records and return their ids in order
///
/// Names follow `Person {id}` and cities `City {n}` with `n` in
/// `1..=CITY_COUNT`.
pub fn generate<R: Rng>(store: &PersonStore, count: usize, rng: &mut R) -> Result<Vec<RecordId>> {
    let start_id = store.next_id()?;
    let mut ids = Vec::with_capacity(count);

    for offset in 0..count {
        // Only compared against the assigned id; `add` reports exhaustion
        let expected = start_id.saturating_add(offset as RecordId);
        let mut record = Record::new(
            format!("Person {}", expected),
            rng.gen_range(MIN_AGE..MAX_AGE),
            format!("City {}", rng.gen_range(1..=CITY_COUNT)),
        );

        let id = store.add(&mut record)?;
        if id != expected {
            tracing::warn!("Generated record got id {} instead of {}", id, expected);
        }
        ids.push(id);
    }

    tracing::info!("Generated {} records", ids.len());
    Ok(ids)
}
