//! # AqlStore
//!
//! A small persistent record store with:
//! - A human-readable, line-oriented text file as the only storage
//! - Append-only inserts with monotonic (max + 1) id assignment
//! - Full-file rewrites for updates and deletes
//! - Strict or lenient decoding of hand-edited files
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Caller (CLI, form handling, seeding)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │              SharedStore (optional mutex)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     PersonStore                              │
//! │        get_all / add / update / delete / read_raw            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Codec    │          │ people.aql  │
//!   │ (per block) │          │ (flat file) │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! Single writer, single process. See [`store::SharedStore`] for in-process
//! serialization.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod codec;
pub mod store;
pub mod form;
pub mod export;
pub mod seed;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AqlError, Result};
pub use config::{Config, DecodeMode};
pub use record::{Record, RecordId};
pub use store::{PersonStore, SharedStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of AqlStore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
