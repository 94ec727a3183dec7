//! # Storage Layer
//!
//! This module defines the persistence abstraction for phonebook. The [`DataStore`]
//! trait only knows how to load the whole collection and how to persist it again;
//! everything that interprets entries lives above it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole collection lives in one JSON document (`phonebook.json` by default)
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail loads or saves, to exercise error paths
//!
//! ## Storage Format
//!
//! ```text
//! <home>/
//! ├── phonebook.json      # {"last_id": N, "entries": [...]}
//! └── config.json         # Optional configuration
//! ```

use crate::error::Result;
use crate::model::EntryCollection;

pub mod fs;
pub mod memory;

/// Abstract interface for entry persistence.
pub trait DataStore {
    /// Load every stored entry. A store that has never been written yields an empty collection.
    fn load(&self) -> Result<EntryCollection>;

    /// Persist the full collection, replacing whatever was stored before.
    fn save(&mut self, collection: &EntryCollection) -> Result<()>;
}
