//! # Phonebook Architecture
//!
//! Phonebook is a **single-shot contact directory**: one process, one command, one pass
//! over the stored entries. The library holds everything that is not terminal I/O, and
//! the binary is a thin client that parses arguments and prints results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Validates argument shape, dispatches, prints output      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The record store: owns the collection for the process    │
//! │  - Loads once, persists after every mutation                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operations over an `EntryCollection`                │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait (load all / persist all)        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Every entry gets an integer id when it is inserted. The collection remembers the
//! highest id it ever handed out, so ids only grow and a deleted id is never reused.
//! The phone number is the external key: it is what `delete` takes, and inserting a
//! second entry with the same number is refused.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values and returns `Result<_>`.
//! It never writes to stdout/stderr and never exits the process. Diagnostics go
//! through the `log` facade; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The record store facade, generic over the storage backend
//! - [`commands`]: list, search, insert and delete over a collection
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Entry`, `EntryDraft`, `EntryCollection`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
