//! # API Facade
//!
//! [`PhonebookApi`] is the record store: the one object that owns the entry collection
//! for the lifetime of the process. The CLI builds exactly one, hands it to the
//! dispatcher, and every operation goes through it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** the collection from its [`DataStore`] on first use, and only once
//! - **Dispatches** to the pure operations in `commands/*.rs`
//! - **Persists** the collection after every successful mutation
//! - **Rolls back** the in-memory collection when persisting fails, so it never
//!   drifts from what the store last accepted
//!
//! It does no printing; every method returns `Result<CmdResult>` and the caller
//! decides what to show.
//!
//! ## Generic Over DataStore
//!
//! - Production: `PhonebookApi<FileStore>`
//! - Testing: `PhonebookApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::config::MatchMode;
use crate::error::Result;
use crate::model::{Entry, EntryCollection, EntryDraft};
use crate::store::DataStore;
use log::{info, warn};

pub struct PhonebookApi<S: DataStore> {
    store: S,
    collection: Option<EntryCollection>,
    match_mode: MatchMode,
}

impl<S: DataStore> PhonebookApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            collection: None,
            match_mode: MatchMode::default(),
        }
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// The full collection, in stored order.
    pub fn get_list(&mut self) -> Result<CmdResult> {
        let collection = loaded(&self.store, &mut self.collection)?;
        Ok(commands::list::run(collection))
    }

    /// First entry in `entries` whose name, surname or phone number matches `term`.
    pub fn search(&self, entries: &[Entry], term: &str) -> Result<CmdResult> {
        commands::search::run(entries, term, self.match_mode)
    }

    pub fn insert(&mut self, draft: EntryDraft) -> Result<CmdResult> {
        let collection = loaded(&self.store, &mut self.collection)?;
        let snapshot = collection.clone();

        let result = commands::insert::run(collection, draft)?;
        if let Err(err) = self.store.save(collection) {
            warn!("insert not persisted, rolling back: {}", err);
            *collection = snapshot;
            return Err(err);
        }

        if let Some(entry) = result.affected_entries.first() {
            info!("inserted entry id={} phone={}", entry.id, entry.phone_number);
        }
        Ok(result)
    }

    pub fn delete(&mut self, phone_number: &str) -> Result<CmdResult> {
        let collection = loaded(&self.store, &mut self.collection)?;
        let snapshot = collection.clone();

        let result = commands::delete::run(collection, phone_number)?;
        if let Err(err) = self.store.save(collection) {
            warn!("delete not persisted, rolling back: {}", err);
            *collection = snapshot;
            return Err(err);
        }

        info!("deleted entry phone={}", phone_number);
        Ok(result)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Loads the collection into `slot` the first time it is needed.
fn loaded<'a, S: DataStore>(
    store: &S,
    slot: &'a mut Option<EntryCollection>,
) -> Result<&'a mut EntryCollection> {
    let collection = match slot.take() {
        Some(collection) => collection,
        None => store.load()?,
    };
    Ok(slot.insert(collection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with(fixture: StoreFixture) -> PhonebookApi<InMemoryStore> {
        PhonebookApi::new(fixture.store)
    }

    #[test]
    fn get_list_returns_every_entry() {
        let mut api = api_with(StoreFixture::new().with_entries(3));
        let result = api.get_list().unwrap();
        assert_eq!(result.listed_entries.len(), 3);
    }

    #[test]
    fn loads_only_once_per_process() {
        let mut api = api_with(StoreFixture::new().with_entries(1));
        api.get_list().unwrap();
        api.insert(EntryDraft::new("A", "B", "555-7777")).unwrap();
        api.delete("555-0001").unwrap();
        api.get_list().unwrap();

        assert_eq!(api.store().load_count(), 1);
    }

    #[test]
    fn load_failure_surfaces_as_error() {
        let mut store = InMemoryStore::new();
        store.set_simulate_load_error(true);
        let mut api = PhonebookApi::new(store);

        let err = api.get_list().unwrap_err();
        assert_eq!(err.to_string(), "Store error: Simulated load failure");
        assert!(api.insert(EntryDraft::new("A", "B", "1")).is_err());
        assert!(api.delete("1").is_err());
    }

    #[test]
    fn loaded_collection_is_reused_after_mutations() {
        let mut api = api_with(StoreFixture::new().with_entries(1));
        api.insert(EntryDraft::new("A", "B", "555-7777")).unwrap();

        let listed = api.get_list().unwrap().listed_entries;
        assert_eq!(listed.len(), 2);
        assert_eq!(api.store().load_count(), 1);
    }

    #[test]
    fn insert_persists_the_new_entry() {
        let mut api = api_with(StoreFixture::new());
        let result = api
            .insert(EntryDraft::new("Alice", "Smith", "555-0100"))
            .unwrap();

        assert_eq!(result.affected_entries[0].id, 1);
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().collection().len(), 1);
    }

    #[test]
    fn write_failure_rolls_back_insert() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut api = PhonebookApi::new(store);

        let err = api
            .insert(EntryDraft::new("Alice", "Smith", "555-0100"))
            .unwrap_err();
        assert!(matches!(err, PhonebookError::Store(_)));

        let listed = api.get_list().unwrap().listed_entries;
        assert!(listed.is_empty());
    }

    #[test]
    fn write_failure_rolls_back_delete() {
        let mut fixture = StoreFixture::new().with_entries(2);
        fixture.store.set_simulate_write_error(true);
        let mut api = api_with(fixture);

        assert!(api.delete("555-0001").is_err());
        assert_eq!(api.get_list().unwrap().listed_entries.len(), 2);
    }

    #[test]
    fn rejected_insert_does_not_write() {
        let mut api = api_with(StoreFixture::new().with_entry("A", "B", "555-0100"));
        assert!(api.insert(EntryDraft::new("C", "D", "555-0100")).is_err());
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut api = api_with(StoreFixture::new());
        api.insert(EntryDraft::new("A", "A", "1")).unwrap();
        api.insert(EntryDraft::new("B", "B", "2")).unwrap();
        api.delete("2").unwrap();

        let result = api.insert(EntryDraft::new("C", "C", "3")).unwrap();
        assert_eq!(result.affected_entries[0].id, 3);
    }

    #[test]
    fn search_uses_configured_match_mode() {
        let mut api = api_with(StoreFixture::new().with_entry("Alice", "Smith", "555-0100"));
        let entries = api.get_list().unwrap().listed_entries;
        assert!(api.search(&entries, "alice").is_err());

        let api = api.with_match_mode(MatchMode::Contains);
        let result = api.search(&entries, "alice").unwrap();
        assert_eq!(result.listed_entries[0].phone_number, "555-0100");
    }

    #[test]
    fn inserted_entries_are_found_by_phone() {
        let mut api = api_with(StoreFixture::new().with_entries(2));
        api.insert(EntryDraft::new("Alice", "Smith", "555-0100"))
            .unwrap();

        let entries = api.get_list().unwrap().listed_entries;
        let found = api.search(&entries, "555-0100").unwrap();
        assert_eq!(found.listed_entries[0].name, "Alice");
        assert_eq!(found.listed_entries[0].id, 3);
    }
}
