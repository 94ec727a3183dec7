use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::EntryCollection;
use std::cell::Cell;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses a `Cell` to count loads, since `DataStore::load` takes `&self`.
#[derive(Default)]
pub struct InMemoryStore {
    collection: EntryCollection,
    fail_load: bool,
    fail_save: bool,
    loads: Cell<usize>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: EntryCollection) -> Self {
        Self {
            collection,
            ..Self::default()
        }
    }

    /// Make every subsequent `load` fail, as an unreadable backing file would.
    pub fn set_simulate_load_error(&mut self, simulate: bool) {
        self.fail_load = simulate;
    }

    /// Make every subsequent `save` fail, as a full disk would.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.fail_save = simulate;
    }

    /// What a fresh load would return right now.
    pub fn collection(&self) -> &EntryCollection {
        &self.collection
    }

    /// Number of load attempts so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<EntryCollection> {
        self.loads.set(self.loads.get() + 1);
        if self.fail_load {
            return Err(PhonebookError::Store(
                "Simulated load failure".to_string(),
            ));
        }
        Ok(self.collection.clone())
    }

    fn save(&mut self, collection: &EntryCollection) -> Result<()> {
        if self.fail_save {
            return Err(PhonebookError::Store(
                "Simulated write failure".to_string(),
            ));
        }
        self.collection = collection.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{EntryDraft, EntryId};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` entries named `ContactN SurnameN` with phone numbers `555-000N`.
        pub fn with_entries(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = i + 1;
                self = self.with_entry(
                    &format!("Contact{}", n),
                    &format!("Surname{}", n),
                    &format!("555-{:04}", n),
                );
            }
            self
        }

        pub fn with_entry(mut self, name: &str, surname: &str, phone: &str) -> Self {
            let id = self.store.collection.next_id().unwrap();
            self.push(EntryDraft::new(name, surname, phone), id);
            self
        }

        /// Adds an entry with an explicit id, e.g. to model gaps left by deletes.
        pub fn with_entry_id(
            mut self,
            id: EntryId,
            name: &str,
            surname: &str,
            phone: &str,
        ) -> Self {
            self.push(EntryDraft::new(name, surname, phone), id);
            self
        }

        fn push(&mut self, draft: EntryDraft, id: EntryId) {
            self.store.collection.push(draft.into_entry(id));
        }
    }
}
