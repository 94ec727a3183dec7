use crate::error::{PhonebookError, Result};
use serde::{Deserialize, Serialize};

pub type EntryId = u64;

/// A single contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
}

/// An entry as supplied by the user, before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub surname: String,
    pub phone_number: String,
}

impl EntryDraft {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            name: self.name,
            surname: self.surname,
            phone_number: self.phone_number,
        }
    }
}

/// Ordered entries plus the highest id ever assigned.
///
/// `last_id` survives deletes, which is what keeps ids from being reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCollection {
    #[serde(default)]
    last_id: EntryId,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from existing entries, e.g. a legacy file or a fixture.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let last_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        Self { last_id, entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_id(&self) -> EntryId {
        self.last_id
    }

    /// The id the next inserted entry will receive.
    ///
    /// Fails once `EntryId::MAX` has been handed out.
    pub fn next_id(&self) -> Result<EntryId> {
        let max_live = self.entries.iter().map(|e| e.id).max().unwrap_or(0);
        self.last_id
            .max(max_live)
            .checked_add(1)
            .ok_or_else(|| PhonebookError::Store("identifier space exhausted".to_string()))
    }

    pub fn find_by_phone(&self, phone_number: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.phone_number == phone_number)
    }

    pub(crate) fn position_by_phone(&self, phone_number: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.phone_number == phone_number)
    }

    /// Appends `entry`, bumping the high-water mark.
    pub(crate) fn push(&mut self, entry: Entry) {
        self.last_id = self.last_id.max(entry.id);
        self.entries.push(entry);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Entry {
        self.entries.remove(index)
    }
}
