use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::{Entry, EntryCollection};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "phonebook.json";

/// On-disk shapes we accept. Older files are a bare array of entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBook {
    Collection(EntryCollection),
    Legacy(Vec<Entry>),
}

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(PhonebookError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<EntryCollection> {
        let data_path = self.data_path();
        if !data_path.exists() {
            debug!("no data file at {}, starting empty", data_path.display());
            return Ok(EntryCollection::new());
        }

        let content = fs::read_to_string(&data_path).map_err(PhonebookError::Io)?;
        let stored: StoredBook =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        let collection = match stored {
            StoredBook::Collection(collection) => collection,
            StoredBook::Legacy(entries) => EntryCollection::from_entries(entries),
        };
        debug!(
            "loaded {} entries from {}",
            collection.len(),
            data_path.display()
        );
        Ok(collection)
    }

    fn save(&mut self, collection: &EntryCollection) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let data_path = self.data_path();
        let content =
            serde_json::to_string_pretty(collection).map_err(PhonebookError::Serialization)?;

        // Atomic Write
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", self.data_file, std::process::id()));
        fs::write(&tmp_path, content).map_err(PhonebookError::Io)?;
        if let Err(err) = fs::rename(&tmp_path, &data_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PhonebookError::Io(err));
        }

        debug!(
            "saved {} entries to {}",
            collection.len(),
            data_path.display()
        );
        Ok(())
    }
}
