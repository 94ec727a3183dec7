use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("An entry with phone number {0} already exists")]
    DuplicatePhone(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
