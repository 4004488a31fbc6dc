use thiserror::Error;

pub type Result<T> = std::result::Result<T, TableroError>;

#[derive(Debug, Error)]
pub enum TableroError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("{field} cannot exceed {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Malformed board document: {0}")]
    MalformedDocument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TableroError {
    /// True for rejected input (empty or oversize fields).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyField { .. } | Self::FieldTooLong { .. })
    }

    /// True for stale references to lists or cards that no longer exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::CardNotFound(_))
    }
}
