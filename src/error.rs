//! Error types

/// Error type for grid construction and settings persistence.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The table was constructed without a usable settings key.
    ///
    /// The configured `id` doubles as the persistence key; a blank id would
    /// make every table share (and overwrite) the same saved layout.
    #[error("table id must be set for settings persistence")]
    MissingStoreKey,

    /// The settings backend failed to read or write a key.
    #[error("settings backend error: {message}")]
    Backend { message: String },

    /// The settings blob could not be serialized.
    #[error("settings serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GridError {
    /// Creates a new backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
