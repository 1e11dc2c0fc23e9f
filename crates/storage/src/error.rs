use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid vote choice: {0}")]
    InvalidChoice(String),

    #[error("Vote store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Whether the error comes from the backing store rather than the caller's input.
    pub fn is_persistence_failure(&self) -> bool {
        !matches!(self, StorageError::InvalidChoice(_))
    }
}
