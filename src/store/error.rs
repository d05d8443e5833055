use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached. Nothing was read or written.
    #[error("Cannot reach the backing store: {0}")]
    Connection(String),

    /// The data does not follow the canonical schema. The store was left untouched.
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
}

impl StoreError {
    pub fn connection(context: impl std::fmt::Display, err: impl std::fmt::Display) -> StoreError {
        StoreError::Connection(format!("{context}: {err}"))
    }

    pub fn schema(message: impl Into<String>) -> StoreError {
        StoreError::SchemaMismatch(message.into())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
