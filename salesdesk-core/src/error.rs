use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesError {
    /// A referenced row does not exist. The message is client-facing.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule was violated (duplicate customer email).
    #[error("{0}")]
    Conflict(String),

    /// The request payload failed validation.
    #[error("{0}")]
    Validation(String),

    /// The operation would break a reference held by another row.
    #[error("{0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SalesError {
    pub fn not_found(message: impl Into<String>) -> Self {
        SalesError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        SalesError::Conflict(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        SalesError::Validation(message.into())
    }

    /// True for errors caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SalesError::NotFound(_)
                | SalesError::Conflict(_)
                | SalesError::Validation(_)
                | SalesError::Integrity(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SalesError>;
