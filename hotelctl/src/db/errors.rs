use thiserror::Error;

/// Error type for database operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Catch-all for non-recoverable errors (pool timeouts, protocol errors, decode failures)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Lookups use `fetch_optional`/`fetch_all`, so a missing row is `Ok(None)` and never reaches here.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        DbError::Other(anyhow::Error::from(err))
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
