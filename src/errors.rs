use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] deadpool_diesel::PoolError),

    #[error("Pool build error: {0}")]
    Build(#[from] deadpool::managed::BuildError<deadpool_diesel::Error>),

    #[error("Connection interaction failed: {0}")]
    Interact(String),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Draft seed error: {0}")]
    Seed(#[from] SeedError),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed seed file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("DATABASE_POOL_SIZE must be a positive integer, got {0:?}")]
    InvalidPoolSize(String),
}

impl StoreError {
    /// True when the database rejected the statement with a unique constraint.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Database(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _
            ))
        )
    }
}
