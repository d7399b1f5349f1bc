use thiserror::Error;

/// Failures raised while reading the catalog from Postgres.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid {table} row {id}: {reason}")]
    InvalidRow {
        table: &'static str,
        id: uuid::Uuid,
        reason: String,
    },

    #[error("Catalog store unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    pub fn invalid_row(
        table: &'static str,
        id: uuid::Uuid,
        reason: impl std::fmt::Display,
    ) -> Self {
        CatalogError::InvalidRow {
            table,
            id,
            reason: reason.to_string(),
        }
    }
}
