use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("Product with id {0} not found")]
    NotFound(i64),

    /// Connection, constraint or execution failure; carries the client-facing message
    #[error("{0}")]
    Storage(String),

    #[error("No fields to update for product with id {0}")]
    EmptyUpdate(i64),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Mapping for lookups and deletes: every failure is reported as 404.
    pub fn into_lookup_error(self) -> AppError {
        AppError::NotFound(self.to_string())
    }

    /// Mapping for adds and updates: every failure is reported as 422.
    pub fn into_write_error(self) -> AppError {
        AppError::UnprocessableEntity(self.to_string())
    }
}
