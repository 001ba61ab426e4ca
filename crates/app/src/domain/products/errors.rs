//! Products service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    /// The row was rejected by a catalog constraint, e.g. a rating above five.
    #[error("product violates a catalog constraint")]
    InvalidProduct,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let constraint_violation = error.as_database_error().is_some_and(|db| {
            matches!(
                db.kind(),
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation
            )
        });

        if constraint_violation {
            Self::InvalidProduct
        } else {
            Self::Sql(error)
        }
    }
}
