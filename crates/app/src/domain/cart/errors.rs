//! Cart service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartServiceError {
    #[error("cart item not found")]
    NotFound,

    #[error("no cart items supplied")]
    EmptyBatch,

    #[error("invalid cart item data")]
    InvalidItem,

    #[error("quantity is already at its maximum")]
    QuantityAtMaximum,

    #[error("storage error")]
    Sql(#[source] Error),
}

/// `numeric_value_out_of_range`, raised when an increment overflows `INTEGER`.
const NUMERIC_OUT_OF_RANGE: &str = "22003";

impl From<Error> for CartServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        if database_error.code().as_deref() == Some(NUMERIC_OUT_OF_RANGE) {
            return Self::QuantityAtMaximum;
        }

        match database_error.kind() {
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => Self::InvalidItem,
            _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            CartServiceError::from(Error::RowNotFound),
            CartServiceError::NotFound
        ));
    }

    #[test]
    fn pool_errors_map_to_sql() {
        assert!(matches!(
            CartServiceError::from(Error::PoolTimedOut),
            CartServiceError::Sql(Error::PoolTimedOut)
        ));
    }
}
