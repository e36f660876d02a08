//! Errors

use tracing::error;

use shopfront_app::domain::cart::{CartServiceError, data::CartItemValidationError};

use crate::errors::ApiError;

/// Map a cart service error to a response; `context` is the 500 message.
pub(crate) fn into_api_error(error: CartServiceError, context: &'static str) -> ApiError {
    match error {
        CartServiceError::NotFound => ApiError::not_found("Item not found"),
        CartServiceError::EmptyBatch => ApiError::bad_request("At least one item is required"),
        CartServiceError::InvalidItem => ApiError::bad_request("All fields are required"),
        CartServiceError::QuantityAtMaximum => {
            ApiError::bad_request("Quantity cannot be increased any further")
        }
        CartServiceError::Sql(source) => {
            error!("{context}: {source}");

            ApiError::internal(context)
        }
    }
}

pub(crate) fn validation_error(error: CartItemValidationError) -> ApiError {
    ApiError::bad_request(error.to_string())
}
