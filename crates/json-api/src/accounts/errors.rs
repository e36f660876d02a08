//! Errors

use tracing::error;

use shopfront_app::domain::accounts::AccountsServiceError;

use crate::errors::ApiError;

/// Map an accounts service error to a response.
///
/// `hashing_context` is the 500 message used when the password hash step fails.
pub(crate) fn into_api_error(
    error: AccountsServiceError,
    hashing_context: &'static str,
) -> ApiError {
    match error {
        AccountsServiceError::InvalidEmail => ApiError::bad_request("Invalid email format"),
        AccountsServiceError::EmptyPassword => ApiError::bad_request("Password cannot be empty"),
        AccountsServiceError::AlreadyExists => ApiError::bad_request("User already exists"),
        AccountsServiceError::NotFound => ApiError::bad_request("User not found"),
        AccountsServiceError::InvalidCredentials => ApiError::bad_request("Invalid credentials"),
        AccountsServiceError::Hashing(source) => {
            error!("{hashing_context}: {source}");

            ApiError::internal(hashing_context)
        }
        AccountsServiceError::Sql(source) => {
            error!("accounts storage error: {source}");

            ApiError::internal("Server error")
        }
    }
}
