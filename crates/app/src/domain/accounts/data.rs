//! Account Data

use std::fmt::{Debug, Formatter, Result as FmtResult};

use email_address::EmailAddress;
use zeroize::Zeroizing;

use crate::domain::accounts::{errors::AccountsServiceError, records::UserUuid};

/// Longest address accepted, bounded by the `VARCHAR(255)` email column.
const MAX_EMAIL_LENGTH: usize = 254;

/// Email and plaintext password as submitted by a client.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Zeroizing<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Check the email is well formed and fits the column, and the password
    /// is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`AccountsServiceError::InvalidEmail`] or
    /// [`AccountsServiceError::EmptyPassword`].
    pub fn validate(&self) -> Result<(), AccountsServiceError> {
        let too_long = self.email.chars().count() > MAX_EMAIL_LENGTH;

        if too_long || !EmailAddress::is_valid(&self.email) {
            return Err(AccountsServiceError::InvalidEmail);
        }

        if self.password.is_empty() {
            return Err(AccountsServiceError::EmptyPassword);
        }

        Ok(())
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New User Data
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
    pub password_hash: String,
}
