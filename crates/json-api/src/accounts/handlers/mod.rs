//! Account Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::accounts::data::Credentials;

pub(crate) mod login;
pub(crate) mod register;

/// Credentials Request
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CredentialsRequest {
    /// Account email address
    #[serde(default)]
    pub email: String,

    /// Plaintext password
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<CredentialsRequest> for Credentials {
    fn from(request: CredentialsRequest) -> Self {
        Credentials::new(request.email, request.password)
    }
}
