//! Accounts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::accounts::{
    data::{Credentials, NewUser},
    errors::AccountsServiceError,
    password::{hash_password_blocking, verify_password_blocking},
    records::{UserRecord, UserUuid},
    repository::PgAccountsRepository,
};

#[derive(Debug, Clone)]
pub struct PgAccountsService {
    repository: PgAccountsRepository,
}

impl PgAccountsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAccountsRepository::new(pool),
        }
    }
}

#[async_trait]
impl AccountsService for PgAccountsService {
    async fn create_table(&self) -> Result<(), AccountsServiceError> {
        self.repository.create_table().await?;

        Ok(())
    }

    async fn register(&self, credentials: Credentials) -> Result<UserRecord, AccountsServiceError> {
        credentials.validate()?;

        if self
            .repository
            .find_user_by_email(&credentials.email)
            .await?
            .is_some()
        {
            return Err(AccountsServiceError::AlreadyExists);
        }

        let password_hash = hash_password_blocking(credentials.password).await?;

        let user = self
            .repository
            .create_user(NewUser {
                uuid: UserUuid::generate(),
                email: credentials.email,
                password_hash,
            })
            .await?;

        debug!(user = %user.uuid, "registered user");

        Ok(user)
    }

    async fn login(&self, credentials: Credentials) -> Result<UserRecord, AccountsServiceError> {
        credentials.validate()?;

        let user = self
            .repository
            .find_user_by_email(&credentials.email)
            .await?
            .ok_or(AccountsServiceError::NotFound)?;

        let matches =
            verify_password_blocking(credentials.password, user.password_hash.clone()).await?;

        if !matches {
            return Err(AccountsServiceError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Create the users table if it is missing.
    async fn create_table(&self) -> Result<(), AccountsServiceError>;

    /// Register a new user, storing only a hash of the password.
    async fn register(&self, credentials: Credentials) -> Result<UserRecord, AccountsServiceError>;

    /// Check credentials against the stored hash.
    async fn login(&self, credentials: Credentials) -> Result<UserRecord, AccountsServiceError>;
}
