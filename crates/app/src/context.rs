//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    database::{self, DatabaseSettings, Db},
    domain::{
        accounts::{AccountsService, AccountsServiceError, PgAccountsService},
        cart::{CartService, PgCartService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to prepare database schema")]
    Schema(#[source] AccountsServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub cart: Arc<dyn CartService>,
    pub accounts: Arc<dyn AccountsService>,
    pool: Option<PgPool>,
}

impl AppContext {
    /// Build a context around already constructed services.
    #[must_use]
    pub fn new(cart: Arc<dyn CartService>, accounts: Arc<dyn AccountsService>) -> Self {
        Self {
            cart,
            accounts,
            pool: None,
        }
    }

    /// Connect to the database, make sure the `users` table exists, and build services.
    ///
    /// The `cart` table is only created on request.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection or the schema bootstrap fails.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(settings)
            .await
            .map_err(AppInitError::Database)?;

        Self::from_pool(pool).await
    }

    /// Build services on top of an existing pool.
    ///
    /// # Errors
    ///
    /// Returns an error when the `users` table cannot be created.
    pub async fn from_pool(pool: PgPool) -> Result<Self, AppInitError> {
        let accounts = PgAccountsService::new(pool.clone());

        accounts
            .create_table()
            .await
            .map_err(AppInitError::Schema)?;

        Ok(Self {
            cart: Arc::new(PgCartService::new(Db::new(pool.clone()))),
            accounts: Arc::new(accounts),
            pool: Some(pool),
        })
    }

    /// Close the underlying pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
