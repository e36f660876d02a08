//! Database connection management

use std::fmt::{Debug, Formatter, Result as FmtResult};

use clap::Args;
use sqlx::{
    PgPool, Postgres, Transaction,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// `PostgreSQL` connection settings.
#[derive(Clone, Args)]
pub struct DatabaseSettings {
    /// Database host
    #[arg(id = "db_host", long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    /// Database port
    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database user
    #[arg(id = "db_user", long = "db-user", env = "DB_USER")]
    pub user: String,

    /// Database password
    #[arg(
        id = "db_password",
        long = "db-password",
        env = "DB_PASSWORD",
        hide_env_values = true
    )]
    pub password: String,

    /// Database name
    #[arg(id = "db_name", long = "db-name", env = "DB_NAME")]
    pub name: String,

    /// Upper bound on pooled connections
    #[arg(
        id = "db_max_connections",
        long = "db-max-connections",
        env = "DB_MAX_CONNECTIONS",
        default_value_t = 5
    )]
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// Connection options derived from these settings.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl Debug for DatabaseSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Shared handle to the connection pool.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a transaction on a pooled connection.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or `BEGIN` fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(settings.connect_options())
        .await
}
