//! Accounts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::accounts::{data::NewUser, records::UserRecord};

const CREATE_USERS_TABLE_SQL: &str = include_str!("sql/create_users_table.sql");
const FIND_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_user_by_email.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAccountsRepository {
    pool: PgPool,
}

impl PgAccountsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_table(&self) -> Result<(), sqlx::Error> {
        query(CREATE_USERS_TABLE_SQL).execute(&self.pool).await?;

        Ok(())
    }

    pub(crate) async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn create_user(&self, user: NewUser) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(user.email)
            .bind(user.password_hash)
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
