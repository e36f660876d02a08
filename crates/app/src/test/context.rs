//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        accounts::{AccountsService, PgAccountsService},
        cart::{CartService, PgCartService},
    },
};

use super::db::TestDb;

/// Services wired to a fresh database with both tables created.
pub(crate) struct TestContext {
    pub cart: PgCartService,
    pub accounts: PgAccountsService,

    // Held so the database outlives the services using it.
    _db: TestDb,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let db = TestDb::new().await;

        let cart = PgCartService::new(Db::new(db.pool().clone()));
        let accounts = PgAccountsService::new(db.pool().clone());

        cart.create_table()
            .await
            .expect("Failed to create cart table");

        accounts
            .create_table()
            .await
            .expect("Failed to create users table");

        Self {
            cart,
            accounts,
            _db: db,
        }
    }
}
