//! Cart service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::cart::{
        data::{NewCartItem, QuantityAction},
        errors::CartServiceError,
        records::{CartItemId, CartItemRecord, CheckoutRecord},
        repository::PgCartRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartService {
    db: Db,
    repository: PgCartRepository,
}

impl PgCartService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartRepository::new(),
        }
    }
}

#[async_trait]
impl CartService for PgCartService {
    async fn create_table(&self) -> Result<(), CartServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.create_table(&mut tx).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn list_items(&self) -> Result<Vec<CartItemRecord>, CartServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn add_items(&self, items: Vec<NewCartItem>) -> Result<u64, CartServiceError> {
        if items.is_empty() {
            return Err(CartServiceError::EmptyBatch);
        }

        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.insert_items(&mut tx, items).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }

    async fn remove_item(&self, id: CartItemId) -> Result<(), CartServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_item(&mut tx, id).await?;

        if rows_affected == 0 {
            return Err(CartServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn update_quantity(
        &self,
        id: CartItemId,
        action: QuantityAction,
    ) -> Result<i32, CartServiceError> {
        let mut tx = self.db.begin().await?;

        let quantity = self
            .repository
            .update_quantity(&mut tx, id, action)
            .await?
            .ok_or(CartServiceError::NotFound)?;

        tx.commit().await?;

        Ok(quantity)
    }

    async fn checkout(&self) -> Result<CheckoutRecord, CartServiceError> {
        let mut tx = self.db.begin().await?;

        let removed = self.repository.clear(&mut tx).await?;

        tx.commit().await?;

        Ok(CheckoutRecord::from_items(removed))
    }
}

#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Create the cart table if it is missing.
    async fn create_table(&self) -> Result<(), CartServiceError>;

    /// Every item currently in the cart, oldest first.
    async fn list_items(&self) -> Result<Vec<CartItemRecord>, CartServiceError>;

    /// Insert a validated batch atomically, returning the number of rows written.
    async fn add_items(&self, items: Vec<NewCartItem>) -> Result<u64, CartServiceError>;

    /// Delete a single item.
    async fn remove_item(&self, id: CartItemId) -> Result<(), CartServiceError>;

    /// Increment or decrement an item's quantity, never going below one.
    ///
    /// Incrementing past `i32::MAX` fails with
    /// [`CartServiceError::QuantityAtMaximum`] and leaves the row unchanged.
    async fn update_quantity(
        &self,
        id: CartItemId,
        action: QuantityAction,
    ) -> Result<i32, CartServiceError>;

    /// Empty the cart and report what was in it.
    async fn checkout(&self) -> Result<CheckoutRecord, CartServiceError>;
}
