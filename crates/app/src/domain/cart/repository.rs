//! Cart Repository

use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::cart::{
    data::{NewCartItem, QuantityAction},
    records::{CartItemId, CartItemRecord},
};

const CREATE_CART_TABLE_SQL: &str = include_str!("sql/create_cart_table.sql");
const LIST_CART_ITEMS_SQL: &str = include_str!("sql/list_cart_items.sql");
const INSERT_CART_ITEMS_SQL: &str = include_str!("sql/insert_cart_items.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("sql/delete_cart_item.sql");
const INCREMENT_QUANTITY_SQL: &str = include_str!("sql/increment_cart_item_quantity.sql");
const DECREMENT_QUANTITY_SQL: &str = include_str!("sql/decrement_cart_item_quantity.sql");
const CLEAR_CART_SQL: &str = include_str!("sql/clear_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartRepository;

impl PgCartRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_table(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_CART_TABLE_SQL).execute(&mut **tx).await?;

        Ok(())
    }

    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(LIST_CART_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert every item with a single statement.
    pub(crate) async fn insert_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        items: Vec<NewCartItem>,
    ) -> Result<u64, sqlx::Error> {
        let mut names = Vec::with_capacity(items.len());
        let mut prices: Vec<Decimal> = Vec::with_capacity(items.len());
        let mut quantities: Vec<i32> = Vec::with_capacity(items.len());
        let mut images = Vec::with_capacity(items.len());
        let mut descriptions = Vec::with_capacity(items.len());

        for item in items {
            names.push(item.name);
            prices.push(item.price);
            quantities.push(item.quantity);
            images.push(item.image);
            descriptions.push(item.description);
        }

        let rows_affected = query(INSERT_CART_ITEMS_SQL)
            .bind(names)
            .bind(prices)
            .bind(quantities)
            .bind(images)
            .bind(descriptions)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: CartItemId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(id.into_inner())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Adjust the quantity in one statement, returning the new value.
    ///
    /// Returns `None` when no item has the given id.
    pub(crate) async fn update_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: CartItemId,
        action: QuantityAction,
    ) -> Result<Option<i32>, sqlx::Error> {
        let sql = match action {
            QuantityAction::Increment => INCREMENT_QUANTITY_SQL,
            QuantityAction::Decrement => DECREMENT_QUANTITY_SQL,
        };

        query_scalar::<Postgres, i32>(sql)
            .bind(id.into_inner())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Delete every item, returning the rows that were removed.
    pub(crate) async fn clear(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(CLEAR_CART_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CartItemId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            quantity: row.try_get("quantity")?,
            image: row.try_get("image")?,
            description: row.try_get("description")?,
        })
    }
}
