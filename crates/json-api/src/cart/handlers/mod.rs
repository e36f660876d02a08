//! Cart Handlers

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::cart::records::CartItemRecord;

pub(crate) mod checkout;
pub(crate) mod create;
pub(crate) mod create_table;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update_quantity;

/// Cart Item Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// Item id
    pub id: i64,

    /// Product name
    pub name: String,

    /// Unit price
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Number of units
    pub quantity: i32,

    /// Image URL or path
    pub image: String,

    /// Product description
    pub description: String,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        Self {
            id: item.id.into_inner(),
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            image: item.image,
            description: item.description,
        }
    }
}
