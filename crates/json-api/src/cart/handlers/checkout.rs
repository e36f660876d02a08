//! Checkout Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    cart::{errors::into_api_error, handlers::CartItemResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// Confirmation message
    pub message: String,

    /// Items that were in the cart
    pub items: Vec<CartItemResponse>,

    /// Sum of price times quantity over `items`
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,
}

/// Checkout Handler
///
/// Empties the cart and reports what it held.
#[endpoint(tags("cart"), summary = "Checkout")]
#[tracing::instrument(
    name = "cart.checkout",
    skip(depot),
    fields(item_count = tracing::field::Empty, total = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CheckoutResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let checkout = state
        .app
        .cart
        .checkout()
        .await
        .map_err(|error| into_api_error(error, "Error during checkout"))?;

    let span = tracing::Span::current();

    span.record("item_count", checkout.items.len());
    span.record("total", tracing::field::display(checkout.total));

    Ok(Json(CheckoutResponse {
        message: "Checkout successful".to_string(),
        items: checkout.items.into_iter().map(Into::into).collect(),
        total: checkout.total,
    }))
}
