//! Update Cart Item Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shopfront_app::domain::cart::{data::QuantityAction, records::CartItemId};

use crate::{cart::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Update Quantity Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateQuantityRequest {
    /// Item id, as a JSON integer or a string holding one
    #[serde(default)]
    #[salvo(schema(value_type = i64))]
    pub id: Value,

    /// Either `increment` or `decrement`
    #[serde(default)]
    pub action: String,
}

impl UpdateQuantityRequest {
    fn item_id(&self) -> Option<CartItemId> {
        match &self.id {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
        .map(CartItemId::new)
    }
}

/// Quantity Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuantityUpdatedResponse {
    /// Confirmation message
    pub message: String,

    /// Quantity after the update
    pub quantity: i32,
}

/// Update Cart Item Quantity Handler
///
/// Increments by one, or decrements by one without going below one.
#[endpoint(tags("cart"), summary = "Update Cart Item Quantity")]
#[tracing::instrument(
    name = "cart.update_quantity",
    skip(json, depot),
    fields(item_id = tracing::field::Empty, action = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<QuantityUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let id = request
        .item_id()
        .ok_or_else(|| ApiError::bad_request("Item id must be an integer"))?;

    let action = request
        .action
        .parse::<QuantityAction>()
        .map_err(|_unknown| ApiError::bad_request("Action must be increment or decrement"))?;

    let span = tracing::Span::current();

    span.record("item_id", id.into_inner());
    span.record("action", action.as_str());

    let quantity = state
        .app
        .cart
        .update_quantity(id, action)
        .await
        .map_err(|error| into_api_error(error, "Error updating quantity"))?;

    Ok(Json(QuantityUpdatedResponse {
        message: "Quantity updated".to_string(),
        quantity,
    }))
}
