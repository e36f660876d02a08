//! Cart Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{cart::handlers::CartItemResponse, errors::ApiError, extensions::*, state::State};

/// Cart Index Handler
///
/// Returns every item in the cart, oldest first.
#[endpoint(tags("cart"), summary = "List Cart Items")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CartItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .cart
        .list_items()
        .await
        .or_500("Error fetching cart")?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
