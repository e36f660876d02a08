//! Create Cart Table Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, state::State};

/// Create the cart table if it does not exist yet.
///
/// Responds with plain text on success and a JSON message on failure.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<&'static str, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .cart
        .create_table()
        .await
        .or_500("Error creating cart table")?;

    tracing::info!("cart table ready");

    Ok("Cart table created!")
}
