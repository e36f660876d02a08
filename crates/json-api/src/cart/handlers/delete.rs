//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopfront_app::domain::cart::records::CartItemId;

use crate::{
    cart::errors::into_api_error,
    errors::{ApiError, MessageResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
#[endpoint(tags("cart"), summary = "Remove Cart Item")]
#[tracing::instrument(
    name = "cart.delete",
    skip(id, depot),
    fields(item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = CartItemId::new(id.into_inner());

    tracing::Span::current().record("item_id", id.into_inner());

    state
        .app
        .cart
        .remove_item(id)
        .await
        .map_err(|error| into_api_error(error, "Error removing item from cart"))?;

    tracing::info!(item_id = %id, "removed cart item");

    Ok(Json(MessageResponse::new("Item removed from cart")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::cart::{CartServiceError, MockCartService};

    use crate::test_helpers::cart_service;

    use super::*;

    fn make_service(cart: MockCartService) -> Service {
        cart_service(cart, Router::with_path("api/cart/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_item_success() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_remove_item()
            .once()
            .withf(|id| *id == CartItemId::new(7))
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete("http://example.com/api/cart/7")
            .send(&make_service(cart))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Item removed from cart");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_not_found_returns_404() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_remove_item()
            .once()
            .withf(|id| *id == CartItemId::new(99))
            .return_once(|_| Err(CartServiceError::NotFound));

        let mut res = TestClient::delete("http://example.com/api/cart/99")
            .send(&make_service(cart))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Item not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_non_integer_id_returns_400() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_remove_item().never();

        let mut res = TestClient::delete("http://example.com/api/cart/abc")
            .send(&make_service(cart))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid request data");

        Ok(())
    }
}
