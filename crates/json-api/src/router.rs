//! App Router

use salvo::{
    Router,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
};

use crate::{accounts, cart, healthcheck};

/// Every route the server answers, without state or middleware.
pub(crate) fn app_router() -> Router {
    Router::new()
        .get(healthcheck::root)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("create-cart-table").get(cart::create_table::handler))
        .push(
            Router::with_path("api")
                .push(Router::with_path("register").post(accounts::register::handler))
                .push(Router::with_path("login").post(accounts::login::handler))
                .push(
                    Router::with_path("cart")
                        .get(cart::index::handler)
                        .post(cart::create::handler)
                        .push(
                            Router::with_path("update-quantity")
                                .put(cart::update_quantity::handler),
                        )
                        .push(Router::with_path("{id}").delete(cart::delete::handler)),
                )
                .push(Router::with_path("checkout").post(cart::checkout::handler)),
        )
}

/// Permissive CORS: any origin, method, and header.
pub(crate) fn cors() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::domain::{
        accounts::MockAccountsService,
        cart::{MockCartService, data::NewCartItem, records::CheckoutRecord},
    };

    use crate::{
        cart::{checkout::CheckoutResponse, create::CartItemsAddedResponse},
        errors::{MessageResponse, json_catcher},
        test_helpers::{make_item, make_state},
    };

    use super::*;

    fn make_service(cart: MockCartService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(make_state(cart, MockAccountsService::new())))
                .push(app_router()),
        )
        .catcher(json_catcher())
        .hoop(cors())
    }

    #[tokio::test]
    async fn test_add_mug_then_checkout() -> TestResult {
        let mug = NewCartItem {
            name: "Mug".to_string(),
            price: Decimal::new(999, 2),
            quantity: 2,
            image: "mug.png".to_string(),
            description: "Ceramic mug".to_string(),
        };

        let mut cart = MockCartService::new();

        cart.expect_add_items()
            .once()
            .withf(move |items| *items == vec![mug.clone()])
            .return_once(|_| Ok(1));

        cart.expect_checkout().once().return_once(|| {
            Ok(CheckoutRecord::from_items(vec![make_item(
                1,
                "Mug",
                Decimal::new(999, 2),
                2,
            )]))
        });

        let service = make_service(cart);

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!([{
                "name": "Mug",
                "price": 9.99,
                "quantity": 2,
                "image": "mug.png",
                "description": "Ceramic mug"
            }]))
            .send(&service)
            .await;

        let added: CartItemsAddedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(added.affected_rows, 1);

        let checkout: CheckoutResponse = TestClient::post("http://example.com/api/checkout")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(checkout.total, Decimal::new(1998, 2));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_quantity_is_not_taken_as_an_id() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_remove_item().never();

        let mut res = TestClient::delete("http://example.com/api/cart/update-quantity")
            .send(&make_service(cart))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid request data");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/orders")
            .send(&make_service(MockCartService::new()))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_root_and_healthcheck_respond() -> TestResult {
        let service = make_service(MockCartService::new());

        let mut root = TestClient::get("http://example.com/").send(&service).await;

        assert_eq!(root.status_code, Some(StatusCode::OK));
        assert_eq!(root.take_string().await?, "Shopfront API is running");

        let health = TestClient::get("http://example.com/healthcheck")
            .send(&service)
            .await;

        assert_eq!(health.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let res = TestClient::get("http://example.com/healthcheck")
            .add_header("origin", "http://shop.example", true)
            .send(&make_service(MockCartService::new()))
            .await;

        assert!(
            res.headers().contains_key("access-control-allow-origin"),
            "cors header expected"
        );
    }
}
