//! Add Cart Items Handler

use std::{str::FromStr, sync::Arc};

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Number;

use shopfront_app::domain::cart::data::{CartItemDraft, validate_batch};

use crate::{
    cart::errors::{into_api_error, validation_error},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Cart Item Request
///
/// Every field is required; they are optional here so a missing one yields a
/// descriptive 400 rather than a parse failure. `price` and `quantity` also
/// accept numeric strings, and an empty string counts as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemRequest {
    /// Product name
    pub name: Option<String>,

    /// Unit price, greater than zero with at most two decimal places
    #[serde(default, deserialize_with = "deserialize_price")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    /// Number of units, at least one
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub quantity: Option<i32>,

    /// Image URL or path
    pub image: Option<String>,

    /// Product description
    pub description: Option<String>,
}

impl From<CartItemRequest> for CartItemDraft {
    fn from(request: CartItemRequest) -> Self {
        CartItemDraft {
            name: request.name,
            price: request.price,
            quantity: request.quantity,
            image: request.image,
            description: request.description,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(Number),
    Text(String),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(number)) => number.to_string(),
        Some(NumberOrText::Text(text)) => text.trim().to_string(),
    };

    if text.is_empty() {
        return Ok(None);
    }

    Decimal::from_str(&text)
        .or_else(|_not_plain| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|_parse_error| D::Error::custom(format!("price is not a number: {text}")))
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(number)) => number
            .as_i64()
            .and_then(|quantity| i32::try_from(quantity).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("quantity is not an integer: {number}"))),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_parse_error| D::Error::custom(format!("quantity is not an integer: {text}"))),
    }
}

/// Cart Items Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemsAddedResponse {
    /// Confirmation message
    pub message: String,

    /// Number of rows inserted
    pub affected_rows: u64,
}

/// Add Cart Items Handler
///
/// Inserts the whole batch or nothing.
#[endpoint(
    tags("cart"),
    summary = "Add Cart Items",
    responses(
        (status_code = StatusCode::CREATED, description = "Items added"),
    ),
)]
#[tracing::instrument(
    name = "cart.create",
    skip(json, depot, res),
    fields(item_count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<Vec<CartItemRequest>>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemsAddedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let requests = json.into_inner();

    tracing::Span::current().record("item_count", requests.len());

    let items = validate_batch(requests.into_iter().map(CartItemDraft::from))
        .map_err(validation_error)?;

    let affected_rows = state
        .app
        .cart
        .add_items(items)
        .await
        .map_err(|error| into_api_error(error, "Error inserting into cart"))?;

    tracing::info!(affected_rows, "added cart items");

    res.status_code(StatusCode::CREATED);

    Ok(Json(CartItemsAddedResponse {
        message: "Items added successfully".to_string(),
        affected_rows,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::domain::cart::{CartServiceError, MockCartService, data::NewCartItem};

    use crate::{errors::MessageResponse, test_helpers::cart_service};

    use super::*;

    fn make_service(cart: MockCartService) -> Service {
        cart_service(cart, Router::with_path("api/cart").post(handler))
    }

    fn mug() -> serde_json::Value {
        json!({
            "name": "Mug",
            "price": 9.99,
            "quantity": 2,
            "image": "mug.png",
            "description": "Ceramic mug"
        })
    }

    async fn assert_rejected(body: serde_json::Value, message: &str) -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_add_items().never();

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&body)
            .send(&make_service(cart))
            .await;

        let response: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(response.message, message);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_items_success() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_add_items()
            .once()
            .withf(|items| {
                *items
                    == vec![NewCartItem {
                        name: "Mug".to_string(),
                        price: Decimal::new(999, 2),
                        quantity: 2,
                        image: "mug.png".to_string(),
                        description: "Ceramic mug".to_string(),
                    }]
            })
            .return_once(|_| Ok(1));

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!([mug()]))
            .send(&make_service(cart))
            .await;

        let body: CartItemsAddedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.message, "Items added successfully");
        assert_eq!(body.affected_rows, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_items_missing_field_returns_400() -> TestResult {
        let mut incomplete = mug();

        if let Some(object) = incomplete.as_object_mut() {
            object.remove("image");
        }

        assert_rejected(json!([mug(), incomplete]), "All fields are required").await
    }

    #[tokio::test]
    async fn test_create_items_zero_price_returns_400() -> TestResult {
        let mut free = mug();

        free["price"] = json!(0);

        assert_rejected(json!([free]), "All fields are required").await
    }

    #[tokio::test]
    async fn test_create_items_zero_quantity_returns_400() -> TestResult {
        let mut none = mug();

        none["quantity"] = json!(0);

        assert_rejected(json!([none]), "All fields are required").await
    }

    #[tokio::test]
    async fn test_create_items_empty_name_returns_400() -> TestResult {
        let mut unnamed = mug();

        unnamed["name"] = json!("");

        assert_rejected(json!([unnamed]), "All fields are required").await
    }

    #[tokio::test]
    async fn test_create_items_negative_quantity_returns_400() -> TestResult {
        let mut negative = mug();

        negative["quantity"] = json!(-1);

        assert_rejected(json!([negative]), "Quantity must be at least 1").await
    }

    #[tokio::test]
    async fn test_create_items_accepts_numeric_strings() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_add_items()
            .once()
            .withf(|items| {
                items.len() == 1
                    && items[0].price == Decimal::new(999, 2)
                    && items[0].quantity == 2
            })
            .return_once(|_| Ok(1));

        let mut item = mug();

        item["price"] = json!("9.99");
        item["quantity"] = json!("2");

        let res = TestClient::post("http://example.com/api/cart")
            .json(&json!([item]))
            .send(&make_service(cart))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_items_empty_string_quantity_returns_400() -> TestResult {
        let mut blank = mug();

        blank["quantity"] = json!("");

        assert_rejected(json!([blank]), "All fields are required").await
    }

    #[tokio::test]
    async fn test_create_items_unparsable_quantity_returns_json_400() -> TestResult {
        let mut unreadable = mug();

        unreadable["quantity"] = json!("two");

        assert_rejected(json!([unreadable]), "Invalid request data").await
    }

    #[tokio::test]
    async fn test_create_items_non_array_body_returns_json_400() -> TestResult {
        assert_rejected(json!({ "name": "Mug" }), "Invalid request data").await
    }

    #[tokio::test]
    async fn test_create_items_empty_batch_returns_400() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_add_items()
            .once()
            .return_once(|_| Err(CartServiceError::EmptyBatch));

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!([]))
            .send(&make_service(cart))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "At least one item is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_items_store_error_returns_500() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_add_items()
            .once()
            .return_once(|_| Err(CartServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!([mug()]))
            .send(&make_service(cart))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "Error inserting into cart");

        Ok(())
    }
}
