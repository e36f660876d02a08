//! Cart Data

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use thiserror::Error;

/// Fraction digits stored by the `NUMERIC(10, 2)` price column.
const PRICE_SCALE: u32 = 2;

/// Length limit of the `VARCHAR(255)` columns.
const MAX_TEXT_LENGTH: usize = 255;

/// Reasons a submitted cart item is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartItemValidationError {
    #[error("All fields are required")]
    MissingField,

    #[error("Price must be a positive amount with at most two decimal places")]
    InvalidPrice,

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Name and image must be at most 255 characters")]
    TextTooLong,
}

/// Cart item fields as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartItemDraft {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub image: String,
    pub description: String,
}

impl TryFrom<CartItemDraft> for NewCartItem {
    type Error = CartItemValidationError;

    /// Zero counts as absent for price and quantity, as do empty strings.
    fn try_from(draft: CartItemDraft) -> Result<Self, Self::Error> {
        let name = required_text(draft.name)?;
        let image = required_text(draft.image)?;
        let description = required_text(draft.description)?;

        let price = draft
            .price
            .filter(|price| !price.is_zero())
            .ok_or(CartItemValidationError::MissingField)?;

        let quantity = draft
            .quantity
            .filter(|quantity| *quantity != 0)
            .ok_or(CartItemValidationError::MissingField)?;

        if price.is_sign_negative() || price.normalize().scale() > PRICE_SCALE || price > max_price()
        {
            return Err(CartItemValidationError::InvalidPrice);
        }

        if quantity < 1 {
            return Err(CartItemValidationError::InvalidQuantity);
        }

        if name.chars().count() > MAX_TEXT_LENGTH || image.chars().count() > MAX_TEXT_LENGTH {
            return Err(CartItemValidationError::TextTooLong);
        }

        Ok(Self {
            name,
            price,
            quantity,
            image,
            description,
        })
    }
}

/// Validate a whole batch; the first invalid item rejects all of them.
///
/// # Errors
///
/// Returns the validation error of the first invalid item.
pub fn validate_batch(
    drafts: impl IntoIterator<Item = CartItemDraft>,
) -> Result<Vec<NewCartItem>, CartItemValidationError> {
    drafts.into_iter().map(NewCartItem::try_from).collect()
}

fn required_text(value: Option<String>) -> Result<String, CartItemValidationError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(CartItemValidationError::MissingField)
}

fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, PRICE_SCALE)
}

/// Quantity adjustment applied by a single update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    Increment,
    Decrement,
}

impl QuantityAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }
}

impl Display for QuantityAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quantity action: {0}")]
pub struct UnknownQuantityAction(String);

impl FromStr for QuantityAction {
    type Err = UnknownQuantityAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "increment" => Ok(Self::Increment),
            "decrement" => Ok(Self::Decrement),
            other => Err(UnknownQuantityAction(other.to_string())),
        }
    }
}
