//! Cart Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;

/// Cart item primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartItemId(i64);

impl CartItemId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for CartItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<i64> for CartItemId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<CartItemId> for i64 {
    fn from(value: CartItemId) -> Self {
        value.into_inner()
    }
}

/// Cart Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRecord {
    pub id: CartItemId,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub image: String,
    pub description: String,
}

impl CartItemRecord {
    /// Price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Checkout Record
///
/// The items removed from the cart by a checkout, and what they came to.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRecord {
    pub items: Vec<CartItemRecord>,
    pub total: Decimal,
}

impl CheckoutRecord {
    #[must_use]
    pub fn from_items(mut items: Vec<CartItemRecord>) -> Self {
        items.sort_by_key(|item| item.id);

        let total = items.iter().map(CartItemRecord::line_total).sum();

        Self { items, total }
    }
}
