//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use shopfront_app::{
    context::AppContext,
    domain::{
        accounts::MockAccountsService,
        cart::{
            MockCartService,
            records::{CartItemId, CartItemRecord},
        },
    },
};

use crate::{errors::json_catcher, state::State};

fn strict_cart_mock() -> MockCartService {
    let mut cart = MockCartService::new();

    cart.expect_create_table().never();
    cart.expect_list_items().never();
    cart.expect_add_items().never();
    cart.expect_remove_item().never();
    cart.expect_update_quantity().never();
    cart.expect_checkout().never();

    cart
}

fn strict_accounts_mock() -> MockAccountsService {
    let mut accounts = MockAccountsService::new();

    accounts.expect_create_table().never();
    accounts.expect_register().never();
    accounts.expect_login().never();

    accounts
}

pub(crate) fn make_state(cart: MockCartService, accounts: MockAccountsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(cart), Arc::new(accounts)))
}

pub(crate) fn cart_service(cart: MockCartService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(cart, strict_accounts_mock())))
            .push(route),
    )
    .catcher(json_catcher())
}

pub(crate) fn accounts_service(accounts: MockAccountsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(strict_cart_mock(), accounts)))
            .push(route),
    )
    .catcher(json_catcher())
}

pub(crate) fn make_item(id: i64, name: &str, price: Decimal, quantity: i32) -> CartItemRecord {
    CartItemRecord {
        id: CartItemId::new(id),
        name: name.to_string(),
        price,
        quantity,
        image: format!("{}.png", name.to_lowercase()),
        description: format!("A {name}"),
    }
}
