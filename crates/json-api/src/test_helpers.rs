//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use kart_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartItem, CartUuid, PaymentOption},
        },
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
        users::{
            MockUsersService,
            models::{User, UserUuid},
        },
    },
};
use salvo::{affix_state::inject, prelude::*};

use crate::{extensions::*, state::State};

pub(crate) const TEST_EMAIL: &str = "crio-user@gmail.com";

/// Places a fixed user in the depot, standing in for the bearer middleware.
#[derive(Debug, Clone)]
pub(crate) struct InjectUser(pub(crate) User);

#[salvo::handler]
impl InjectUser {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_user(self.0.clone());
        ctrl.call_next(req, depot, res).await;
    }
}

pub(crate) fn make_user(address: &str, wallet_money: u64) -> User {
    User {
        uuid: UserUuid::new(),
        email: TEST_EMAIL.to_string(),
        name: "crio-user".to_string(),
        address: address.to_string(),
        wallet_money,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(name: &str, cost: u64) -> Product {
    Product {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        category: "Sports".to_string(),
        cost,
        rating: 4,
        image: format!("https://example.com/{name}.png"),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_cart(items: Vec<(Product, u32)>) -> Cart {
    Cart {
        uuid: CartUuid::new(),
        email: TEST_EMAIL.to_string(),
        items: items
            .into_iter()
            .map(|(product, quantity)| CartItem { product, quantity })
            .collect(),
        payment_option: PaymentOption::Default,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart_by_user().never();
    carts.expect_add_product_to_cart().never();
    carts.expect_update_product_in_cart().never();
    carts.expect_delete_product_from_cart().never();
    carts.expect_checkout().never();

    carts
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_authenticate_bearer().never();
    users.expect_get_user().never();
    users.expect_create_user().never();

    users
}

fn state(
    carts: MockCartsService,
    products: MockProductsService,
    users: MockUsersService,
) -> Arc<State> {
    State::from_app_context(AppContext::new(
        Arc::new(carts),
        Arc::new(products),
        Arc::new(users),
    ))
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    state(strict_carts_mock(), strict_products_mock(), users)
}

pub(crate) fn carts_service(carts: MockCartsService, user: User, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                carts,
                strict_products_mock(),
                strict_users_mock(),
            )))
            .hoop(InjectUser(user))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                strict_carts_mock(),
                products,
                strict_users_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn users_service(users: MockUsersService, caller: User, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users(users)))
            .hoop(InjectUser(caller))
            .push(route),
    )
}
