//! In-memory fixtures for service and model tests.

use jiff::Timestamp;

use crate::domain::{
    carts::models::{Cart, CartItem, CartUuid, PaymentOption},
    products::models::{Product, ProductUuid},
    users::models::{User, UserUuid},
};

pub(crate) const TEST_EMAIL: &str = "crio-user@gmail.com";

pub(crate) fn make_product(name: &str, cost: u64) -> Product {
    Product {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        category: "Sports".to_string(),
        cost,
        rating: 5,
        image: format!("https://example.com/{name}.png"),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_item(product: Product, quantity: u32) -> CartItem {
    CartItem { product, quantity }
}

/// A cart owned by [`TEST_EMAIL`].
pub(crate) fn make_cart(items: Vec<CartItem>) -> Cart {
    Cart {
        uuid: CartUuid::new(),
        email: TEST_EMAIL.to_string(),
        items,
        payment_option: PaymentOption::Default,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
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
