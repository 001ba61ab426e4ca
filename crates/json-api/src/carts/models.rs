//! Cart request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kart_app::domain::carts::models::{Cart, CartItem};

use crate::products::ProductResponse;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// Email of the cart's owner
    pub email: String,

    /// Items in insertion order
    pub cart_items: Vec<CartItemResponse>,

    /// Selected payment option
    pub payment_option: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            uuid: cart.uuid.into_uuid(),
            email: cart.email,
            cart_items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            payment_option: cart.payment_option.to_string(),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The product on this line
    pub product: ProductResponse,

    /// Units of the product
    pub quantity: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product: item.product.into(),
            quantity: item.quantity,
        }
    }
}

/// Body of `POST /cart` and `PUT /cart`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemRequest {
    /// Product to add or update
    pub product_id: Uuid,

    /// Requested quantity; zero on update removes the product
    pub quantity: i64,
}
