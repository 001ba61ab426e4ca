//! Update Cart Item Handler

use std::{cmp::Ordering, sync::Arc};

use kart_app::domain::{carts::CartsServiceError, products::models::ProductUuid};
use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartItemRequest, CartResponse},
    },
    extensions::*,
    state::State,
};

use super::request_quantity;

/// Update Cart Item Handler
///
/// A positive quantity replaces the product's quantity; zero removes the product.
#[endpoint(
    tags("carts"),
    summary = "Update or Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated", body = CartResponse),
        (status_code = StatusCode::NO_CONTENT, description = "Product removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.update",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;
    let request = json.into_inner();
    let product = ProductUuid::from_uuid(request.product_id);

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user.uuid));
    span.record("product_uuid", tracing::field::display(product));
    span.record("quantity", request.quantity);

    match request.quantity.cmp(&0) {
        Ordering::Less => Err(into_status_error(CartsServiceError::InvalidQuantity)),
        Ordering::Equal => {
            state
                .carts()
                .delete_product_from_cart(user, product)
                .await
                .map_err(into_status_error)?;

            tracing::info!("removed product from cart");

            res.status_code(StatusCode::NO_CONTENT);

            Ok(())
        }
        Ordering::Greater => {
            let quantity = request_quantity(request.quantity)?;

            let cart = state
                .carts()
                .update_product_in_cart(user, product, quantity)
                .await
                .map_err(into_status_error)?;

            tracing::info!(quantity, "updated product quantity");

            res.render(Json(CartResponse::from(cart)));

            Ok(())
        }
    }
}
