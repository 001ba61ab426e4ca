//! Add Product To Cart Handler

use std::sync::Arc;

use kart_app::domain::products::models::ProductUuid;
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

/// Add Product To Cart Handler
///
/// Creates the cart on first use, otherwise appends the product.
#[endpoint(
    tags("carts"),
    summary = "Add Product to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.create",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user.uuid));
    span.record("product_uuid", tracing::field::display(request.product_id));

    let quantity = request_quantity(request.quantity)?;

    let cart = state
        .carts()
        .add_product_to_cart(user, ProductUuid::from_uuid(request.product_id), quantity)
        .await
        .map_err(into_status_error)?;

    tracing::info!(cart_uuid = %cart.uuid, "added product to cart");

    res.status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use kart_app::{
        database::StorageError,
        domain::carts::{CartsServiceError, MockCartsService},
    };

    use crate::test_helpers::{carts_service, make_cart, make_product, make_user};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            make_user("221B Baker Street", 500),
            Router::with_path("cart").post(handler),
        )
    }

    #[tokio::test]
    async fn create_returns_201_with_cart() -> TestResult {
        let ball = make_product("ball", 20);
        let ball_uuid = ball.uuid;
        let cart = make_cart(vec![(ball, 2)]);

        let mut carts = MockCartsService::new();

        carts
            .expect_add_product_to_cart()
            .once()
            .withf(move |_, product, quantity| *product == ball_uuid && *quantity == 2)
            .return_once(move |_, _, _| Ok(cart));

        let mut res = TestClient::post("http://example.com/cart")
            .json(&json!({ "productId": ball_uuid.into_uuid(), "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: CartResponse = res.take_json().await?;

        assert_eq!(body.cart_items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn create_duplicate_product_returns_400_with_message() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_product_to_cart()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::ProductAlreadyInCart));

        let mut res = TestClient::post("http://example.com/cart")
            .json(&json!({ "productId": Uuid::now_v7(), "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.take_string()
                .await?
                .contains("Product already in cart"),
            "expected service message in body"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_negative_quantity_returns_400_without_calling_service() {
        let mut carts = MockCartsService::new();

        carts.expect_add_product_to_cart().never();

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "productId": Uuid::now_v7(), "quantity": -3 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn create_quantity_beyond_u32_returns_400_without_calling_service() {
        let mut carts = MockCartsService::new();

        carts.expect_add_product_to_cart().never();

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "productId": Uuid::now_v7(), "quantity": 5_000_000_000_i64 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn create_storage_failure_returns_500() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_product_to_cart()
            .once()
            .return_once(|_, _, _| {
                Err(CartsServiceError::CartCreation(StorageError::PoolClosed))
            });

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "productId": Uuid::now_v7(), "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
