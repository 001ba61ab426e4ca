//! Checkout Handler

use std::sync::Arc;

use kart_app::domain::carts::CartsErrorKind;
use salvo::prelude::*;

use crate::{
    carts::errors::into_status_error,
    extensions::*,
    observability::{CheckoutOutcome, record_checkout},
    state::State,
};

/// Checkout Handler
///
/// Pays for the cart from the user's wallet and empties it.
#[endpoint(
    tags("carts"),
    summary = "Checkout Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Checked out"),
        (status_code = StatusCode::NOT_FOUND, description = "User does not have a cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.checkout",
    skip(depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

    match state.carts().checkout(user).await {
        Ok(cart) => {
            record_checkout(CheckoutOutcome::Completed);

            tracing::info!(cart_uuid = %cart.uuid, "checked out cart");

            Ok(StatusCode::NO_CONTENT)
        }
        Err(error) => {
            record_checkout(match error.kind() {
                CartsErrorKind::Internal => CheckoutOutcome::Failed,
                CartsErrorKind::NotFound | CartsErrorKind::InvalidRequest => {
                    CheckoutOutcome::Rejected
                }
            });

            Err(into_status_error(error))
        }
    }
}
