//! Get Product Handler

use std::sync::Arc;

use kart_app::domain::products::models::ProductUuid;
use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .products()
        .get_product(ProductUuid::from_uuid(product.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
