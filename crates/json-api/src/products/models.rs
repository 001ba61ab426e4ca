//! Product response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kart_app::domain::products::models::Product;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Catalog category
    pub category: String,

    /// Unit cost in minor currency units
    pub cost: u64,

    /// Rating out of five
    pub rating: u8,

    /// Image URL
    pub image: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid.into_uuid(),
            name: product.name,
            category: product.category,
            cost: product.cost,
            rating: product.rating,
            image: product.image,
        }
    }
}
