//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::products::{
    errors::ProductsServiceError,
    models::{NewProduct, Product, ProductUuid},
    repository::ProductsRepository,
};

#[derive(Clone)]
pub struct ProductsServiceImpl {
    repository: Arc<dyn ProductsRepository>,
}

impl ProductsServiceImpl {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductsService for ProductsServiceImpl {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        self.repository.list_products().await.map_err(Into::into)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        self.repository
            .find_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        self.repository
            .create_product(product)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Adds a product to the catalog.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;
}
