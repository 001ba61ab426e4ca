//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{Cart, CartItem, CartUuid, NewCart},
        repository::CartsRepository,
    },
    products::{models::ProductUuid, repository::ProductsRepository},
    users::models::User,
};

#[derive(Clone)]
pub struct CartsServiceImpl {
    carts: Arc<dyn CartsRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl CartsServiceImpl {
    #[must_use]
    pub fn new(carts: Arc<dyn CartsRepository>, products: Arc<dyn ProductsRepository>) -> Self {
        Self { carts, products }
    }

    fn validate_quantity(quantity: u32) -> Result<u32, CartsServiceError> {
        if quantity == 0 || quantity > CartItem::MAX_QUANTITY {
            return Err(CartsServiceError::InvalidQuantity);
        }

        Ok(quantity)
    }

    async fn existing_cart(&self, user: &User) -> Result<Cart, CartsServiceError> {
        self.carts
            .find_cart_by_email(&user.email)
            .await?
            .ok_or(CartsServiceError::MissingCart)
    }

    async fn ensure_product_exists(&self, product: ProductUuid) -> Result<(), CartsServiceError> {
        self.products
            .find_product(product)
            .await?
            .map(|_| ())
            .ok_or(CartsServiceError::ProductNotFound)
    }
}

#[async_trait]
impl CartsService for CartsServiceImpl {
    #[tracing::instrument(
        name = "carts.service.get_cart_by_user",
        skip(self, user),
        fields(user_uuid = %user.uuid),
        err
    )]
    async fn get_cart_by_user(&self, user: &User) -> Result<Cart, CartsServiceError> {
        self.carts
            .find_cart_by_email(&user.email)
            .await?
            .ok_or(CartsServiceError::CartNotFound)
    }

    #[tracing::instrument(
        name = "carts.service.add_product_to_cart",
        skip(self, user),
        fields(user_uuid = %user.uuid, product_uuid = %product),
        err
    )]
    async fn add_product_to_cart(
        &self,
        user: &User,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let quantity = Self::validate_quantity(quantity)?;

        let product = self
            .products
            .find_product(product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let item = CartItem { product, quantity };

        let Some(mut cart) = self.carts.find_cart_by_email(&user.email).await? else {
            let cart = self
                .carts
                .create_cart(NewCart {
                    uuid: CartUuid::new(),
                    email: user.email.clone(),
                    items: vec![item],
                })
                .await
                .map_err(CartsServiceError::CartCreation)?;

            info!(cart_uuid = %cart.uuid, "created cart");

            return Ok(cart);
        };

        if cart.contains_product(item.product.uuid) {
            return Err(CartsServiceError::ProductAlreadyInCart);
        }

        cart.items.push(item);

        self.carts.save_cart(&cart).await.map_err(Into::into)
    }

    #[tracing::instrument(
        name = "carts.service.update_product_in_cart",
        skip(self, user),
        fields(user_uuid = %user.uuid, product_uuid = %product),
        err
    )]
    async fn update_product_in_cart(
        &self,
        user: &User,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let quantity = Self::validate_quantity(quantity)?;

        let mut cart = self.existing_cart(user).await?;

        self.ensure_product_exists(product).await?;

        let item = cart
            .find_item_mut(product)
            .ok_or(CartsServiceError::ProductNotInCart)?;

        item.quantity = quantity;

        self.carts.save_cart(&cart).await.map_err(Into::into)
    }

    #[tracing::instrument(
        name = "carts.service.delete_product_from_cart",
        skip(self, user),
        fields(user_uuid = %user.uuid, product_uuid = %product),
        err
    )]
    async fn delete_product_from_cart(
        &self,
        user: &User,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError> {
        let mut cart = self.existing_cart(user).await?;

        cart.remove_item(product)
            .ok_or(CartsServiceError::ProductNotInCart)?;

        self.carts.save_cart(&cart).await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "carts.service.checkout",
        skip(self, user),
        fields(user_uuid = %user.uuid, total_cost = tracing::field::Empty),
        err
    )]
    async fn checkout(&self, user: &User) -> Result<Cart, CartsServiceError> {
        let mut cart = self
            .carts
            .find_cart_by_email(&user.email)
            .await?
            .ok_or(CartsServiceError::CartNotFound)?;

        if cart.items.is_empty() {
            return Err(CartsServiceError::EmptyCart);
        }

        if !user.has_set_non_default_address() {
            return Err(CartsServiceError::AddressNotSet);
        }

        let total_cost = cart
            .total_cost()
            .ok_or(CartsServiceError::InsufficientBalance)?;

        tracing::Span::current().record("total_cost", total_cost);

        let wallet_money = user
            .wallet_money
            .checked_sub(total_cost)
            .ok_or(CartsServiceError::InsufficientBalance)?;

        cart.items.clear();

        let cart = self
            .carts
            .checkout_cart(&cart, user.uuid, wallet_money)
            .await?;

        info!(cart_uuid = %cart.uuid, wallet_money, "checked out cart");

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Returns the user's cart.
    async fn get_cart_by_user(&self, user: &User) -> Result<Cart, CartsServiceError>;

    /// Appends a product to the user's cart, creating the cart on first use.
    async fn add_product_to_cart(
        &self,
        user: &User,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Sets the quantity of a product already in the cart.
    async fn update_product_in_cart(
        &self,
        user: &User,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Removes a product line from the cart.
    async fn delete_product_from_cart(
        &self,
        user: &User,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError>;

    /// Debits the cart total from the user's wallet and empties the cart.
    async fn checkout(&self, user: &User) -> Result<Cart, CartsServiceError>;
}
