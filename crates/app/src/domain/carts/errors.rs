//! Carts service errors.

use sqlx::Error;
use thiserror::Error;

/// Coarse classification of a [`CartsServiceError`], mirroring the HTTP status
/// family the error is reported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartsErrorKind {
    /// The cart being read does not exist.
    NotFound,

    /// The request violates a cart rule; nothing was changed.
    InvalidRequest,

    /// Persistence failed.
    Internal,
}

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("User does not have a cart")]
    CartNotFound,

    #[error("User does not have a cart. Use POST to create cart and add a product")]
    MissingCart,

    #[error("Product doesn't exist in database")]
    ProductNotFound,

    #[error("Product already in cart. Use the cart sidebar to update or remove product from cart")]
    ProductAlreadyInCart,

    #[error("Product not in cart")]
    ProductNotInCart,

    #[error("please enter a valid quantity")]
    InvalidQuantity,

    #[error("User cart is empty")]
    EmptyCart,

    #[error("User address is not set")]
    AddressNotSet,

    #[error("Wallet balance is insufficient")]
    InsufficientBalance,

    #[error("failed to create cart")]
    CartCreation(#[source] Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl CartsServiceError {
    #[must_use]
    pub const fn kind(&self) -> CartsErrorKind {
        match self {
            Self::CartNotFound => CartsErrorKind::NotFound,
            Self::MissingCart
            | Self::ProductNotFound
            | Self::ProductAlreadyInCart
            | Self::ProductNotInCart
            | Self::InvalidQuantity
            | Self::EmptyCart
            | Self::AddressNotSet
            | Self::InsufficientBalance => CartsErrorKind::InvalidRequest,
            Self::CartCreation(_) | Self::Sql(_) => CartsErrorKind::Internal,
        }
    }
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cart_on_read_is_not_found() {
        assert_eq!(
            CartsServiceError::CartNotFound.kind(),
            CartsErrorKind::NotFound
        );
    }

    #[test]
    fn rule_violations_are_invalid_requests() {
        for error in [
            CartsServiceError::MissingCart,
            CartsServiceError::ProductNotFound,
            CartsServiceError::ProductAlreadyInCart,
            CartsServiceError::ProductNotInCart,
            CartsServiceError::InvalidQuantity,
            CartsServiceError::EmptyCart,
            CartsServiceError::AddressNotSet,
            CartsServiceError::InsufficientBalance,
        ] {
            assert_eq!(error.kind(), CartsErrorKind::InvalidRequest, "{error}");
        }
    }

    #[test]
    fn storage_failures_are_internal() {
        assert_eq!(
            CartsServiceError::CartCreation(Error::PoolTimedOut).kind(),
            CartsErrorKind::Internal
        );
        assert_eq!(
            CartsServiceError::from(Error::PoolClosed).kind(),
            CartsErrorKind::Internal
        );
    }
}
