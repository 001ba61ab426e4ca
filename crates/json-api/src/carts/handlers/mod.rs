//! Cart Handlers

use kart_app::domain::carts::CartsServiceError;
use salvo::http::StatusError;

use crate::carts::errors::into_status_error;

pub(crate) mod checkout;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod update;

/// Narrow a request quantity to the domain's unsigned type.
fn request_quantity(quantity: i64) -> Result<u32, StatusError> {
    u32::try_from(quantity)
        .map_err(|_ignored| into_status_error(CartsServiceError::InvalidQuantity))
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn request_quantity_rejects_values_outside_u32() {
        for quantity in [-1, i64::from(u32::MAX) + 1] {
            let error = request_quantity(quantity).err();

            assert_eq!(error.as_ref().map(|e| e.code), Some(StatusCode::BAD_REQUEST));
            assert_eq!(
                error.map(|e| e.brief),
                Some(CartsServiceError::InvalidQuantity.to_string())
            );
        }
    }

    #[test]
    fn request_quantity_keeps_positive_values() {
        assert_eq!(request_quantity(7).ok(), Some(7));
    }
}
