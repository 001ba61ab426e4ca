//! Errors

use salvo::http::StatusError;
use tracing::error;

use kart_app::domain::carts::{CartsErrorKind, CartsServiceError};

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error.kind() {
        CartsErrorKind::NotFound => StatusError::not_found().brief(error.to_string()),
        CartsErrorKind::InvalidRequest => StatusError::bad_request().brief(error.to_string()),
        CartsErrorKind::Internal => {
            error!(error = ?error, "cart operation failed: {error}");

            StatusError::internal_server_error()
        }
    }
}
