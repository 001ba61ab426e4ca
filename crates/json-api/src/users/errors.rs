//! User Errors

use salvo::http::StatusError;
use tracing::error;

use kart_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::AlreadyExists
        | UsersServiceError::MissingRequiredData
        | UsersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid user request")
        }
        UsersServiceError::Sql(source) => {
            error!("failed to fetch user: {source}");

            StatusError::internal_server_error()
        }
    }
}
