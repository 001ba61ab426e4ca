//! Depot helper extensions.

use std::any::Any;

use kart_app::domain::users::models::User;
use salvo::prelude::{Depot, StatusError};

const USER_DEPOT_KEY: &str = "authenticated_user";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Store the user resolved by the auth middleware.
    fn insert_user(&mut self, user: User);

    /// The authenticated user, or 401 when the auth middleware did not run.
    fn user_or_401(&self) -> Result<&User, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user(&mut self, user: User) {
        self.insert(USER_DEPOT_KEY, user);
    }

    fn user_or_401(&self) -> Result<&User, StatusError> {
        self.get::<User>(USER_DEPOT_KEY)
            .map_err(|_ignored| StatusError::unauthorized())
    }
}
