//! Get User Handler

use std::sync::Arc;

use kart_app::domain::users::models::UserUuid;
use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// Get User Handler
///
/// Returns the caller's own profile, including the wallet balance.
#[endpoint(
    tags("users"),
    summary = "Get User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User found"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the caller's profile"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.user_or_401()?;
    let requested = UserUuid::from_uuid(user.into_inner());

    if caller.uuid != requested {
        return Err(
            StatusError::forbidden().brief("Access to another user's profile is not allowed"),
        );
    }

    let user = state
        .users()
        .get_user(requested)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use kart_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::test_helpers::{make_user, users_service};

    use super::*;

    fn route() -> Router {
        Router::with_path("users/{user}").get(handler)
    }

    #[tokio::test]
    async fn own_profile_is_returned() -> TestResult {
        let caller = make_user("221B Baker Street", 60);
        let uuid = caller.uuid;
        let stored = caller.clone();

        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(stored));

        let response: UserResponse = TestClient::get(format!("http://example.com/users/{uuid}"))
            .send(&users_service(users, caller, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(response.wallet_money, 60);

        Ok(())
    }

    #[tokio::test]
    async fn other_users_profile_is_forbidden() {
        let mut users = MockUsersService::new();

        users.expect_get_user().never();

        let res = TestClient::get(format!("http://example.com/users/{}", UserUuid::new()))
            .send(&users_service(users, make_user("221B Baker Street", 500), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn deleted_user_returns_404() {
        let caller = make_user("221B Baker Street", 500);
        let uuid = caller.uuid;

        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .return_once(|_| Err(UsersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/users/{uuid}"))
            .send(&users_service(users, caller, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
