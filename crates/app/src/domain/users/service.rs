//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::users::{
    errors::UsersServiceError,
    models::{NewUser, User, UserUuid},
    repository::UsersRepository,
    token::hash_token,
};

#[derive(Clone)]
pub struct UsersServiceImpl {
    repository: Arc<dyn UsersRepository>,
}

impl UsersServiceImpl {
    #[must_use]
    pub fn new(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn authenticate_bearer(&self, token: &str) -> Result<User, UsersServiceError> {
        self.repository
            .find_user_by_token_hash(&hash_token(token))
            .await?
            .ok_or(UsersServiceError::NotFound)
    }

    async fn get_user(&self, user: UserUuid) -> Result<User, UsersServiceError> {
        self.repository
            .find_user(user)
            .await?
            .ok_or(UsersServiceError::NotFound)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError> {
        self.repository.create_user(user).await.map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Resolve the user owning a raw bearer token.
    async fn authenticate_bearer(&self, token: &str) -> Result<User, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<User, UsersServiceError>;

    /// Register a new user.
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::users::repository::MockUsersRepository, test::make_user};

    use super::*;

    #[tokio::test]
    async fn authenticate_bearer_looks_up_token_digest() -> TestResult {
        let user = make_user("ADDRESS_NOT_SET", 500);
        let expected = user.clone();

        let mut repository = MockUsersRepository::new();

        repository
            .expect_find_user_by_token_hash()
            .once()
            .withf(|hash| hash == hash_token("abc123"))
            .return_once(move |_| Ok(Some(user)));

        let service = UsersServiceImpl::new(Arc::new(repository));

        let authenticated = service.authenticate_bearer("abc123").await?;

        assert_eq!(authenticated, expected);

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_bearer_unknown_token_returns_not_found() {
        let mut repository = MockUsersRepository::new();

        repository
            .expect_find_user_by_token_hash()
            .once()
            .return_once(|_| Ok(None));

        let service = UsersServiceImpl::new(Arc::new(repository));

        let result = service.authenticate_bearer("nope").await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_user_storage_failure_returns_sql_error() {
        let mut repository = MockUsersRepository::new();

        repository
            .expect_find_user()
            .once()
            .return_once(|_| Err(sqlx::Error::PoolTimedOut));

        let service = UsersServiceImpl::new(Arc::new(repository));

        let result = service.get_user(UserUuid::new()).await;

        assert!(
            matches!(result, Err(UsersServiceError::Sql(_))),
            "expected Sql, got {result:?}"
        );
    }
}
