//! Users Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::{Db, encode_amount, try_get_amount},
    domain::users::models::{NewUser, User, UserUuid},
};

const FIND_USER_SQL: &str = include_str!("sql/find_user.sql");
const FIND_USER_BY_TOKEN_HASH_SQL: &str = include_str!("sql/find_user_by_token_hash.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");

/// PostgreSQL-backed users repository.
#[derive(Debug, Clone)]
pub struct PgUsersRepository {
    db: Db,
}

impl PgUsersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn find_user(&self, user: UserUuid) -> Result<Option<User>, sqlx::Error> {
        query_as::<Postgres, User>(FIND_USER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(self.db.pool())
            .await
    }

    async fn find_user_by_token_hash(&self, hash: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<Postgres, User>(FIND_USER_BY_TOKEN_HASH_SQL)
            .bind(hash)
            .fetch_optional(self.db.pool())
            .await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, sqlx::Error> {
        query_as::<Postgres, User>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(user.email)
            .bind(user.name)
            .bind(user.address)
            .bind(encode_amount(user.wallet_money)?)
            .bind(user.token_hash)
            .fetch_one(self.db.pool())
            .await
    }
}

/// User persistence operations.
#[automock]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Look up a user by UUID.
    async fn find_user(&self, user: UserUuid) -> Result<Option<User>, sqlx::Error>;

    /// Look up the user owning an API token digest.
    async fn find_user_by_token_hash(&self, hash: &str) -> Result<Option<User>, sqlx::Error>;

    /// Insert a new user.
    async fn create_user(&self, user: NewUser) -> Result<User, sqlx::Error>;
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            wallet_money: try_get_amount(row, "wallet_money")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
