//! User response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kart_app::domain::users::models::User;

/// Public profile of a user. The API token hash is never exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    pub uuid: Uuid,
    pub email: String,
    pub name: String,
    pub address: String,
    pub wallet_money: u64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            uuid: user.uuid.into_uuid(),
            email: user.email,
            name: user.name,
            address: user.address,
            wallet_money: user.wallet_money,
        }
    }
}
