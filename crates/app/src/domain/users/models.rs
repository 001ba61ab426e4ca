//! User Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Placeholder stored for users who have not entered a shipping address yet.
pub const DEFAULT_ADDRESS: &str = "ADDRESS_NOT_SET";

/// Wallet balance granted to newly registered users.
pub const DEFAULT_WALLET_MONEY: u64 = 500;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// User Model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uuid: UserUuid,
    pub email: String,
    pub name: String,
    pub address: String,

    /// Wallet balance in minor currency units.
    pub wallet_money: u64,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Whether the user has replaced the placeholder address with a real one.
    pub fn has_set_non_default_address(&self) -> bool {
        let address = self.address.trim();

        !address.is_empty() && address != DEFAULT_ADDRESS
    }
}

/// New User Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
    pub name: String,

    /// Shipping address; [`DEFAULT_ADDRESS`] is stored when omitted.
    pub address: Option<String>,

    pub wallet_money: u64,

    /// SHA-256 hex digest of the user's API token.
    pub token_hash: String,
}
