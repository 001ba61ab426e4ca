//! Users

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod token;

pub use errors::UsersServiceError;
pub use repository::{MockUsersRepository, PgUsersRepository, UsersRepository};
pub use service::*;
pub use token::{generate_token, hash_token};
