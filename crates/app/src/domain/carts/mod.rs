//! Carts

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::{CartsErrorKind, CartsServiceError};
pub use repository::{CartsRepository, MockCartsRepository, PgCartsRepository};
pub use service::*;
