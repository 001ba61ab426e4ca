//! Shared test infrastructure.

mod fixtures;

pub(crate) use db::TestDb;
pub(crate) use fixtures::{make_cart, make_item, make_product, make_user};
