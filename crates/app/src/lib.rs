//! Cart, catalog and user domain with its `PostgreSQL` persistence.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

pub mod uuids;
