//! User Handlers

pub(crate) mod get;
