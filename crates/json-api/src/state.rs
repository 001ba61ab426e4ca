//! Shared request state

use std::sync::Arc;

use kart_app::{
    context::AppContext,
    domain::{carts::CartsService, products::ProductsService, users::UsersService},
};

/// Services shared by every handler, injected into the depot once at startup.
#[derive(Clone)]
pub(crate) struct State {
    app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }

    pub(crate) fn carts(&self) -> &dyn CartsService {
        self.app.carts.as_ref()
    }

    pub(crate) fn products(&self) -> &dyn ProductsService {
        self.app.products.as_ref()
    }

    pub(crate) fn users(&self) -> &dyn UsersService {
        self.app.users.as_ref()
    }
}
