//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, CartsServiceImpl, PgCartsRepository},
        products::{PgProductsRepository, ProductsService, ProductsServiceImpl},
        users::{PgUsersRepository, UsersService, UsersServiceImpl},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub products: Arc<dyn ProductsService>,
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        carts: Arc<dyn CartsService>,
        products: Arc<dyn ProductsService>,
        users: Arc<dyn UsersService>,
    ) -> Self {
        Self {
            carts,
            products,
            users,
        }
    }

    /// Wire the `PostgreSQL` repositories into their services.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        let products_repository = Arc::new(PgProductsRepository::new(db.clone()));

        Self {
            carts: Arc::new(CartsServiceImpl::new(
                Arc::new(PgCartsRepository::new(db.clone())),
                products_repository.clone(),
            )),
            products: Arc::new(ProductsServiceImpl::new(products_repository)),
            users: Arc::new(UsersServiceImpl::new(Arc::new(PgUsersRepository::new(
                db.clone(),
            )))),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails, or when
    /// `run_migrations` is set and a migration fails to apply.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::from_db(&Db::new(pool)))
    }
}
