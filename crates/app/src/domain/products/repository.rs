//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::{Db, encode_amount, try_get_amount},
    domain::products::models::{NewProduct, Product, ProductUuid},
};

const FIND_PRODUCT_SQL: &str = include_str!("sql/find_product.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");

/// PostgreSQL-backed product catalog.
#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    db: Db,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn find_product(&self, product: ProductUuid) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(FIND_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(self.db.pool())
            .await
    }

    async fn list_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(self.db.pool())
            .await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.name)
            .bind(product.category)
            .bind(encode_amount(product.cost)?)
            .bind(i16::from(product.rating))
            .bind(product.image)
            .fetch_one(self.db.pool())
            .await
    }
}

/// Product catalog lookups.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Look up a live (not deleted) product.
    async fn find_product(&self, product: ProductUuid) -> Result<Option<Product>, sqlx::Error>;

    /// All live products, oldest first.
    async fn list_products(&self) -> Result<Vec<Product>, sqlx::Error>;

    /// Insert a new product.
    async fn create_product(&self, product: NewProduct) -> Result<Product, sqlx::Error>;
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rating_i16: i16 = row.try_get("rating")?;

        let rating = u8::try_from(rating_i16).map_err(|e| sqlx::Error::ColumnDecode {
            index: "rating".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            cost: try_get_amount(row, "cost")?,
            rating,
            image: row.try_get("image")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestDb;

    use super::*;

    fn new_product(name: &str, cost: u64) -> NewProduct {
        NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            category: "Sports".to_string(),
            cost,
            rating: 5,
            image: "https://example.com/ball.png".to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn create_product_round_trips_through_find() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(Db::new(db.pool().clone()));

        let created = repository.create_product(new_product("ball", 20)).await?;
        let found = repository.find_product(created.uuid).await?;

        assert_eq!(found, Some(created));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn find_product_unknown_uuid_returns_none() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(Db::new(db.pool().clone()));

        assert!(repository.find_product(ProductUuid::new()).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn list_products_returns_created_products() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(Db::new(db.pool().clone()));

        let ball = repository.create_product(new_product("ball", 20)).await?;
        let bat = repository.create_product(new_product("bat", 150)).await?;

        let uuids: Vec<ProductUuid> = repository
            .list_products()
            .await?
            .iter()
            .map(|product| product.uuid)
            .collect();

        assert_eq!(uuids, vec![ball.uuid, bat.uuid]);

        Ok(())
    }
}
