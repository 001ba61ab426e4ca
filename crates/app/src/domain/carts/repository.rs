//! Carts Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{Db, encode_amount},
    domain::{
        carts::models::{Cart, CartItem, CartUuid, NewCart, PaymentOption},
        products::models::Product,
        users::models::UserUuid,
    },
};

const FIND_CART_BY_EMAIL_SQL: &str = include_str!("sql/find_cart_by_email.sql");
const GET_CART_ITEMS_SQL: &str = include_str!("sql/get_cart_items.sql");
const CREATE_CART_SQL: &str = include_str!("sql/create_cart.sql");
const TOUCH_CART_SQL: &str = include_str!("sql/touch_cart.sql");
const DELETE_CART_ITEMS_SQL: &str = include_str!("sql/delete_cart_items.sql");
const INSERT_CART_ITEM_SQL: &str = include_str!("sql/insert_cart_item.sql");
const UPDATE_WALLET_MONEY_SQL: &str = include_str!("sql/update_wallet_money.sql");

/// PostgreSQL-backed cart store.
///
/// A cart is stored as a header row plus one `cart_items` row per line; every
/// write replaces the full item list inside a single transaction.
#[derive(Debug, Clone)]
pub struct PgCartsRepository {
    db: Db,
}

impl PgCartsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    async fn get_cart_items(
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(GET_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    async fn touch_cart(
        tx: &mut Transaction<'_, Postgres>,
        cart: &Cart,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(TOUCH_CART_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(cart.payment_option.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    async fn replace_items(
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        items: &[CartItem],
    ) -> Result<(), sqlx::Error> {
        query(DELETE_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?;

        for (position, item) in items.iter().enumerate() {
            let position = i32::try_from(position).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
            let quantity =
                i32::try_from(item.quantity).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

            query(INSERT_CART_ITEM_SQL)
                .bind(cart.into_uuid())
                .bind(item.product.uuid.into_uuid())
                .bind(position)
                .bind(quantity)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl CartsRepository for PgCartsRepository {
    async fn find_cart_by_email(&self, email: &str) -> Result<Option<Cart>, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let cart = query_as::<Postgres, Cart>(FIND_CART_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(mut cart) = cart else {
            tx.commit().await?;

            return Ok(None);
        };

        cart.items = Self::get_cart_items(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(Some(cart))
    }

    async fn create_cart(&self, cart: NewCart) -> Result<Cart, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let created = query_as::<Postgres, Cart>(CREATE_CART_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(&cart.email)
            .bind(PaymentOption::default().as_str())
            .fetch_one(&mut *tx)
            .await?;

        Self::replace_items(&mut tx, created.uuid, &cart.items).await?;

        tx.commit().await?;

        Ok(Cart {
            items: cart.items,
            ..created
        })
    }

    async fn save_cart(&self, cart: &Cart) -> Result<Cart, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let saved = Self::touch_cart(&mut tx, cart).await?;

        Self::replace_items(&mut tx, saved.uuid, &cart.items).await?;

        tx.commit().await?;

        Ok(Cart {
            items: cart.items.clone(),
            ..saved
        })
    }

    async fn checkout_cart(
        &self,
        cart: &Cart,
        user: UserUuid,
        wallet_money: u64,
    ) -> Result<Cart, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let rows_affected = query(UPDATE_WALLET_MONEY_SQL)
            .bind(user.into_uuid())
            .bind(encode_amount(wallet_money)?)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        let saved = Self::touch_cart(&mut tx, cart).await?;

        Self::replace_items(&mut tx, saved.uuid, &cart.items).await?;

        tx.commit().await?;

        Ok(Cart {
            items: cart.items.clone(),
            ..saved
        })
    }
}

/// Cart persistence, keyed by the owning user's email.
#[automock]
#[async_trait]
pub trait CartsRepository: Send + Sync {
    /// Load the cart owned by `email`, with its items in insertion order.
    async fn find_cart_by_email(&self, email: &str) -> Result<Option<Cart>, sqlx::Error>;

    /// Insert a new cart together with its initial items.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, sqlx::Error>;

    /// Persist the cart's current item list and payment option.
    async fn save_cart(&self, cart: &Cart) -> Result<Cart, sqlx::Error>;

    /// Persist the user's debited balance and the cart in one transaction.
    async fn checkout_cart(
        &self,
        cart: &Cart,
        user: UserUuid,
        wallet_money: u64,
    ) -> Result<Cart, sqlx::Error>;
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let payment_option = row
            .try_get::<String, _>("payment_option")?
            .parse::<PaymentOption>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "payment_option".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            items: Vec::new(),
            payment_option,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CartItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity_i32: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            product: Product::from_row(row)?,
            quantity,
        })
    }
}
