//! Cart Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::products::models::{Product, ProductUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// How the user intends to pay at checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentOption {
    #[default]
    Default,
    Visa,
    Upi,
}

impl PaymentOption {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "PAYMENT_OPTION_DEFAULT",
            Self::Visa => "PAYMENT_OPTION_VISA",
            Self::Upi => "PAYMENT_OPTION_UPI",
        }
    }
}

impl fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown payment option: {0}")]
pub struct UnknownPaymentOption(String);

impl FromStr for PaymentOption {
    type Err = UnknownPaymentOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PAYMENT_OPTION_DEFAULT" => Ok(Self::Default),
            "PAYMENT_OPTION_VISA" => Ok(Self::Visa),
            "PAYMENT_OPTION_UPI" => Ok(Self::Upi),
            other => Err(UnknownPaymentOption(other.to_string())),
        }
    }
}

/// Cart Model
///
/// One per user, keyed by the owner's email.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub email: String,
    pub items: Vec<CartItem>,
    pub payment_option: PaymentOption,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    pub fn find_item(&self, product: ProductUuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.uuid == product)
    }

    pub fn find_item_mut(&mut self, product: ProductUuid) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.product.uuid == product)
    }

    pub fn contains_product(&self, product: ProductUuid) -> bool {
        self.find_item(product).is_some()
    }

    /// Remove the line for `product`, keeping the order of the remaining items.
    pub fn remove_item(&mut self, product: ProductUuid) -> Option<CartItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.product.uuid == product)?;

        Some(self.items.remove(position))
    }

    /// Sum of `cost * quantity` over all items, or `None` on overflow.
    pub fn total_cost(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0_u64, |total, item| total.checked_add(item.cost()?))
    }
}

/// CartItem Model
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Largest quantity a cart line can hold; `cart_items.quantity` is an `INTEGER`.
    pub const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

    /// Line cost, or `None` on overflow.
    pub fn cost(&self) -> Option<u64> {
        self.product.cost.checked_mul(u64::from(self.quantity))
    }
}

/// New Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub uuid: CartUuid,
    pub email: String,
    pub items: Vec<CartItem>,
}
