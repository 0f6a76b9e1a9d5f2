use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

use crate::item::ExpirationDate;

/// Partial update for an item: every `None` field is left untouched.
///
/// Variant-specific fields are carried regardless of the target's variant;
/// [`Item::apply`](crate::Item::apply) decides whether they take effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<ExpirationDate>,
}

impl ItemChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_warranty_years(mut self, years: u32) -> Self {
        self.warranty_years = Some(years);
        self
    }

    pub fn with_expiration_date(mut self, date: impl Into<ExpirationDate>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.warranty_years.is_none()
            && self.expiration_date.is_none()
    }
}

impl ValueObject for ItemChanges {}
