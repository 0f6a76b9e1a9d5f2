//! Coercion of raw operator input into typed item values.
//!
//! Drivers collect text; these helpers turn it into items and change sets.
//! A coercion failure aborts the attempt with [`DomainError::InputCoercion`].

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::changes::ItemChanges;
use crate::item::{ExpirationDate, Item};

pub fn parse_quantity(input: &str) -> DomainResult<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|e| DomainError::coercion("quantity", input, e))
}

pub fn parse_price(input: &str) -> DomainResult<f64> {
    let price = input
        .trim()
        .parse::<f64>()
        .map_err(|e| DomainError::coercion("price", input, e))?;
    if !price.is_finite() {
        return Err(DomainError::coercion("price", input, "price must be a finite number"));
    }
    Ok(price)
}

pub fn parse_warranty_years(input: &str) -> DomainResult<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|e| DomainError::coercion("warranty period", input, e))
}

/// Never fails: text that is not `YYYY-MM-DD` is kept as entered.
pub fn parse_expiration_date(input: &str) -> ExpirationDate {
    ExpirationDate::parse(input)
}

/// The five raw fields a driver collects to create an item.
///
/// The identifier is taken verbatim so later lookups with the same text match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl RawItem {
    pub fn into_electronics(self, warranty_years: &str) -> DomainResult<Item> {
        let (id, name, quantity, price) = self.coerce()?;
        let warranty_years = parse_warranty_years(warranty_years)?;
        Ok(Item::electronics(id, name, quantity, price, warranty_years))
    }

    pub fn into_consumable(self, expiration_date: &str) -> DomainResult<Item> {
        let (id, name, quantity, price) = self.coerce()?;
        Ok(Item::consumable(
            id,
            name,
            quantity,
            price,
            parse_expiration_date(expiration_date),
        ))
    }

    fn coerce(self) -> DomainResult<(ItemId, String, u32, f64)> {
        let quantity = parse_quantity(&self.quantity)?;
        let price = parse_price(&self.price)?;
        Ok((ItemId::new(self.id), self.name, quantity, price))
    }
}

/// Raw update entries; `None` or blank text means "keep current".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawChanges {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub warranty_years: Option<String>,
    pub expiration_date: Option<String>,
}

impl RawChanges {
    /// Coerce every non-blank entry. The first failure aborts the whole set.
    pub fn into_changes(self) -> DomainResult<ItemChanges> {
        Ok(ItemChanges {
            name: non_blank(self.name),
            quantity: non_blank(self.quantity)
                .map(|q| parse_quantity(&q))
                .transpose()?,
            price: non_blank(self.price).map(|p| parse_price(&p)).transpose()?,
            warranty_years: non_blank(self.warranty_years)
                .map(|w| parse_warranty_years(&w))
                .transpose()?,
            expiration_date: non_blank(self.expiration_date).map(|d| parse_expiration_date(&d)),
        })
    }
}

fn non_blank(entry: Option<String>) -> Option<String> {
    entry.filter(|s| !s.trim().is_empty())
}
