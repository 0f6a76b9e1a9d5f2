use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId, ValueObject};

use crate::changes::ItemChanges;

/// Expiration date of a consumable.
///
/// Canonical `YYYY-MM-DD` input becomes a calendar date; anything else
/// (including unpadded or signed dates chrono would accept) is kept verbatim,
/// so the value always renders as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpirationDate {
    Date(NaiveDate),
    Text(String),
}

impl ExpirationDate {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            Ok(date) if date.format("%Y-%m-%d").to_string() == input => Self::Date(date),
            _ => Self::Text(input.to_string()),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(_) => None,
        }
    }
}

impl ValueObject for ExpirationDate {}

impl From<NaiveDate> for ExpirationDate {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<&str> for ExpirationDate {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl core::fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Variant-specific part of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Electronics { warranty_years: u32 },
    Consumable { expiration_date: ExpirationDate },
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Electronics { .. } => "electronics",
            ItemKind::Consumable { .. } => "consumable",
        }
    }
}

/// A field that an [`ItemChanges`] set can touch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    Quantity,
    Price,
    WarrantyPeriod,
    ExpirationDate,
}

impl ItemField {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Quantity => "quantity",
            ItemField::Price => "price",
            ItemField::WarrantyPeriod => "warranty_period",
            ItemField::ExpirationDate => "expiration_date",
        }
    }
}

/// Fields actually written by [`Item::apply`], in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedFields(Vec<ItemField>);

impl AppliedFields {
    pub fn contains(&self, field: ItemField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemField> + '_ {
        self.0.iter().copied()
    }

    fn push(&mut self, field: ItemField) {
        self.0.push(field);
    }
}

impl core::fmt::Display for AppliedFields {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (idx, field) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.as_str())?;
        }
        Ok(())
    }
}

/// A stocked product: shared attributes plus a variant-specific extension.
///
/// The model accepts any `f64` price. Non-finite prices serialize to JSON
/// `null` and do not deserialize back; [`crate::input::parse_price`] rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: u32,
    price: f64,
    kind: ItemKind,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
        kind: ItemKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
            kind,
        }
    }

    pub fn electronics(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
        warranty_years: u32,
    ) -> Self {
        Self::new(id, name, quantity, price, ItemKind::Electronics { warranty_years })
    }

    pub fn consumable(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
        expiration_date: impl Into<ExpirationDate>,
    ) -> Self {
        let expiration_date = expiration_date.into();
        Self::new(id, name, quantity, price, ItemKind::Consumable { expiration_date })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Warranty period in years; `None` for consumables.
    pub fn warranty_years(&self) -> Option<u32> {
        match &self.kind {
            ItemKind::Electronics { warranty_years } => Some(*warranty_years),
            ItemKind::Consumable { .. } => None,
        }
    }

    /// Returns `false` (and changes nothing) when the item is not electronics.
    pub fn set_warranty_years(&mut self, years: u32) -> bool {
        match &mut self.kind {
            ItemKind::Electronics { warranty_years } => {
                *warranty_years = years;
                true
            }
            ItemKind::Consumable { .. } => false,
        }
    }

    /// Expiration date; `None` for electronics.
    pub fn expiration_date(&self) -> Option<&ExpirationDate> {
        match &self.kind {
            ItemKind::Consumable { expiration_date } => Some(expiration_date),
            ItemKind::Electronics { .. } => None,
        }
    }

    /// Returns `false` (and changes nothing) when the item is not a consumable.
    pub fn set_expiration_date(&mut self, date: impl Into<ExpirationDate>) -> bool {
        match &mut self.kind {
            ItemKind::Consumable { expiration_date } => {
                *expiration_date = date.into();
                true
            }
            ItemKind::Electronics { .. } => false,
        }
    }

    /// Quantity times unit price, unrounded.
    pub fn total_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    /// Whether a consumable with a calendar expiration date is past it on `today`.
    ///
    /// Electronics and free-text dates never report expired.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiration_date()
            .and_then(ExpirationDate::as_date)
            .is_some_and(|date| date < today)
    }

    /// Apply a change set.
    ///
    /// Shared fields always apply; variant fields apply only to the matching
    /// variant and are otherwise ignored.
    pub fn apply(&mut self, changes: &ItemChanges) -> AppliedFields {
        let mut applied = AppliedFields::default();

        if let Some(name) = &changes.name {
            self.set_name(name.clone());
            applied.push(ItemField::Name);
        }
        if let Some(quantity) = changes.quantity {
            self.set_quantity(quantity);
            applied.push(ItemField::Quantity);
        }
        if let Some(price) = changes.price {
            self.set_price(price);
            applied.push(ItemField::Price);
        }
        if let Some(years) = changes.warranty_years {
            if self.set_warranty_years(years) {
                applied.push(ItemField::WarrantyPeriod);
            }
        }
        if let Some(date) = &changes.expiration_date {
            if self.set_expiration_date(date.clone()) {
                applied.push(ItemField::ExpirationDate);
            }
        }

        applied
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // `{:?}` keeps the decimal point on whole prices ("100.0").
        write!(
            f,
            "ID: {}, Name: {}, Quantity: {}, Price: {:?}",
            self.id, self.name, self.quantity, self.price
        )?;
        match &self.kind {
            ItemKind::Electronics { warranty_years } => {
                write!(f, ", Warranty Period: {warranty_years} years")
            }
            ItemKind::Consumable { expiration_date } => {
                write!(f, ", Expiration Date: {expiration_date}")
            }
        }
    }
}
