use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::{debug, info, warn};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

use crate::changes::ItemChanges;
use crate::item::{AppliedFields, Item};

/// In-memory inventory: at most one item per identifier.
///
/// Every operation reports its outcome as a [`DomainResult`]; presenting
/// "not found" / "already exists" to an operator is left to the caller.
/// Items are kept ordered by identifier.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: BTreeMap<ItemId, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` unless its identifier is taken.
    ///
    /// An existing entry is never overwritten.
    pub fn add_item(&mut self, item: Item) -> DomainResult<&Item> {
        match self.items.entry(item.id().clone()) {
            Entry::Occupied(slot) => {
                warn!(item_id = %slot.key(), "item already exists");
                Err(DomainError::already_exists(slot.key()))
            }
            Entry::Vacant(slot) => {
                let item = slot.insert(item);
                info!(
                    item_id = %item.id(),
                    name = item.name(),
                    kind = item.kind().label(),
                    "item added to inventory"
                );
                Ok(item)
            }
        }
    }

    /// Apply `changes` to the stored item.
    ///
    /// Returns the fields actually written; variant fields that do not match
    /// the stored item are skipped without error.
    pub fn update_item(&mut self, id: &str, changes: &ItemChanges) -> DomainResult<AppliedFields> {
        let Some(item) = self.items.get_mut(id) else {
            warn!(item_id = id, "update for unknown item");
            return Err(DomainError::not_found(id));
        };

        let applied = item.apply(changes);
        info!(item_id = id, fields = %applied, "item updated");
        Ok(applied)
    }

    pub fn view_item(&self, id: &str) -> DomainResult<&Item> {
        debug!(item_id = id, "view item");
        self.items.get(id).ok_or_else(|| DomainError::not_found(id))
    }

    /// Remove and return the stored item.
    pub fn delete_item(&mut self, id: &str) -> DomainResult<Item> {
        match self.items.remove(id) {
            Some(item) => {
                info!(item_id = id, "item deleted");
                Ok(item)
            }
            None => {
                warn!(item_id = id, "delete for unknown item");
                Err(DomainError::not_found(id))
            }
        }
    }

    /// Snapshot of every stored item, or [`InventoryListing::Empty`].
    pub fn view_inventory(&self) -> InventoryListing<'_> {
        debug!(items = self.items.len(), "view inventory");
        if self.items.is_empty() {
            InventoryListing::Empty
        } else {
            InventoryListing::Items(self.items.values().collect())
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Sum of every item's total value.
    pub fn total_value(&self) -> f64 {
        self.items.values().map(Item::total_value).sum()
    }
}

/// Result of [`Inventory::view_inventory`].
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryListing<'a> {
    Empty,
    Items(Vec<&'a Item>),
}

impl<'a> InventoryListing<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, InventoryListing::Empty)
    }

    pub fn items(&self) -> &[&'a Item] {
        match self {
            InventoryListing::Empty => &[],
            InventoryListing::Items(items) => items,
        }
    }
}

impl core::fmt::Display for InventoryListing<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventoryListing::Empty => f.write_str("Inventory is empty."),
            InventoryListing::Items(items) => {
                f.write_str("Current Inventory:")?;
                for item in items {
                    write!(f, "\n{item}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemField;
    use proptest::prelude::*;

    fn tv() -> Item {
        Item::electronics("E1", "TV", 10, 100.0, 2)
    }

    fn bread() -> Item {
        Item::consumable("C1", "Bread", 20, 2.5, "2025-02-14")
    }

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add_item(tv()).unwrap();
        inventory.add_item(bread()).unwrap();
        inventory
    }

    #[test]
    fn added_item_is_viewable_with_identical_fields() {
        let mut inventory = Inventory::new();
        inventory.add_item(tv()).unwrap();

        assert_eq!(inventory.view_item("E1").unwrap(), &tv());
    }

    #[test]
    fn duplicate_add_keeps_original() {
        let mut inventory = stocked();
        let err = inventory
            .add_item(Item::electronics("E1", "Radio", 1, 5.0, 1))
            .unwrap_err();

        assert_eq!(err, DomainError::already_exists("E1"));
        assert_eq!(inventory.view_item("E1").unwrap().name(), "TV");
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn update_unknown_item_reports_not_found() {
        let mut inventory = stocked();
        let err = inventory
            .update_item("X9", &ItemChanges::new().with_quantity(1))
            .unwrap_err();

        assert_eq!(err, DomainError::not_found("X9"));
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn update_quantity_and_price_changes_total_value() {
        let mut inventory = stocked();
        let applied = inventory
            .update_item("C1", &ItemChanges::new().with_quantity(4).with_price(3.0))
            .unwrap();

        assert_eq!(applied.len(), 2);
        assert_eq!(inventory.view_item("C1").unwrap().total_value(), 12.0);
    }

    #[test]
    fn warranty_change_is_ignored_for_consumables() {
        let mut inventory = stocked();
        let applied = inventory
            .update_item("C1", &ItemChanges::new().with_warranty_years(3))
            .unwrap();

        assert!(applied.is_empty());
        assert_eq!(inventory.view_item("C1").unwrap(), &bread());

        let applied = inventory
            .update_item("E1", &ItemChanges::new().with_warranty_years(3))
            .unwrap();
        assert!(applied.contains(ItemField::WarrantyPeriod));
        assert_eq!(inventory.view_item("E1").unwrap().warranty_years(), Some(3));
    }

    #[test]
    fn delete_twice_reports_not_found_second_time() {
        let mut inventory = stocked();

        let removed = inventory.delete_item("E1").unwrap();
        assert_eq!(removed, tv());
        assert!(!inventory.contains("E1"));

        assert_eq!(
            inventory.delete_item("E1").unwrap_err(),
            DomainError::not_found("E1")
        );
        assert!(inventory.view_item("E1").unwrap_err().is_not_found());
    }

    #[test]
    fn empty_inventory_listing() {
        let inventory = Inventory::new();
        let listing = inventory.view_inventory();

        assert!(listing.is_empty());
        assert!(listing.items().is_empty());
        assert_eq!(listing.to_string(), "Inventory is empty.");
    }

    #[test]
    fn listing_renders_one_line_per_item() {
        let inventory = stocked();
        let listing = inventory.view_inventory();

        assert_eq!(listing.items().len(), 2);
        assert_eq!(
            listing.to_string(),
            "Current Inventory:\n\
             ID: C1, Name: Bread, Quantity: 20, Price: 2.5, Expiration Date: 2025-02-14\n\
             ID: E1, Name: TV, Quantity: 10, Price: 100.0, Warranty Period: 2 years"
        );
    }

    #[test]
    fn iter_walks_items_in_identifier_order() {
        let inventory = stocked();
        let names: Vec<&str> = inventory.iter().map(Item::name).collect();
        assert_eq!(names, ["Bread", "TV"]);
    }

    #[test]
    fn total_value_sums_items() {
        assert_eq!(stocked().total_value(), 1050.0);
        assert_eq!(Inventory::new().total_value(), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after an update, total value is the product of the new quantity and price.
        #[test]
        fn total_value_tracks_updates(
            quantity in 0u32..100_000,
            price in 0.0f64..1_000_000.0,
            electronics in any::<bool>()
        ) {
            let mut inventory = stocked();
            let id = if electronics { "E1" } else { "C1" };

            inventory
                .update_item(id, &ItemChanges::new().with_quantity(quantity).with_price(price))
                .unwrap();

            let item = inventory.view_item(id).unwrap();
            prop_assert_eq!(item.total_value(), f64::from(quantity) * price);
        }

        /// Property: add/delete keeps the collection in step with a model set of identifiers.
        #[test]
        fn add_delete_matches_model_set(
            ops in prop::collection::vec((any::<bool>(), 0u8..8), 1..64)
        ) {
            let mut inventory = Inventory::new();
            let mut model = std::collections::BTreeSet::new();

            for (add, n) in ops {
                let id = format!("I{n}");
                if add {
                    let result = inventory.add_item(Item::electronics(id.as_str(), "Widget", 1, 1.0, 1));
                    prop_assert_eq!(result.is_ok(), model.insert(id));
                } else {
                    let result = inventory.delete_item(&id);
                    prop_assert_eq!(result.is_ok(), model.remove(&id));
                }
                prop_assert_eq!(inventory.len(), model.len());
            }

            let listed: Vec<String> = inventory
                .view_inventory()
                .items()
                .iter()
                .map(|item| item.id().to_string())
                .collect();
            prop_assert_eq!(listed, model.into_iter().collect::<Vec<_>>());
        }
    }
}
