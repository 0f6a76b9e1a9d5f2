//! Inventory domain module.
//!
//! Item model (shared fields + electronics/consumable extension), partial
//! updates, raw-input coercion, and the in-memory collection. Pure domain logic:
//! no IO, no persistence, no presentation.

pub mod changes;
pub mod input;
pub mod inventory;
pub mod item;

pub use changes::ItemChanges;
pub use input::{RawChanges, RawItem};
pub use inventory::{Inventory, InventoryListing};
pub use item::{AppliedFields, ExpirationDate, Item, ItemField, ItemKind};
