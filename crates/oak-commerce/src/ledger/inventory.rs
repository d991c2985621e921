//! Inventory levels per menu item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::checkout::OrderLine;
use crate::ids::ItemId;

/// Units available per item.
///
/// Levels never go negative: every decrement either validates first
/// (checkout, uncancel) or clamps at zero (runner edits). Serializes as
/// a plain `{item id: units}` map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Inventory {
    levels: BTreeMap<ItemId, i64>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory from `(item, units)` pairs.
    ///
    /// Negative seed values clamp to zero.
    pub fn from_levels(levels: impl IntoIterator<Item = (ItemId, i64)>) -> Self {
        Self {
            levels: levels
                .into_iter()
                .map(|(id, units)| (id, units.max(0)))
                .collect(),
        }
    }

    /// Units available for an item (zero when unknown).
    pub fn level(&self, id: &ItemId) -> i64 {
        self.levels.get(id).copied().unwrap_or(0)
    }

    /// Check whether a quantity can be fulfilled.
    pub fn can_fulfill(&self, id: &ItemId, quantity: i64) -> bool {
        self.level(id) >= quantity
    }

    /// Check if an item is out of stock.
    pub fn is_out_of_stock(&self, id: &ItemId) -> bool {
        self.level(id) <= 0
    }

    /// Set an exact level, clamped to zero.
    ///
    /// Returns the new level.
    pub fn set_level(&mut self, id: &ItemId, units: i64) -> i64 {
        let units = units.max(0);
        self.levels.insert(id.clone(), units);
        units
    }

    /// Adjust a level by a signed delta, clamped to zero.
    ///
    /// Returns the new level.
    pub fn adjust(&mut self, id: &ItemId, delta: i64) -> i64 {
        let units = (self.level(id) + delta).max(0);
        self.levels.insert(id.clone(), units);
        units
    }

    /// Deduct sold units for every order line.
    ///
    /// Callers validate availability first; the clamp only guards the
    /// non-negativity invariant.
    pub(crate) fn apply_sale(&mut self, lines: &[OrderLine]) {
        for line in lines {
            self.adjust(&line.item_id, -line.quantity);
        }
    }

    /// Put sold units back for every order line.
    pub(crate) fn restock_lines(&mut self, lines: &[OrderLine]) {
        for line in lines {
            self.adjust(&line.item_id, line.quantity);
        }
    }

    /// Iterate `(item, units)` pairs in item order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, i64)> {
        self.levels.iter().map(|(id, units)| (id, *units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::new(s)
    }

    #[test]
    fn test_unknown_item_is_zero() {
        let inventory = Inventory::new();
        assert_eq!(inventory.level(&id("ghost")), 0);
        assert!(inventory.is_out_of_stock(&id("ghost")));
    }

    #[test]
    fn test_adjust_clamps_at_zero() {
        let mut inventory = Inventory::from_levels([(id("oreos-snack"), 2)]);

        assert_eq!(inventory.adjust(&id("oreos-snack"), -5), 0);
        assert_eq!(inventory.level(&id("oreos-snack")), 0);
        assert_eq!(inventory.adjust(&id("oreos-snack"), 3), 3);
    }

    #[test]
    fn test_set_level_clamps_at_zero() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.set_level(&id("drpepper-can"), -4), 0);
        assert_eq!(inventory.set_level(&id("drpepper-can"), 12), 12);
    }

    #[test]
    fn test_can_fulfill() {
        let inventory = Inventory::from_levels([(id("nerds-gummy"), 3)]);
        assert!(inventory.can_fulfill(&id("nerds-gummy"), 3));
        assert!(!inventory.can_fulfill(&id("nerds-gummy"), 4));
    }

    #[test]
    fn test_negative_seed_clamped() {
        let inventory = Inventory::from_levels([(id("bad"), -7)]);
        assert_eq!(inventory.level(&id("bad")), 0);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let inventory = Inventory::from_levels([(id("drpepper-can"), 12)]);
        let json = serde_json::to_string(&inventory).unwrap();
        assert_eq!(json, r#"{"drpepper-can":12}"#);
    }
}
