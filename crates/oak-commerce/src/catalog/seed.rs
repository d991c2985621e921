//! Seeded menu and starting stock for the campus storefront.

use crate::catalog::{Catalog, Category, MenuItem};
use crate::ids::ItemId;
use crate::ledger::Inventory;
use crate::money::Money;

/// The default campus menu.
pub fn default_menu() -> Catalog {
    Catalog::new(vec![
        MenuItem::new(
            "drpepper-can",
            "Dr Pepper (12oz Can)",
            Money::new(200),
            Category::Drinks,
        )
        .with_description("Cold can from the case.")
        .with_tag("cold"),
        MenuItem::new(
            "oreos-snack",
            "Oreos (Snack Pack)",
            Money::new(250),
            Category::Snacks,
        )
        .with_description("Mini sleeve of Oreos."),
        MenuItem::new(
            "hot-cheetos",
            "Hot Cheetos (Snack Bag)",
            Money::new(299),
            Category::Snacks,
        )
        .with_description("Spicy, crunchy, elite.")
        .with_tag("best-seller"),
        MenuItem::new(
            "trident-spearmint",
            "Trident Gum — Spearmint (14ct)",
            Money::new(150),
            Category::Snacks,
        )
        .with_description("Fresh breath on deck."),
        MenuItem::new(
            "nerds-gummy",
            "Nerds Gummy Clusters (3oz)",
            Money::new(299),
            Category::Snacks,
        )
        .with_description("Rainbow clusters. Crunch then chew."),
    ])
}

/// Stock levels a fresh ledger starts with.
pub fn starting_stock() -> Inventory {
    Inventory::from_levels([
        (ItemId::new("drpepper-can"), 12),
        (ItemId::new("oreos-snack"), 30),
        (ItemId::new("hot-cheetos"), 50),
        (ItemId::new("trident-spearmint"), 15),
        (ItemId::new("nerds-gummy"), 12),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_matches_starting_stock() {
        let menu = default_menu();
        let stock = starting_stock();

        assert_eq!(menu.len(), 5);
        for item in menu.iter() {
            assert!(
                stock.level(&item.id) > 0,
                "no starting stock for {}",
                item.id
            );
            assert!(item.price.is_positive());
        }
    }
}
