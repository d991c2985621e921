//! Menu search and category filtering.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category, MenuItem};
use crate::ledger::Inventory;

/// A storefront menu filter: free-text query plus a category tab.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogFilter {
    /// Free-text query; blank matches everything.
    pub query: String,
    /// Selected tab. [`Category::Featured`] matches every item.
    pub category: Category,
}

impl CatalogFilter {
    /// Create a filter that matches the whole menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the category tab.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Check whether a single item matches.
    ///
    /// The query is a case-insensitive substring match against the item's
    /// name, description, and tags.
    pub fn matches(&self, item: &MenuItem) -> bool {
        let q = self.query.trim().to_lowercase();
        let matches_text = q.is_empty()
            || item.name.to_lowercase().contains(&q)
            || item
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&q))
            || item.tags.iter().any(|t| t.to_lowercase().contains(&q));
        let matches_category =
            self.category == Category::Featured || item.category == self.category;
        matches_text && matches_category
    }

    /// Produce the filtered menu view.
    ///
    /// Menu order is preserved, except that out-of-stock items are stably
    /// demoted behind in-stock ones; they are never hidden.
    pub fn apply(&self, catalog: &Catalog, inventory: &Inventory) -> Vec<MenuItem> {
        let mut view: Vec<MenuItem> = catalog
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect();
        view.sort_by_key(|item| inventory.level(&item.id) <= 0);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::{default_menu, starting_stock};
    use crate::ids::ItemId;

    #[test]
    fn test_blank_filter_matches_everything() {
        let menu = default_menu();
        let view = CatalogFilter::new().apply(&menu, &starting_stock());
        assert_eq!(view.len(), menu.len());
    }

    #[test]
    fn test_query_matches_name_description_and_tags() {
        let menu = default_menu();
        let inventory = starting_stock();

        let by_name = CatalogFilter::new().with_query("cheetos");
        assert_eq!(by_name.apply(&menu, &inventory).len(), 1);

        let by_description = CatalogFilter::new().with_query("rainbow");
        assert_eq!(by_description.apply(&menu, &inventory).len(), 1);

        let by_tag = CatalogFilter::new().with_query("best-seller");
        assert_eq!(by_tag.apply(&menu, &inventory).len(), 1);

        let case_insensitive = CatalogFilter::new().with_query("OREOS");
        assert_eq!(case_insensitive.apply(&menu, &inventory).len(), 1);
    }

    #[test]
    fn test_category_tabs() {
        let menu = default_menu();
        let inventory = starting_stock();

        let drinks = CatalogFilter::new().with_category(Category::Drinks);
        assert_eq!(drinks.apply(&menu, &inventory).len(), 1);

        let snacks = CatalogFilter::new().with_category(Category::Snacks);
        assert_eq!(snacks.apply(&menu, &inventory).len(), 4);

        // Featured is the "everything" tab.
        let featured = CatalogFilter::new().with_category(Category::Featured);
        assert_eq!(featured.apply(&menu, &inventory).len(), 5);
    }

    #[test]
    fn test_out_of_stock_items_demoted_not_hidden() {
        let menu = default_menu();
        let mut inventory = starting_stock();
        inventory.set_level(&ItemId::new("drpepper-can"), 0);

        let view = CatalogFilter::new().apply(&menu, &inventory);
        assert_eq!(view.len(), menu.len());
        assert_eq!(view.last().unwrap().id.as_str(), "drpepper-can");

        // The in-stock items keep their relative menu order.
        let in_stock: Vec<&str> = view
            .iter()
            .take(4)
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(
            in_stock,
            ["oreos-snack", "hot-cheetos", "trident-spearmint", "nerds-gummy"]
        );
    }
}
