//! Menu item and category types.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::money::Money;

/// Menu category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The storefront's default tab; as a filter it matches every item.
    #[default]
    Featured,
    Snacks,
    Drinks,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Featured => "featured",
            Category::Snacks => "snacks",
            Category::Drinks => "drinks",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Featured => "Featured",
            Category::Snacks => "Snacks",
            Category::Drinks => "Drinks",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "featured" => Some(Category::Featured),
            "snacks" => Some(Category::Snacks),
            "drinks" => Some(Category::Drinks),
            _ => None,
        }
    }
}

/// An item on the menu.
///
/// Menu items are defined at startup and never mutated; stock levels live
/// in the ledger's [`Inventory`](crate::ledger::Inventory), not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique item identifier (a slug, e.g. "hot-cheetos").
    pub id: ItemId,
    /// Item name as shown on the menu.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Menu category.
    pub category: Category,
    /// Short description for the menu card.
    pub description: Option<String>,
    /// Tags for search ("cold", "best-seller", ...).
    pub tags: Vec<String>,
}

impl MenuItem {
    /// Create a new menu item with no description or tags.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            description: None,
            tags: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Check for an exact tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
