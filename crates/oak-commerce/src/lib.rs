//! Storefront domain types and logic for OakDash.
//!
//! This crate is the order/inventory/revenue core of a student-run campus
//! snack delivery service:
//!
//! - **Catalog**: the menu, categories, search/category filtering
//! - **Cart**: session cart with stock-aware line items and totals
//! - **Checkout**: customer details, placed orders, the status machine
//! - **Ledger**: the one owned record of orders, inventory, and revenue
//!
//! # Example
//!
//! ```rust,ignore
//! use oak_commerce::prelude::*;
//!
//! let config = DashConfig::default();
//! let store = LedgerStore::open(&config)?;
//! let mut ledger = store.load()?;
//!
//! // Build a cart from the menu
//! let menu = default_menu();
//! let mut cart = Cart::new();
//! let soda = menu.get(&ItemId::new("drpepper-can")).unwrap();
//! cart.add_item(soda, vec![], ledger.inventory())?;
//!
//! // Place the order and persist
//! let order_id = ledger.checkout(
//!     &mut cart,
//!     CustomerInfo::new("Maya", "10", "Main Quad"),
//! )?;
//! store.save(&ledger)?;
//! println!("Order placed! Your ID is {order_id}");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod ledger;
pub mod store;

pub use config::DashConfig;
pub use error::{CommerceError, StockShortage};
pub use ids::*;
pub use money::Money;
pub use store::LedgerStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::DashConfig;
    pub use crate::error::{CommerceError, StockShortage};
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::store::LedgerStore;

    // Catalog
    pub use crate::catalog::{default_menu, starting_stock, Catalog, CatalogFilter, Category, MenuItem};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, SelectedOption, SERVICE_FEE};

    // Checkout
    pub use crate::checkout::{CustomerInfo, Order, OrderLine, OrderStatus};

    // Ledger
    pub use crate::ledger::{DailyRevenue, Inventory, Ledger, Revenue, RevenuePoint};
}
