//! Persistence boundary for the ledger.
//!
//! Four keys, mirroring the storefront's original persisted layout: the
//! order list (newest-first), the inventory map, the revenue total (a
//! bare number), and the revenue history series. `load` reads them once
//! with sensible defaults; `save` rewrites all four wholesale after a
//! mutation. One writer, so the pair is the whole consistency story.

use oak_store::{store_key, Store};
use tracing::debug;

use crate::catalog::starting_stock;
use crate::checkout::Order;
use crate::config::DashConfig;
use crate::error::CommerceError;
use crate::ledger::{Inventory, Ledger, Revenue, RevenuePoint};
use crate::money::Money;

fn orders_key() -> String {
    store_key!("oakdash", "orders", "v1")
}

fn inventory_key() -> String {
    store_key!("oakdash", "inventory", "v1")
}

fn revenue_key() -> String {
    store_key!("oakdash", "revenue", "v1")
}

fn revenue_history_key() -> String {
    store_key!("oakdash", "revenue-history", "v1")
}

/// Loads and saves the ledger through an [`oak_store::Store`].
pub struct LedgerStore {
    store: Store,
    service_fee: Money,
}

impl LedgerStore {
    /// Open the store described by a config.
    pub fn open(config: &DashConfig) -> Result<Self, CommerceError> {
        Ok(Self {
            store: Store::open(&config.data_dir)?,
            service_fee: config.service_fee(),
        })
    }

    /// Load the ledger, seeding defaults for missing keys.
    ///
    /// A fresh store yields no orders, the campus starting stock, and
    /// zero revenue.
    pub fn load(&self) -> Result<Ledger, CommerceError> {
        let orders: Vec<Order> = self.store.get(&orders_key())?.unwrap_or_default();
        let inventory: Inventory = self
            .store
            .get(&inventory_key())?
            .unwrap_or_else(starting_stock);
        let total: Money = self.store.get(&revenue_key())?.unwrap_or_default();
        let history: Vec<RevenuePoint> = self
            .store
            .get(&revenue_history_key())?
            .unwrap_or_default();

        debug!(orders = orders.len(), "ledger loaded");
        Ok(Ledger::from_parts(
            orders,
            inventory,
            Revenue::from_parts(total, history),
            self.service_fee,
        ))
    }

    /// Persist the whole ledger.
    pub fn save(&self, ledger: &Ledger) -> Result<(), CommerceError> {
        self.store.set(&orders_key(), &ledger.orders())?;
        self.store.set(&inventory_key(), ledger.inventory())?;
        self.store.set(&revenue_key(), &ledger.revenue().total())?;
        self.store
            .set(&revenue_history_key(), &ledger.revenue().history())?;
        debug!(orders = ledger.orders().len(), "ledger saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::default_menu;
    use crate::checkout::{CustomerInfo, OrderStatus};
    use crate::ids::ItemId;

    fn temp_config() -> (tempfile::TempDir, DashConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = DashConfig {
            data_dir: dir.path().to_path_buf(),
            service_fee_cents: 100,
        };
        (dir, config)
    }

    #[test]
    fn test_fresh_store_loads_seeded_defaults() {
        let (_dir, config) = temp_config();
        let ledger = LedgerStore::open(&config).unwrap().load().unwrap();

        assert!(ledger.orders().is_empty());
        assert_eq!(ledger.inventory().level(&ItemId::new("hot-cheetos")), 50);
        assert!(ledger.revenue().total().is_zero());
        assert_eq!(ledger.service_fee(), Money::new(100));
    }

    #[test]
    fn test_save_then_load_round_trips_ledger() {
        let (_dir, config) = temp_config();
        let store = LedgerStore::open(&config).unwrap();
        let mut ledger = store.load().unwrap();

        let menu = default_menu();
        let mut cart = Cart::new();
        let soda = menu.get(&ItemId::new("drpepper-can")).unwrap();
        cart.add_item(soda, vec![], ledger.inventory()).unwrap();
        let id = ledger
            .checkout(&mut cart, CustomerInfo::new("Maya", "10", "Main Quad"))
            .unwrap();
        ledger.transition_order(&id, OrderStatus::PickedUp).unwrap();
        store.save(&ledger).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, ledger);
        assert_eq!(reloaded.order(&id).unwrap().status, OrderStatus::PickedUp);
        assert_eq!(reloaded.revenue().history().len(), 1);
    }

    #[test]
    fn test_persisted_revenue_is_a_bare_number() {
        let (dir, config) = temp_config();
        let store = LedgerStore::open(&config).unwrap();
        let mut ledger = store.load().unwrap();
        ledger.adjust_revenue(Money::new(450));
        store.save(&ledger).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("oakdash.revenue.v1.json")).unwrap();
        assert_eq!(raw, "450");
    }
}
