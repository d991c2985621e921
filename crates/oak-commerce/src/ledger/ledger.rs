//! The order/inventory/revenue ledger.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::cart::{Cart, CartTotals};
use crate::checkout::{CustomerInfo, Order, OrderStatus};
use crate::error::{CommerceError, StockShortage};
use crate::ids::{ItemId, OrderId};
use crate::ledger::{Inventory, Revenue};
use crate::money::Money;

/// The one owned record of orders, inventory, and revenue.
///
/// Checkout is the only operation that touches all three, and it does so
/// in a single synchronous step: everything mutates, or nothing does.
/// Orders are kept newest-first, in memory and as persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    orders: Vec<Order>,
    inventory: Inventory,
    revenue: Revenue,
    service_fee: Money,
}

impl Ledger {
    /// Create an empty ledger with the given service fee.
    pub fn new(service_fee: Money) -> Self {
        Self {
            orders: Vec::new(),
            inventory: Inventory::new(),
            revenue: Revenue::new(),
            service_fee,
        }
    }

    /// Rebuild a ledger from persisted parts.
    pub fn from_parts(
        orders: Vec<Order>,
        inventory: Inventory,
        revenue: Revenue,
        service_fee: Money,
    ) -> Self {
        Self {
            orders,
            inventory,
            revenue,
            service_fee,
        }
    }

    /// Orders, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order.
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Current inventory levels.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The revenue ledger.
    pub fn revenue(&self) -> &Revenue {
        &self.revenue
    }

    /// The configured service fee.
    pub fn service_fee(&self) -> Money {
        self.service_fee
    }

    /// Totals for a cart under this ledger's service fee.
    pub fn cart_totals(&self, cart: &Cart) -> Result<CartTotals, CommerceError> {
        cart.totals(self.service_fee)
    }

    /// Orders per status (the dashboard's status chips).
    pub fn status_counts(&self) -> BTreeMap<OrderStatus, usize> {
        let mut counts = BTreeMap::new();
        for order in &self.orders {
            *counts.entry(order.status).or_insert(0) += 1;
        }
        counts
    }

    /// Place an order from the current cart.
    ///
    /// Validates the customer details and every line's stock first; any
    /// failure reports the problem (every short item, not just the first)
    /// and leaves the ledger and cart untouched. On success, in one step:
    /// the order is created queued at the head of the list, inventory is
    /// decremented per line, the total is credited to revenue, and the
    /// cart is cleared.
    pub fn checkout(
        &mut self,
        cart: &mut Cart,
        customer: CustomerInfo,
    ) -> Result<OrderId, CommerceError> {
        customer.validate()?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let shortages = self.cart_shortages(cart);
        if !shortages.is_empty() {
            warn!(short = shortages.len(), "checkout rejected: insufficient stock");
            return Err(CommerceError::InsufficientStock(shortages));
        }

        let order = Order::from_cart(cart, customer, self.service_fee)?;
        self.inventory.apply_sale(&order.lines);
        self.revenue.record(order.total, order.created_at);
        info!(order = %order.id, total = %order.total, items = order.item_count(), "order placed");

        let id = order.id.clone();
        self.orders.insert(0, order);
        cart.clear();
        Ok(id)
    }

    /// Apply a runner-initiated status change.
    ///
    /// Transitions outside the state machine are rejected without
    /// touching anything. Canceling restocks the order's lines and debits
    /// its total from revenue; un-canceling re-validates stock and then
    /// re-applies both; refunding a delivered order reverses like a
    /// cancel. Forward moves carry no side effects.
    pub fn transition_order(
        &mut self,
        id: &OrderId,
        to: OrderStatus,
    ) -> Result<(), CommerceError> {
        let idx = self
            .orders
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.clone()))?;
        let from = self.orders[idx].status;
        if !from.can_transition(to) {
            return Err(CommerceError::InvalidTransition { from, to });
        }

        let now = current_timestamp();
        match to {
            OrderStatus::Canceled => {
                let (lines, total) = {
                    let order = &self.orders[idx];
                    (order.lines.clone(), order.total)
                };
                self.inventory.restock_lines(&lines);
                self.revenue.record(-total, now);
                let order = &mut self.orders[idx];
                order.status = OrderStatus::Canceled;
                order.canceled_at = Some(now);
            }
            OrderStatus::Queued => {
                // Uncancel: the stock may have been sold on since.
                let shortages = self.order_shortages(&self.orders[idx]);
                if !shortages.is_empty() {
                    warn!(order = %id, "uncancel rejected: insufficient stock");
                    return Err(CommerceError::InsufficientStock(shortages));
                }
                let (lines, total) = {
                    let order = &self.orders[idx];
                    (order.lines.clone(), order.total)
                };
                self.inventory.apply_sale(&lines);
                self.revenue.record(total, now);
                let order = &mut self.orders[idx];
                order.status = OrderStatus::Queued;
                order.canceled_at = None;
            }
            OrderStatus::Refunded => {
                let (lines, total) = {
                    let order = &self.orders[idx];
                    (order.lines.clone(), order.total)
                };
                self.inventory.restock_lines(&lines);
                self.revenue.record(-total, now);
                self.orders[idx].status = OrderStatus::Refunded;
            }
            _ => {
                self.orders[idx].status = to;
            }
        }

        info!(order = %id, %from, %to, "order status changed");
        Ok(())
    }

    /// Delete an order, reversing it first if needed.
    ///
    /// An order that is not already canceled or refunded gets the cancel
    /// side effects (restock, revenue debit) before the record is
    /// removed. No tombstone remains.
    pub fn delete_order(&mut self, id: &OrderId) -> Result<Order, CommerceError> {
        let idx = self
            .orders
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.clone()))?;

        if !matches!(
            self.orders[idx].status,
            OrderStatus::Canceled | OrderStatus::Refunded
        ) {
            let (lines, total) = {
                let order = &self.orders[idx];
                (order.lines.clone(), order.total)
            };
            self.inventory.restock_lines(&lines);
            self.revenue.record(-total, current_timestamp());
        }

        let order = self.orders.remove(idx);
        info!(order = %order.id, "order deleted");
        Ok(order)
    }

    /// Adjust an item's stock by a signed delta, clamped at zero.
    ///
    /// Returns the new level.
    pub fn adjust_inventory(&mut self, id: &ItemId, delta: i64) -> i64 {
        let level = self.inventory.adjust(id, delta);
        debug!(item = %id, delta, level, "inventory adjusted");
        level
    }

    /// Set an item's stock to an exact count, clamped at zero.
    ///
    /// Returns the new level.
    pub fn set_inventory(&mut self, id: &ItemId, units: i64) -> i64 {
        let level = self.inventory.set_level(id, units);
        debug!(item = %id, level, "inventory set");
        level
    }

    /// Manually adjust revenue by a signed amount.
    ///
    /// Zero is a no-op; anything else lands in the history series like
    /// every other movement.
    pub fn adjust_revenue(&mut self, delta: Money) {
        if delta.is_zero() {
            return;
        }
        self.revenue.record(delta, current_timestamp());
        info!(%delta, total = %self.revenue.total(), "revenue adjusted");
    }

    /// Per-item shortages for a set of lines, aggregated per item so two
    /// lines of the same item are checked as one demand.
    fn shortages_for<'a>(
        &self,
        lines: impl Iterator<Item = (&'a ItemId, i64, &'a str)>,
    ) -> Vec<StockShortage> {
        let mut requested: BTreeMap<&ItemId, (i64, &str)> = BTreeMap::new();
        for (item_id, quantity, name) in lines {
            let entry = requested.entry(item_id).or_insert((0, name));
            entry.0 += quantity;
        }
        requested
            .into_iter()
            .filter(|(id, (quantity, _))| !self.inventory.can_fulfill(id, *quantity))
            .map(|(id, (quantity, name))| StockShortage {
                item_id: id.clone(),
                name: name.to_string(),
                requested: quantity,
                available: self.inventory.level(id),
            })
            .collect()
    }

    fn cart_shortages(&self, cart: &Cart) -> Vec<StockShortage> {
        self.shortages_for(
            cart.lines()
                .iter()
                .map(|l| (&l.item_id, l.quantity, l.name.as_str())),
        )
    }

    fn order_shortages(&self, order: &Order) -> Vec<StockShortage> {
        self.shortages_for(
            order
                .lines
                .iter()
                .map(|l| (&l.item_id, l.quantity, l.name.as_str())),
        )
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
