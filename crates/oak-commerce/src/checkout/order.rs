//! Order types and the status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cart::{Cart, CartLine, SelectedOption};
use crate::checkout::CustomerInfo;
use crate::error::CommerceError;
use crate::ids::{ItemId, OrderId};
use crate::money::Money;

/// Order status.
///
/// The delivery run moves forward one step at a time:
/// queued → picked-up → delivering → delivered. Any pre-delivery order
/// can be canceled; a canceled order can be re-queued (subject to stock)
/// and a delivered one refunded. Refunded is the end of the line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order placed, waiting for a runner.
    #[default]
    Queued,
    /// Runner has the goods in hand.
    PickedUp,
    /// On the way to the meet location.
    Delivering,
    /// Handed off to the customer.
    Delivered,
    /// Called off before delivery.
    Canceled,
    /// Delivered, then paid back.
    Refunded,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Queued => "queued",
            OrderStatus::PickedUp => "picked-up",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Refunded => "refunded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Queued => "Queued",
            OrderStatus::PickedUp => "Picked up",
            OrderStatus::Delivering => "Delivering",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Canceled => "Canceled",
            OrderStatus::Refunded => "Refunded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "queued" => Some(OrderStatus::Queued),
            "picked-up" => Some(OrderStatus::PickedUp),
            "delivering" => Some(OrderStatus::Delivering),
            "delivered" => Some(OrderStatus::Delivered),
            "canceled" => Some(OrderStatus::Canceled),
            "refunded" => Some(OrderStatus::Refunded),
            _ => None,
        }
    }

    /// Check if the order can still be canceled.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Queued | OrderStatus::PickedUp | OrderStatus::Delivering
        )
    }

    /// Check if a runner-initiated transition is allowed.
    pub fn can_transition(&self, to: OrderStatus) -> bool {
        matches!(
            (self, to),
            (OrderStatus::Queued, OrderStatus::PickedUp)
                | (OrderStatus::PickedUp, OrderStatus::Delivering)
                | (OrderStatus::Delivering, OrderStatus::Delivered)
                | (OrderStatus::Canceled, OrderStatus::Queued)
                | (OrderStatus::Delivered, OrderStatus::Refunded)
        ) || (self.can_cancel() && to == OrderStatus::Canceled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A line in an order: a frozen snapshot of a cart line.
///
/// Holds no live references, so later menu or inventory changes never
/// alter historical orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Item that was sold.
    pub item_id: ItemId,
    /// Item name at time of sale.
    pub name: String,
    /// Unit price at time of sale.
    pub unit_price: Money,
    /// Quantity sold.
    pub quantity: i64,
    /// Options selected at time of sale.
    pub options: Vec<SelectedOption>,
}

impl OrderLine {
    fn snapshot(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            options: line.options.clone(),
        }
    }

    /// Price for this line.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Short order token (e.g., "OW-7KQ2PX").
    pub id: OrderId,
    /// Snapshot of the cart at sale time.
    pub lines: Vec<OrderLine>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Service fee charged.
    pub fee: Money,
    /// Amount charged (subtotal + fee).
    pub total: Money,
    /// Delivery details.
    pub customer: CustomerInfo,
    /// Current status.
    pub status: OrderStatus,
    /// Unix timestamp of placement.
    pub created_at: i64,
    /// Unix timestamp of the last cancellation, if any.
    pub canceled_at: Option<i64>,
}

impl Order {
    /// Build an order from the current cart.
    ///
    /// Totals are recomputed from the snapshot lines, never carried over,
    /// so `total` can't silently diverge from what was sold.
    pub(crate) fn from_cart(
        cart: &Cart,
        customer: CustomerInfo,
        fee: Money,
    ) -> Result<Self, CommerceError> {
        let lines: Vec<OrderLine> = cart.lines().iter().map(OrderLine::snapshot).collect();

        let mut subtotal = Money::ZERO;
        for line in &lines {
            let line_total = line
                .unit_price
                .try_mul(line.quantity)
                .ok_or(CommerceError::Overflow)?;
            subtotal = subtotal.try_add(line_total).ok_or(CommerceError::Overflow)?;
        }
        let fee = if lines.is_empty() { Money::ZERO } else { fee };
        let total = subtotal.try_add(fee).ok_or(CommerceError::Overflow)?;

        Ok(Self {
            id: OrderId::generate(),
            lines,
            subtotal,
            fee,
            total,
            customer,
            status: OrderStatus::Queued,
            created_at: current_timestamp(),
            canceled_at: None,
        })
    }

    /// Total item count.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, MenuItem};
    use crate::ledger::Inventory;

    #[test]
    fn test_forward_chain() {
        assert!(OrderStatus::Queued.can_transition(OrderStatus::PickedUp));
        assert!(OrderStatus::PickedUp.can_transition(OrderStatus::Delivering));
        assert!(OrderStatus::Delivering.can_transition(OrderStatus::Delivered));

        // No skipping ahead or moving backwards.
        assert!(!OrderStatus::Queued.can_transition(OrderStatus::Delivered));
        assert!(!OrderStatus::Delivering.can_transition(OrderStatus::Queued));
    }

    #[test]
    fn test_cancel_branch() {
        assert!(OrderStatus::Queued.can_transition(OrderStatus::Canceled));
        assert!(OrderStatus::PickedUp.can_transition(OrderStatus::Canceled));
        assert!(OrderStatus::Delivering.can_transition(OrderStatus::Canceled));

        assert!(!OrderStatus::Delivered.can_transition(OrderStatus::Canceled));
        assert!(!OrderStatus::Refunded.can_transition(OrderStatus::Canceled));
    }

    #[test]
    fn test_uncancel_and_refund_edges() {
        assert!(OrderStatus::Canceled.can_transition(OrderStatus::Queued));
        assert!(OrderStatus::Delivered.can_transition(OrderStatus::Refunded));

        // Refunded is terminal.
        for to in [
            OrderStatus::Queued,
            OrderStatus::PickedUp,
            OrderStatus::Delivering,
            OrderStatus::Delivered,
            OrderStatus::Canceled,
        ] {
            assert!(!OrderStatus::Refunded.can_transition(to));
        }
    }

    #[test]
    fn test_status_string_round_trip() {
        for status in [
            OrderStatus::Queued,
            OrderStatus::PickedUp,
            OrderStatus::Delivering,
            OrderStatus::Delivered,
            OrderStatus::Canceled,
            OrderStatus::Refunded,
        ] {
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_order_totals_recomputed_from_lines() {
        let mut cart = Cart::new();
        let inventory = Inventory::from_levels([(ItemId::new("oreos-snack"), 10)]);
        let item = MenuItem::new("oreos-snack", "Oreos (Snack Pack)", Money::new(250), Category::Snacks);
        cart.add_item(&item, vec![], &inventory).unwrap();
        cart.add_item(&item, vec![], &inventory).unwrap();

        let order =
            Order::from_cart(&cart, CustomerInfo::new("Maya", "10", "Main Quad"), Money::new(100))
                .unwrap();

        assert_eq!(order.subtotal, Money::new(500));
        assert_eq!(order.fee, Money::new(100));
        assert_eq!(order.total, Money::new(600));
        assert_eq!(order.status, OrderStatus::Queued);
        assert_eq!(order.item_count(), 2);
        assert!(order.id.as_str().starts_with("OW-"));
    }
}
