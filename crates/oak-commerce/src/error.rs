//! Commerce error types.

use thiserror::Error;

use crate::checkout::OrderStatus;
use crate::ids::{ItemId, LineId, OrderId};

/// One item that cannot be fulfilled at the requested quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockShortage {
    /// The short item.
    pub item_id: ItemId,
    /// Display name captured for the notice.
    pub name: String,
    /// Units the order asks for.
    pub requested: i64,
    /// Units currently available.
    pub available: i64,
}

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Menu item not found.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Cart line not found.
    #[error("Cart line not found: {0}")]
    LineNotFound(LineId),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Not enough stock to add or grow a cart line.
    #[error("Not enough {name} in stock ({available} available)")]
    OutOfStock {
        item_id: ItemId,
        name: String,
        available: i64,
    },

    /// Checkout or uncancel blocked by one or more short items.
    #[error("Insufficient stock for {}", shortage_list(.0))]
    InsufficientStock(Vec<StockShortage>),

    /// A required checkout field is blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Order status change not allowed by the state machine.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Configuration could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Persistence layer failure.
    #[error("Store error: {0}")]
    Store(#[from] oak_store::StoreError),
}

fn shortage_list(shortages: &[StockShortage]) -> String {
    shortages
        .iter()
        .map(|s| format!("{} (requested {}, available {})", s.name, s.requested, s.available))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_names_every_short_item() {
        let err = CommerceError::InsufficientStock(vec![
            StockShortage {
                item_id: ItemId::new("drpepper-can"),
                name: "Dr Pepper (12oz Can)".to_string(),
                requested: 2,
                available: 1,
            },
            StockShortage {
                item_id: ItemId::new("oreos-snack"),
                name: "Oreos (Snack Pack)".to_string(),
                requested: 1,
                available: 0,
            },
        ]);

        let msg = err.to_string();
        assert!(msg.contains("Dr Pepper (12oz Can) (requested 2, available 1)"));
        assert!(msg.contains("Oreos (Snack Pack) (requested 1, available 0)"));
    }

    #[test]
    fn test_out_of_stock_message() {
        let err = CommerceError::OutOfStock {
            item_id: ItemId::new("hot-cheetos"),
            name: "Hot Cheetos (Snack Bag)".to_string(),
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "Not enough Hot Cheetos (Snack Bag) in stock (0 available)"
        );
    }
}
