//! Cart totals.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Default flat service fee, applied once per non-empty order.
pub const SERVICE_FEE: Money = Money { cents: 100 };

/// Totals for the current cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Flat delivery fee; zero for an empty cart.
    pub service_fee: Money,
    /// Amount the customer pays.
    pub total: Money,
}
