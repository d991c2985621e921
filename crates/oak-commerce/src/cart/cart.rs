//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::cart::CartTotals;
use crate::catalog::MenuItem;
use crate::error::CommerceError;
use crate::ids::{ItemId, LineId};
use crate::ledger::Inventory;
use crate::money::Money;

/// One selected option on a cart line (e.g., Flavor: Cherry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectedOption {
    /// Option name (e.g., "Flavor").
    pub name: String,
    /// Option value (e.g., "Cherry").
    pub value: String,
}

impl SelectedOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A line item in the cart.
///
/// Line identity is `(item_id, canonical options)`; distinct option
/// selections of the same item form separate lines. The generated
/// [`LineId`] is the handle the presentation layer edits by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: LineId,
    /// Item being purchased.
    pub item_id: ItemId,
    /// Item name (denormalized for display).
    pub name: String,
    /// Unit price captured from the menu.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// Selected options, kept sorted.
    pub options: Vec<SelectedOption>,
}

impl CartLine {
    fn new(item: &MenuItem, options: Vec<SelectedOption>) -> Self {
        Self {
            id: LineId::generate(),
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
            options,
        }
    }

    /// Price for this line (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// The customer's session cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by ID.
    pub fn get_line(&self, line_id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Units of one item across all of its lines.
    pub fn quantity_of(&self, item_id: &ItemId) -> i64 {
        self.lines
            .iter()
            .filter(|l| &l.item_id == item_id)
            .map(|l| l.quantity)
            .sum()
    }

    /// Add one unit of an item to the cart.
    ///
    /// Merges into the line with the same item and option selection, or
    /// starts a new line at quantity 1. Fails with
    /// [`CommerceError::OutOfStock`] when the item has no remaining
    /// inventory beyond what the cart already holds; the cart is left
    /// unchanged.
    pub fn add_item(
        &mut self,
        item: &MenuItem,
        options: Vec<SelectedOption>,
        inventory: &Inventory,
    ) -> Result<LineId, CommerceError> {
        let available = inventory.level(&item.id) - self.quantity_of(&item.id);
        if available <= 0 {
            return Err(CommerceError::OutOfStock {
                item_id: item.id.clone(),
                name: item.name.clone(),
                available: available.max(0),
            });
        }

        let options = canonicalize(options);
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.item_id == item.id && l.options == options)
        {
            line.quantity += 1;
            return Ok(line.id.clone());
        }

        let line = CartLine::new(item, options);
        let id = line.id.clone();
        self.lines.push(line);
        Ok(id)
    }

    /// Change a line's quantity by a signed delta.
    ///
    /// A result of zero or below removes the line (returns `false`); an
    /// increase is validated against remaining inventory for the item
    /// across all of its lines. Returns `true` while the line survives.
    pub fn change_quantity(
        &mut self,
        line_id: &LineId,
        delta: i64,
        inventory: &Inventory,
    ) -> Result<bool, CommerceError> {
        let idx = self
            .lines
            .iter()
            .position(|l| &l.id == line_id)
            .ok_or_else(|| CommerceError::LineNotFound(line_id.clone()))?;

        let new_quantity = self.lines[idx].quantity + delta;
        if new_quantity <= 0 {
            self.lines.remove(idx);
            return Ok(false);
        }

        if delta > 0 {
            let item_id = self.lines[idx].item_id.clone();
            let level = inventory.level(&item_id);
            let held = self.quantity_of(&item_id);
            if held + delta > level {
                return Err(CommerceError::OutOfStock {
                    item_id,
                    name: self.lines[idx].name.clone(),
                    available: (level - held).max(0),
                });
            }
        }

        self.lines[idx].quantity = new_quantity;
        Ok(true)
    }

    /// Remove a line unconditionally.
    ///
    /// Returns `true` if the line existed.
    pub fn remove_line(&mut self, line_id: &LineId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        self.lines.len() < len_before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Compute cart totals with the given service fee.
    ///
    /// The fee applies once, and only when the cart is non-empty.
    pub fn totals(&self, service_fee: Money) -> Result<CartTotals, CommerceError> {
        let mut subtotal = Money::ZERO;
        for line in &self.lines {
            let line_total = line
                .unit_price
                .try_mul(line.quantity)
                .ok_or(CommerceError::Overflow)?;
            subtotal = subtotal.try_add(line_total).ok_or(CommerceError::Overflow)?;
        }

        let fee = if self.is_empty() {
            Money::ZERO
        } else {
            service_fee
        };
        let total = subtotal.try_add(fee).ok_or(CommerceError::Overflow)?;

        Ok(CartTotals {
            subtotal,
            service_fee: fee,
            total,
        })
    }
}

/// Sort options so selection order never changes line identity.
fn canonicalize(mut options: Vec<SelectedOption>) -> Vec<SelectedOption> {
    options.sort();
    options
}
