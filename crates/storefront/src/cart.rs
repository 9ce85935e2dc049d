//! Cart model: ordered lines of dish id and quantity, plus derived totals.
//!
//! The cart does not validate ids against the catalog. A line whose id is not
//! on the menu still counts toward [`Cart::total_quantity`] (header badge,
//! delivery fee) but is skipped by [`Cart::totals`] and never rendered.

use ethiopia_core::{CurrencyCode, DishId, Price};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Flat delivery surcharge applied to any non-empty cart, in cents.
pub const DELIVERY_FEE_CENTS: i64 = 299;

/// One dish in the cart. Persisted as `{ "id": ..., "qty": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Dish the line refers to.
    #[serde(rename = "id")]
    pub item_id: DishId,
    /// Always greater than zero while the line is in a cart.
    #[serde(rename = "qty")]
    pub quantity: u32,
}

/// Money totals for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of unit price times quantity over lines found in the catalog.
    pub subtotal: Price,
    /// [`DELIVERY_FEE_CENTS`] when the cart holds anything, zero otherwise.
    pub delivery_fee: Price,
    /// Subtotal plus delivery fee.
    pub total: Price,
    /// Quantity over lines found in the catalog.
    pub resolved_quantity: u32,
}

/// Ordered cart lines with unique ids and positive quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a cart from stored lines.
    ///
    /// Zero-quantity lines are dropped and repeated ids are merged into the
    /// first occurrence, so the result upholds the cart invariants whatever
    /// the storage held.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.position(line.item_id.as_str()) {
                Some(i) => {
                    if let Some(existing) = cart.lines.get_mut(i) {
                        existing.quantity = existing.quantity.saturating_add(line.quantity);
                    }
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if any.
    #[must_use]
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id.as_str() == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.item_id.as_str() == id)
    }

    /// Add one of `id`: bump an existing line or append a new one.
    pub fn add(&mut self, id: &DishId) {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.item_id == id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                item_id: id.clone(),
                quantity: 1,
            });
        }
    }

    /// Change the quantity of `id` by `delta`.
    ///
    /// A result of zero or less removes the line. Returns `false` (and does
    /// nothing) when the cart has no line for `id`.
    pub fn adjust(&mut self, id: &str, delta: i32) -> bool {
        let Some(i) = self.position(id) else {
            return false;
        };
        let Some(line) = self.lines.get_mut(i) else {
            return false;
        };
        let next = i64::from(line.quantity) + i64::from(delta);
        if next <= 0 {
            self.lines.remove(i);
        } else {
            line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
        true
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.item_id.as_str() != id);
        self.lines.len() != before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of every line's quantity, including ids missing from the catalog.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |sum, l| sum.saturating_add(l.quantity))
    }

    /// Compute subtotal, delivery fee and total against `catalog`.
    ///
    /// Lines whose id is not in the catalog contribute nothing to the money
    /// totals or `resolved_quantity`; the delivery fee still follows
    /// [`Cart::total_quantity`].
    #[must_use]
    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        let currency = CurrencyCode::default();
        let mut subtotal = Price::zero(currency);
        let mut resolved_quantity = 0u32;

        for line in &self.lines {
            let Some(dish) = catalog.get(line.item_id.as_str()) else {
                continue;
            };
            subtotal = subtotal + dish.price.times(line.quantity);
            resolved_quantity = resolved_quantity.saturating_add(line.quantity);
        }

        let delivery_fee = if self.total_quantity() > 0 {
            Price::from_cents(DELIVERY_FEE_CENTS, currency)
        } else {
            Price::zero(currency)
        };

        CartTotals {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
            resolved_quantity,
        }
    }
}
