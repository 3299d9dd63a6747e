//! Cart state model - per-product quantities and the running total.
//!
//! A [`Cart`] is sized once from a [`ProductList`] and keeps its own copy of
//! those products, so slot `i` always refers to the product that was at
//! position `i` when the cart was built, even if the list changes later.
//! Every mutation recomputes the total as its last step.

use crate::{
    core::product::{Product, ProductId, ProductList},
    errors::{Error, Result},
};
use std::sync::Arc;
use tracing::trace;

/// Rounds to three decimal places, half away from zero.
#[must_use]
pub fn round_total(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// One non-empty cart slot, as shown in the cart panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    /// Position of the slot
    pub index: usize,
    /// Product at that position
    pub product: &'a Product,
    /// Quantity, always greater than zero
    pub quantity: u32,
    /// `quantity * price`, rounded to three decimals
    pub line_total: f64,
}

/// In-memory shopping cart.
#[derive(Debug, Clone)]
pub struct Cart {
    products: Arc<[Product]>,
    items: Vec<u32>,
    total_price: f64,
}

impl Cart {
    /// Builds an empty cart with one slot per product currently in the list.
    #[must_use]
    pub fn new(products: &ProductList) -> Self {
        let products: Arc<[Product]> = products.products().into();
        let items = vec![0; products.len()];
        Self {
            products,
            items,
            total_price: 0.0,
        }
    }

    /// Adds one unit at `index`.
    ///
    /// # Errors
    /// Returns [`Error::CartIndexOutOfRange`] if `index` is not a cart position.
    pub fn increase(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        *slot = slot.saturating_add(1);
        self.total();
        Ok(())
    }

    /// Removes one unit at `index`. A slot already at zero stays at zero.
    ///
    /// # Errors
    /// Returns [`Error::CartIndexOutOfRange`] if `index` is not a cart position.
    pub fn decrease(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        if *slot > 0 {
            *slot -= 1;
            self.total();
            Ok(())
        } else {
            self.remove(index)
        }
    }

    /// Sets the slot at `index` to zero.
    ///
    /// # Errors
    /// Returns [`Error::CartIndexOutOfRange`] if `index` is not a cart position.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        *self.slot_mut(index)? = 0;
        self.total();
        Ok(())
    }

    /// Empties every slot and zeroes the total.
    pub fn clear_cart(&mut self) {
        self.items.fill(0);
        self.total_price = 0.0;
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut u32> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(Error::CartIndexOutOfRange { index, len })
    }

    fn total(&mut self) {
        let sum: f64 = self
            .items
            .iter()
            .zip(self.products.iter())
            .map(|(&quantity, product)| f64::from(quantity) * product.price)
            .sum();
        self.total_price = round_total(sum);
        trace!("Cart total recomputed: {}", self.total_price);
    }

    /// Quantities, one per position.
    #[must_use]
    pub fn items(&self) -> &[u32] {
        &self.items
    }

    /// Quantity at `index`, or `None` outside the cart.
    #[must_use]
    pub fn quantity(&self, index: usize) -> Option<u32> {
        self.items.get(index).copied()
    }

    /// Total price, rounded to three decimals.
    #[must_use]
    pub const fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|&quantity| u64::from(quantity)).sum()
    }

    /// Whether every slot is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(|&quantity| quantity == 0)
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The product snapshot the cart was built from.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Position of a product id within the cart's snapshot.
    #[must_use]
    pub fn position_of(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|product| &product.id == id)
    }

    /// Non-empty slots in catalog order.
    pub fn lines(&self) -> impl Iterator<Item = CartLine<'_>> {
        self.items
            .iter()
            .zip(self.products.iter())
            .enumerate()
            .filter(|(_, (quantity, _))| **quantity > 0)
            .map(|(index, (&quantity, product))| CartLine {
                index,
                product,
                quantity,
                line_total: round_total(f64::from(quantity) * product.price),
            })
    }
}
