//! Shop layer - owns the catalog and cart and keeps subscribed views in sync.
//!
//! View components never capture cart state. They implement [`CartView`] and
//! get a [`CartEvent`] plus read access to the [`Cart`] after every mutation
//! applied through [`Shop::dispatch`].

/// Shell command parsing and help text
pub mod commands;
/// Text view components
pub mod views;

use crate::{
    core::{cart::Cart, product::ProductList},
    errors::Result,
};
use tracing::{debug, warn};

/// A cart mutation requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// "add to cart" from the product grid
    Add(usize),
    /// Chevron up in the cart panel
    Increase(usize),
    /// Chevron down in the cart panel
    Decrease(usize),
    /// "remove" link in the cart panel
    Remove(usize),
    /// "clear cart" button
    Clear,
}

/// Notification sent to views after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartEvent {
    /// The applied action
    pub action: CartAction,
    /// Sum of quantities after the action
    pub item_count: u64,
    /// Total price after the action
    pub total_price: f64,
}

/// A view component that re-renders when the cart changes.
pub trait CartView {
    /// Called once per successful [`Shop::dispatch`].
    fn on_cart_changed(&mut self, event: &CartEvent, products: &ProductList, cart: &Cart);
}

/// The storefront session: product list, cart and subscribed views.
pub struct Shop {
    products: ProductList,
    cart: Cart,
    views: Vec<Box<dyn CartView>>,
}

impl Shop {
    /// Starts a session with an empty cart sized to `products`.
    #[must_use]
    pub fn new(products: ProductList) -> Self {
        let cart = Cart::new(&products);
        Self {
            products,
            cart,
            views: Vec::new(),
        }
    }

    /// Registers a view. Views are notified in registration order.
    pub fn subscribe(&mut self, view: Box<dyn CartView>) {
        self.views.push(view);
    }

    /// Applies an action to the cart and notifies every view.
    ///
    /// # Errors
    /// Returns the cart's error for positions outside the catalog; no view is
    /// notified in that case.
    pub fn dispatch(&mut self, action: CartAction) -> Result<CartEvent> {
        let applied = match action {
            CartAction::Add(index) | CartAction::Increase(index) => self.cart.increase(index),
            CartAction::Decrease(index) => self.cart.decrease(index),
            CartAction::Remove(index) => self.cart.remove(index),
            CartAction::Clear => {
                self.cart.clear_cart();
                Ok(())
            }
        };

        if let Err(e) = applied {
            warn!("Rejected {:?}: {}", action, e);
            return Err(e);
        }

        let event = CartEvent {
            action,
            item_count: self.cart.item_count(),
            total_price: self.cart.total_price(),
        };
        debug!(
            "Applied {:?}: {} items, total {}",
            action, event.item_count, event.total_price
        );

        for view in &mut self.views {
            view.on_cart_changed(&event, &self.products, &self.cart);
        }
        Ok(event)
    }

    /// The catalog as loaded.
    #[must_use]
    pub const fn products(&self) -> &ProductList {
        &self.products
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }
}
