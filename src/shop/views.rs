//! Text view components for the terminal storefront.
//!
//! [`render_product_grid`] and [`render_cart_panel`] are pure functions of
//! catalog and cart state. [`CartBadge`] and [`CartPanel`] wrap them as
//! [`CartView`] subscribers and keep the text of their last render.

use super::{CartEvent, CartView};
use crate::core::{
    cart::Cart,
    product::ProductList,
    report::{format_badge, format_cart_line, format_price, format_total},
};
use std::fmt::Write;

/// Banner, navbar badge and the numbered product grid.
#[must_use]
pub fn render_product_grid(
    banner: &str,
    symbol: &str,
    products: &ProductList,
    cart: &Cart,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {banner} ===   [cart: {}]", badge_or_zero(cart));
    let _ = writeln!(out, "Our Products");
    for (index, product) in products.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<28} {:>10}",
            index + 1,
            product.title,
            format_price(symbol, product.price)
        );
    }
    out
}

/// The cart overlay: one line per non-empty slot, then the total.
#[must_use]
pub fn render_cart_panel(symbol: &str, cart: &Cart) -> String {
    let mut out = String::from("your cart\n");
    if cart.is_empty() {
        out.push_str("  (empty)\n");
    }
    for line in cart.lines() {
        let _ = writeln!(out, "  {}", format_cart_line(symbol, &line));
    }
    let _ = writeln!(out, "{}", format_total(symbol, cart));
    out
}

fn badge_or_zero(cart: &Cart) -> String {
    let badge = format_badge(cart);
    if badge.is_empty() { "0".to_string() } else { badge }
}

/// Navbar cart icon counter.
#[derive(Debug, Default)]
pub struct CartBadge {
    text: String,
}

impl CartBadge {
    /// Creates a badge for an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last render; blank when the cart is empty.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl CartView for CartBadge {
    fn on_cart_changed(&mut self, _event: &CartEvent, _products: &ProductList, cart: &Cart) {
        self.text = format_badge(cart);
    }
}

/// Cart overlay contents.
#[derive(Debug)]
pub struct CartPanel {
    symbol: String,
    text: String,
}

impl CartPanel {
    /// Creates a panel showing the given cart.
    #[must_use]
    pub fn new(symbol: impl Into<String>, cart: &Cart) -> Self {
        let symbol = symbol.into();
        let text = render_cart_panel(&symbol, cart);
        Self { symbol, text }
    }

    /// Text of the last render.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl CartView for CartPanel {
    fn on_cart_changed(&mut self, _event: &CartEvent, _products: &ProductList, cart: &Cart) {
        self.text = render_cart_panel(&self.symbol, cart);
    }
}

/// Shares a view with the shop while the caller keeps reading it.
impl<V: CartView> CartView for std::rc::Rc<std::cell::RefCell<V>> {
    fn on_cart_changed(&mut self, event: &CartEvent, products: &ProductList, cart: &Cart) {
        self.borrow_mut().on_cart_changed(event, products, cart);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::shop::{CartAction, Shop};
    use crate::test_utils::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_render_product_grid() {
        let products = sample_products();
        let cart = Cart::new(&products);
        let grid = render_product_grid("furniture collection", "$", &products, &cart);

        assert!(grid.starts_with("=== furniture collection ===   [cart: 0]\n"));
        assert!(grid.contains(" 1. Product a"));
        assert!(grid.contains("$3.333"));
    }

    #[test]
    fn test_render_empty_cart_panel() {
        let cart = Cart::new(&sample_products());
        assert_eq!(
            render_cart_panel("$", &cart),
            "your cart\n  (empty)\nyour total : $0\n"
        );
    }

    #[test]
    fn test_views_follow_dispatches() {
        let mut shop = Shop::new(sample_products());
        let badge = Rc::new(RefCell::new(CartBadge::new()));
        let panel = Rc::new(RefCell::new(CartPanel::new("$", shop.cart())));
        shop.subscribe(Box::new(Rc::clone(&badge)));
        shop.subscribe(Box::new(Rc::clone(&panel)));

        shop.dispatch(CartAction::Add(0)).unwrap();
        shop.dispatch(CartAction::Increase(1)).unwrap();
        assert_eq!(badge.borrow().text(), "2");
        assert_eq!(
            panel.borrow().text(),
            "your cart\n  1. Product a  $10 x 1 = $10\n  2. Product b  $3.333 x 1 = $3.333\nyour total : $13.333\n"
        );

        shop.dispatch(CartAction::Clear).unwrap();
        assert_eq!(badge.borrow().text(), "");
        assert!(panel.borrow().text().contains("(empty)"));
    }
}
