//! Cart presentation helpers.
//!
//! Framework-agnostic formatting for prices, the cart badge and cart lines.
//! The view components in [`crate::shop`] build their output from these.

use crate::core::cart::{Cart, CartLine};

/// Formats a price with up to three decimals, trimming trailing zeros.
///
/// Produces strings like `"$10"`, `"$16.666"` or `"$0.5"`.
#[must_use]
pub fn format_price(symbol: &str, amount: f64) -> String {
    let fixed = format!("{amount:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{symbol}{trimmed}")
}

/// Item count shown next to the cart icon, blank when the cart is empty.
#[must_use]
pub fn format_badge(cart: &Cart) -> String {
    match cart.item_count() {
        0 => String::new(),
        count => count.to_string(),
    }
}

/// One cart line, e.g. `"2. leather sofa  $3.333 x 2 = $6.666"`.
///
/// Positions are shown 1-based.
#[must_use]
pub fn format_cart_line(symbol: &str, line: &CartLine<'_>) -> String {
    format!(
        "{}. {}  {} x {} = {}",
        line.index + 1,
        line.product.title,
        format_price(symbol, line.product.price),
        line.quantity,
        format_price(symbol, line.line_total)
    )
}

/// Footer line of the cart panel.
#[must_use]
pub fn format_total(symbol: &str, cart: &Cart) -> String {
    format!("your total : {}", format_price(symbol, cart.total_price()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_format_price_trims_zeros() {
        assert_eq!(format_price("$", 10.0), "$10");
        assert_eq!(format_price("$", 16.666), "$16.666");
        assert_eq!(format_price("$", 0.5), "$0.5");
        assert_eq!(format_price("$", 0.0), "$0");
        assert_eq!(format_price("€", 12.30), "€12.3");
    }

    #[test]
    fn test_format_badge_blank_when_empty() {
        let mut cart = Cart::new(&sample_products());
        assert_eq!(format_badge(&cart), "");

        cart.increase(0).unwrap();
        cart.increase(1).unwrap();
        cart.increase(1).unwrap();
        assert_eq!(format_badge(&cart), "3");

        cart.clear_cart();
        assert_eq!(format_badge(&cart), "");
    }

    #[test]
    fn test_format_cart_line_and_total() {
        let mut cart = Cart::new(&sample_products());
        cart.increase(1).unwrap();
        cart.increase(1).unwrap();

        let line = cart.lines().next().unwrap();
        assert_eq!(
            format_cart_line("$", &line),
            "2. Product b  $3.333 x 2 = $6.666"
        );
        assert_eq!(format_total("$", &cart), "your total : $6.666");
    }
}
