//! Core storefront logic - catalog, cart and presentation helpers.
//!
//! Nothing in here knows about the terminal; the shop layer drives these types.

/// Cart quantities and the running total
pub mod cart;
/// Catalog source resolution and loading
pub mod catalog;
/// Products and the ordered product list
pub mod product;
/// Formatting for prices, badge and cart lines
pub mod report;
