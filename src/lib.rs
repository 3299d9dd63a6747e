//! `Storefront` - a single-page shop over a static product catalog
//!
//! This crate loads a product catalog once, shows it in the terminal, and keeps
//! an in-memory shopping cart with per-product quantities and a running total.
//! View components subscribe to cart changes instead of reading shared state.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Documented where non-obvious
)]

/// Settings file, environment and command-line configuration
pub mod config;
/// Core storefront logic - catalog, cart and formatting
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Tracing subscriber setup
pub mod logging;
/// Shop session, view components and shell commands
pub mod shop;

#[cfg(test)]
pub mod test_utils;
