//! Shell commands - one line of user input mapped to a shop operation.
//!
//! Product positions are typed 1-based, as printed in the product grid, and
//! converted to 0-based cart positions here.

use super::CartAction;
use crate::errors::{Error, Result};
use std::str::FromStr;

/// Help text printed by `help`.
pub const HELP_TEXT: &str = "\
Storefront commands
  products            show the product grid
  cart                show your cart
  add <n>             add product n to the cart
  up <n>              one more of product n
  down <n>            one less of product n
  remove <n>          take product n out of the cart
  clear               empty the cart
  help                show this message
  quit                leave the shop";

/// A parsed shell line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Show the product grid
    Products,
    /// Show the cart panel
    Cart,
    /// Mutate the cart
    Action(CartAction),
    /// Show help
    Help,
    /// Leave the loop
    Quit,
    /// Blank line
    Nothing,
}

impl FromStr for ShellCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Nothing);
        };
        let arg = words.next();
        let unknown = || Error::UnknownCommand {
            input: line.trim().to_string(),
        };

        if words.next().is_some() {
            return Err(unknown());
        }

        let position = || -> Result<usize> {
            arg.and_then(|a| a.parse::<usize>().ok())
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(unknown)
        };

        let command = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("products" | "list", None) => Self::Products,
            ("cart", None) => Self::Cart,
            ("help" | "?", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            ("clear", None) => Self::Action(CartAction::Clear),
            ("add", Some(_)) => Self::Action(CartAction::Add(position()?)),
            ("up", Some(_)) => Self::Action(CartAction::Increase(position()?)),
            ("down", Some(_)) => Self::Action(CartAction::Decrease(position()?)),
            ("remove", Some(_)) => Self::Action(CartAction::Remove(position()?)),
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}

/// User-facing text for an error raised while running a shell line.
///
/// Cart positions are reported 1-based, as typed.
#[must_use]
pub fn describe_error(error: &Error) -> String {
    match error {
        Error::CartIndexOutOfRange { index, len } => {
            format!("There is no product {} (the shop has {len} products)", index + 1)
        }
        Error::UnknownCommand { .. } => format!("{error} (type `help` for commands)"),
        other => other.to_string(),
    }
}
