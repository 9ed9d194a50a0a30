//! # Formatting Utilities for the Swap Widget
//!
//! Display strings for the widget view. For address shortening, use
//! [`shared::utils::truncate_address`].

use super::constants::NATIVE_SYMBOL;

/// Balance line value, e.g. `1.5 ETH`; `... ETH` while the reading is pending
pub fn balance_label(balance: Option<&str>) -> String {
    format!("{} {}", balance.unwrap_or("..."), NATIVE_SYMBOL)
}

/// One-based order label for the history list
pub fn order_label(index: usize) -> String {
    format!("Order Id {}", index + 1)
}
