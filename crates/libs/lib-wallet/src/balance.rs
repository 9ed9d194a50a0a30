//! Balance formatting
//!
//! Providers report balances in wei. The widget shows ether with trailing
//! zeros trimmed and at least one fractional digit (`1.5`, `2.0`, `0.0`).

use alloy_primitives::{utils::format_ether, U256};

/// Convert a wei amount to a display string in ether
pub fn format_balance(wei: U256) -> String {
    let full = format_ether(wei);
    match full.split_once('.') {
        Some((whole, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{frac}")
            }
        }
        None => format!("{full}.0"),
    }
}

/// Parse a JSON-RPC quantity (`0x`-prefixed hex) into wei
pub fn parse_quantity(raw: &str) -> Option<U256> {
    let digits = raw.trim().strip_prefix("0x")?;
    if digits.is_empty() {
        return Some(U256::ZERO);
    }
    U256::from_str_radix(digits, 16).ok()
}
