//! # Shared Utility Functions
//!
//! Helpers used by both the widget controller and the browser view.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the `0x` prefix plus four characters kept on each side
//!
//! ## Identifiers
//!
//! - [`timestamp_id`] - RFC 3339 millisecond timestamp used as a swap record id
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
//! assert_eq!(format_address(address, 6, 4), "0x5aAe...eAed");
//! ```

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(format_address(addr, 6, 4), "0x5aAe...eAed");
/// assert_eq!(format_address("0xAddr3", 6, 4), "0xAddr3");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an Ethereum address keeping `0x` plus four characters up front and four at the end.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(truncate_address(addr), "0x5aAe...eAed");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Render a point in time as a record identifier, e.g. `2026-10-19T12:00:00.000Z`.
pub fn timestamp_id(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
