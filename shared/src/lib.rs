//! # Shared Swap Widget Types
//!
//! Data types and display helpers shared by the widget controller (`lib-wallet`)
//! and the browser front-end (`swap-web`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Swap records and form input
//!   - **[`dto::swap`]**: [`SwapRecord`], [`SwapFormInput`], [`SwapStatus`]
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::timestamp_id`]**: Timestamp-derived record identifiers
//!
//! ## Usage
//!
//! ```rust
//! use shared::{SwapFormInput, SwapRecord};
//! use shared::utils::truncate_address;
//!
//! let form = SwapFormInput::new("0.001", "0.000997", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
//! let record = SwapRecord::from_form("1".to_string(), &form);
//!
//! assert_eq!(truncate_address(&record.destination_address), "0x5aAe...eAed");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
