//! # Data Transfer Objects (DTOs)
//!
//! Plain data shared between the widget controller and the browser view.
//!
//! ## Module Organization
//!
//! - [`swap`] - Swap records and swap form input
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, matching the JS wallet ecosystem the widget talks to
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ```text
//! {
//!   "id": "2026-10-19T12:00:00.000Z",
//!   "sourceAmount": "0.001",
//!   "targetAmount": "0.000997",
//!   "destinationAddress": "0xAddr3",
//!   "status": "success"
//! }
//! ```

pub mod swap;

pub use swap::*;
