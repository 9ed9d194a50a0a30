//! Page modules

pub mod swap;

pub use swap::SwapPage;
