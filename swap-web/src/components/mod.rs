//! UI Components

pub mod history;
pub mod navbar;

pub use history::SwapHistoryList;
pub use navbar::Navbar;
