pub mod constants;
pub mod format;
