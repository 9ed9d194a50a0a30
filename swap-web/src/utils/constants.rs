//! Application constants

/// Remote-session service credential, baked in at build time (`INFURA_ID=... trunk build`)
pub const INFURA_ID: Option<&str> = option_env!("INFURA_ID");

// Asset labels shown on the swap form
pub const SOURCE_ASSET: &str = "WBTC";
pub const TARGET_ASSET: &str = "BTC";
pub const NATIVE_SYMBOL: &str = "ETH";
