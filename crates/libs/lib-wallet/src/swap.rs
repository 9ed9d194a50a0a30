//! # Swap Backend
//!
//! Where a submitted swap would be executed. The widget ships only the
//! simulated backend: it logs the swap and reports success, no transfer
//! happens.

use async_trait::async_trait;
use shared::SwapFormInput;
use tracing::info;

use crate::error::Result;

#[async_trait(?Send)]
pub trait SwapBackend {
    async fn execute(&self, input: &SwapFormInput) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedSwap;

#[async_trait(?Send)]
impl SwapBackend for SimulatedSwap {
    async fn execute(&self, input: &SwapFormInput) -> Result<()> {
        info!(
            source_amount = %input.source_amount,
            target_amount = %input.target_amount,
            destination = %input.destination_address,
            "Swapping (simulated)"
        );
        Ok(())
    }
}
