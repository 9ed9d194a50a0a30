//! # Swap Data Transfer Objects
//!
//! Records and form input for the simulated swap flow.

use serde::{Deserialize, Serialize};

/// Outcome shown next to a swap in the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Success,
}

impl SwapStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SwapStatus::Success => "Success",
        }
    }
}

/// A completed (simulated) swap.
///
/// Records are created once and never mutated; the history only inserts and evicts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRecord {
    pub id: String,
    pub source_amount: String,
    pub target_amount: String,
    pub destination_address: String,
    pub status: SwapStatus,
}

impl SwapRecord {
    /// Build a successful record from the submitted form
    pub fn from_form(id: String, form: &SwapFormInput) -> Self {
        Self {
            id,
            source_amount: form.source_amount.clone(),
            target_amount: form.target_amount.clone(),
            destination_address: form.destination_address.clone(),
            status: SwapStatus::Success,
        }
    }
}

/// Values currently typed into the swap form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapFormInput {
    pub source_amount: String,
    pub target_amount: String,
    pub destination_address: String,
}

impl SwapFormInput {
    pub fn new(
        source_amount: impl Into<String>,
        target_amount: impl Into<String>,
        destination_address: impl Into<String>,
    ) -> Self {
        Self {
            source_amount: source_amount.into(),
            target_amount: target_amount.into(),
            destination_address: destination_address.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source_amount.is_empty()
            && self.target_amount.is_empty()
            && self.destination_address.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
