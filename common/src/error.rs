//! Internal failure taxonomy for a single host's rotation attempt.
//!
//! Richer than the public status set on purpose: operators see the
//! sub-reason in the outcome detail, while the status column keeps the
//! coarse three-value contract.

use thiserror::Error;

use crate::rotation::RotationStatus;

#[derive(Debug, Error)]
pub enum RotationError {
    /// The reachability probe got no answer; nothing else was attempted.
    #[error("host did not answer the reachability probe")]
    Unreachable,

    /// The inventory query itself failed. Distinct from a successful query
    /// returning an empty value, which is a valid (degenerate) token.
    #[error("inventory query failed: {cause}")]
    InventoryUnavailable { cause: anyhow::Error },

    /// The rejection sampler ran out of attempts without a compliant
    /// candidate. Practically unreachable with the default alphabet.
    #[error("password generation exhausted after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// The identity service refused or failed the password set.
    #[error("identity service rejected the password set: {reason}")]
    ApplyRejected { reason: String },

    /// Derivation plus apply did not complete within the per-host budget.
    #[error("rotation timed out")]
    Timeout,
}

impl RotationError {
    /// Boundary projection onto the public status set.
    pub fn status(&self) -> RotationStatus {
        match self {
            Self::Unreachable => RotationStatus::NetworkConnectionFailed,
            Self::InventoryUnavailable { .. }
            | Self::GenerationExhausted { .. }
            | Self::ApplyRejected { .. }
            | Self::Timeout => RotationStatus::PasswordSetFailed,
        }
    }
}
