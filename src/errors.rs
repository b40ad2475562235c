//! Shared error types used across submodules.

use thiserror::Error;

use crate::simulation::SamplingError;
use crate::units::ParseChargeError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ChargeGridError {
    /// Wraps sampling configuration errors.
    #[error(transparent)]
    Sampling(#[from] SamplingError),
    /// Raised when a charge literal cannot be parsed.
    #[error(transparent)]
    Charge(#[from] ParseChargeError),
    /// Raised when writing an exported grid fails.
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}
