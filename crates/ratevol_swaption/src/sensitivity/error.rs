//! Sensitivity aggregation errors.

use ratevol_core::types::InterpolationError;
use thiserror::Error;

/// Errors raised while building or combining parameter sensitivities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensitivityError {
    /// No sensitivity exists for the requested (surface, currency) key.
    ///
    /// Distinct from a present key whose vector happens to be zero.
    #[error("No sensitivity found for surface {name} in {currency}")]
    NotFound {
        /// Surface name requested
        name: String,
        /// Currency requested
        currency: String,
    },

    /// Two sensitivities for the same key carry different node counts.
    ///
    /// The node vectors of a surface are fixed at calibration, so a length
    /// mismatch means the inputs came from different configurations and
    /// combining them would be meaningless.
    #[error(
        "Node count mismatch for surface {name} in {currency}: {left} vs {right}"
    )]
    ParameterCountMismatch {
        /// Surface name of the colliding entries
        name: String,
        /// Currency of the colliding entries
        currency: String,
        /// Node count on the left-hand side
        left: usize,
        /// Node count on the right-hand side
        right: usize,
    },

    /// Surface lookup failure while projecting onto nodes
    #[error(transparent)]
    Surface(#[from] InterpolationError),
}
