use thiserror::Error;
use uom::si::f64::Area;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while sizing a transformer.
#[derive(Debug, Error)]
pub enum SizingError {
    /// A value that must be positive (or non-negative) was not.
    ///
    /// Section areas, voltages, rated power and objective scales divide or
    /// scale the objective terms, so they are rejected before any evaluation.
    #[error("invalid {quantity}: {source}")]
    InvalidDomainInput {
        /// Name of the offending quantity.
        quantity: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// A section range is empty or not strictly positive.
    #[error("invalid {variable} bounds: min={min:?}, max={max:?}")]
    InvalidBounds {
        /// Which design variable the range belongs to.
        variable: &'static str,
        min: Area,
        max: Area,
    },

    /// The constrained solver did not deliver a feasible optimum.
    ///
    /// Covers solver failure statuses, an exhausted evaluation budget and
    /// converged points that violate a constraint (empty feasible region).
    #[error("optimization failed: {message}")]
    OptimizationFailure {
        /// Solver diagnostic.
        message: String,
    },
}

impl SizingError {
    /// Returns a mapper that tags a constraint error with the quantity name.
    pub(super) fn invalid(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidDomainInput { quantity, source }
    }

    pub(super) fn failure(message: impl Into<String>) -> Self {
        Self::OptimizationFailure {
            message: message.into(),
        }
    }
}
