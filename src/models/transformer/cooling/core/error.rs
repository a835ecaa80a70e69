use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::TemperatureInterval;

use crate::support::constraint::ConstraintError;

/// Errors that can occur in the cooling calculations.
#[derive(Debug, Error)]
pub enum CoolingError {
    /// A derived quantity fell outside its physical domain.
    ///
    /// Raised, for example, when the forced convection correlation yields a
    /// non-positive coefficient at extreme air velocities.
    #[error("invalid {quantity}: {source}")]
    InvalidDomainInput {
        /// Name of the offending quantity.
        quantity: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best temperature-rise residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The surface does not convect, so the temperature rise is unbounded.
    #[error("no convective heat transfer: temperature rise is unbounded")]
    Degenerate,
}

impl CoolingError {
    pub(super) fn invalid(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidDomainInput { quantity, source }
    }
}
