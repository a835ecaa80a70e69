//! Problem formulation for the required cooling surface.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::{
    models::transformer::cooling::core::{
        CoolingError, Equilibrium, EquilibriumConfig, equilibrium::natural_convection,
    },
    support::constraint::{Constrained, NonNegative, StrictlyPositive},
};

/// Model adapter exposing the surface area as the sole input.
///
/// The output is the equilibrium temperature rise under natural convection.
pub(super) struct SurfaceRiseModel<'a> {
    losses: Constrained<Power, NonNegative>,
    length: Constrained<Length, StrictlyPositive>,
    config: &'a EquilibriumConfig,
}

impl<'a> SurfaceRiseModel<'a> {
    pub(super) fn new(
        losses: Constrained<Power, NonNegative>,
        length: Constrained<Length, StrictlyPositive>,
        config: &'a EquilibriumConfig,
    ) -> Self {
        Self {
            losses,
            length,
            config,
        }
    }
}

impl Model for SurfaceRiseModel<'_> {
    type Input = Area;
    type Output = TemperatureInterval;
    type Error = CoolingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let surface = StrictlyPositive::new(*input).map_err(CoolingError::invalid("surface"))?;

        match natural_convection(self.losses, surface, self.length, self.config) {
            Equilibrium::Converged { rise, .. } | Equilibrium::IterationLimit { rise, .. } => {
                Ok(rise)
            }
            Equilibrium::Unbounded { .. } => Err(CoolingError::Degenerate),
        }
    }
}

/// Computes the residual as `achieved_rise - allowable_rise`.
pub(super) struct SurfaceRiseProblem {
    allowable_rise: TemperatureInterval,
}

impl SurfaceRiseProblem {
    pub(super) fn new(allowable_rise: TemperatureInterval) -> Self {
        Self { allowable_rise }
    }
}

impl EquationProblem<1> for SurfaceRiseProblem {
    type Input = Area;
    type Output = TemperatureInterval;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Area::new::<square_meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.get::<delta_kelvin>() - self.allowable_rise.get::<delta_kelvin>()])
    }
}
