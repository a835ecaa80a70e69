//! Cooling surface needed to hold the temperature rise at an allowable value.

mod config;
mod problem;

pub use config::RequiredSurfaceConfig;

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, Length, Power, TemperatureInterval},
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    },
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::CoolingError;

use problem::{SurfaceRiseModel, SurfaceRiseProblem};

/// Rule-of-thumb surface coefficient of [`required_surface_estimate`], m²·K/W.
pub const SURFACE_ESTIMATE_COEFFICIENT: f64 = 5.0;

/// Quick surface estimate `losses · coefficient / allowable_rise`.
#[must_use]
pub fn required_surface_estimate(
    losses: Constrained<Power, NonNegative>,
    allowable_rise: Constrained<TemperatureInterval, StrictlyPositive>,
    coefficient: f64,
) -> Area {
    Area::new::<square_meter>(
        losses.into_inner().get::<watt>() * coefficient
            / allowable_rise.into_inner().get::<delta_kelvin>(),
    )
}

/// Finds the surface whose natural-convection equilibrium rise equals
/// `allowable_rise`.
///
/// Uses bisection on the surface area within the configured bracket.
pub(crate) fn required_surface(
    losses: Constrained<Power, NonNegative>,
    length: Constrained<Length, StrictlyPositive>,
    allowable_rise: Constrained<TemperatureInterval, StrictlyPositive>,
    config: &RequiredSurfaceConfig,
) -> Result<Area, CoolingError> {
    if losses.as_ref() == &Power::ZERO {
        return Ok(Area::ZERO);
    }

    let allowable_rise = allowable_rise.into_inner();
    let model = SurfaceRiseModel::new(losses, length, &config.equilibrium);
    let problem = SurfaceRiseProblem::new(allowable_rise);

    let solution = bisection::solve(
        &model,
        &problem,
        config.bracket(),
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A surface too large to convect leaves the rise unbounded, which
            // sits on the hot side of the target.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(CoolingError::MaxIters {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    let surface = solution.snapshot.input;
    debug!(
        surface_m2 = surface.get::<square_meter>(),
        iters = solution.iters,
        "required cooling surface found"
    );

    Ok(surface)
}
