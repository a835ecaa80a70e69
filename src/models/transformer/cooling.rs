//! Steady-state temperature rise of a transformer tank.
//!
//! The dry-surface models balance the dissipated losses against natural
//! convection from a vertical wall, optionally with surface radiation. The
//! convective coefficient depends on the temperature rise itself, so the
//! balance is resolved by fixed-point iteration and the outcome is reported as
//! an [`Equilibrium`] rather than a bare number.
//!
//! The oil-immersed models (ONAN, ONAF) use fixed film coefficients in series
//! and are closed form.
//!
//! # Example
//!
//! ```
//! use transformer_design::models::transformer::cooling::{
//!     Equilibrium, EquilibriumConfig, InsulationClass, natural_convection,
//! };
//! use transformer_design::support::constraint::{NonNegative, StrictlyPositive};
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, Length, Power},
//!     length::meter,
//!     power::watt,
//! };
//!
//! let eq = natural_convection(
//!     NonNegative::new(Power::new::<watt>(400.0)).unwrap(),
//!     StrictlyPositive::new(Area::new::<square_meter>(2.0)).unwrap(),
//!     StrictlyPositive::new(Length::new::<meter>(1.0)).unwrap(),
//!     &EquilibriumConfig::default(),
//! );
//!
//! assert!(matches!(eq, Equilibrium::Converged { .. }));
//! assert!(InsulationClass::A.permits(eq.rise().unwrap()));
//! ```

mod core;

pub use self::core::{
    AirProperties, CoolingError, Equilibrium, EquilibriumConfig, InsulationClass,
    OilCirculation, OnafCoefficients, OnanCoefficients, OnanHotspot, RadiationConfig,
    RequiredSurfaceConfig, SURFACE_ESTIMATE_COEFFICIENT, final_temperature,
    forced_convection_coefficient, nusselt_vertical, radiation_loss, required_surface_estimate,
    thermal_time_constant, transient_temperature,
};

use uom::si::f64::{Area, Length, Power, TemperatureInterval};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

/// Temperature rise of a surface cooled by natural convection alone.
///
/// Returns [`Equilibrium::Unbounded`] if the surface stops convecting while
/// losses are positive, and [`Equilibrium::IterationLimit`] with the last
/// estimate if the iteration budget runs out. Zero losses give a zero rise.
#[must_use]
pub fn natural_convection(
    losses: Constrained<Power, NonNegative>,
    surface: Constrained<Area, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
    config: &EquilibriumConfig,
) -> Equilibrium {
    core::natural_convection(losses, surface, length, config)
}

/// Temperature rise of a surface cooled by natural convection and radiation.
///
/// Same iteration as [`natural_convection`], with the linearized radiation
/// coefficient added to the convective one.
#[must_use]
pub fn combined_convection_radiation(
    losses: Constrained<Power, NonNegative>,
    surface: Constrained<Area, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
    radiation: &RadiationConfig,
    config: &EquilibriumConfig,
) -> Equilibrium {
    core::combined_convection_radiation(losses, surface, length, radiation, config)
}

/// Top-oil rise of a naturally cooled (ONAN) tank.
#[must_use]
pub fn onan_rise(
    losses: Constrained<Power, NonNegative>,
    surface: Constrained<Area, StrictlyPositive>,
    coefficients: &OnanCoefficients,
) -> TemperatureInterval {
    core::onan_rise(losses, surface, coefficients)
}

/// Top-oil rise of a fan-cooled (ONAF) tank.
///
/// # Errors
///
/// Returns [`CoolingError::InvalidDomainInput`] if the forced convection
/// coefficient at the configured air velocity is not positive.
pub fn onaf_rise(
    losses: Constrained<Power, NonNegative>,
    surface: Constrained<Area, StrictlyPositive>,
    coefficients: &OnafCoefficients,
) -> Result<TemperatureInterval, CoolingError> {
    core::onaf_rise(losses, surface, coefficients)
}

/// Smallest surface keeping the natural-convection rise at `allowable_rise`.
///
/// Zero losses need no surface.
///
/// # Errors
///
/// Returns [`CoolingError::Bisection`] if the target is not bracketed by
/// [`RequiredSurfaceConfig::search`], or [`CoolingError::MaxIters`] if the
/// search does not converge.
pub fn required_surface(
    losses: Constrained<Power, NonNegative>,
    length: Constrained<Length, StrictlyPositive>,
    allowable_rise: Constrained<TemperatureInterval, StrictlyPositive>,
    config: &RequiredSurfaceConfig,
) -> Result<Area, CoolingError> {
    core::required_surface(losses, length, allowable_rise, config)
}
