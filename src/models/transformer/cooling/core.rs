//! Heat balance of the tank surface and oil cooling estimates.

mod air;
mod assessment;
mod equilibrium;
mod error;
mod oil;
mod surface;

pub use air::{AirProperties, nusselt_vertical};
pub use assessment::{
    InsulationClass, OilCirculation, OnanHotspot, final_temperature, radiation_loss,
    thermal_time_constant, transient_temperature,
};
pub use equilibrium::{Equilibrium, EquilibriumConfig, RadiationConfig};
pub use error::CoolingError;
pub use oil::{OnafCoefficients, OnanCoefficients, forced_convection_coefficient};
pub use surface::{RequiredSurfaceConfig, SURFACE_ESTIMATE_COEFFICIENT, required_surface_estimate};

pub(super) use equilibrium::{combined_convection_radiation, natural_convection};
pub(super) use oil::{onaf_rise, onan_rise};
pub(super) use surface::required_surface;
