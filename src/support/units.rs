//! Extensions to [`uom`].
//!
//! Public APIs in this crate use [`uom`] quantities for every physical value.
//! This module fills the two gaps the transformer models run into:
//!
//! - [`TemperatureDifference`] subtracts absolute temperatures to get a
//!   temperature interval (hotspot minus ambient, surface minus ambient).
//! - [`HeatTransferCoefficient`] is the W/m²·K quantity used by the
//!   convection and oil-cooling models, which [`uom`] does not name.
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use transformer_design::support::units::TemperatureDifference;
//!
//! let hotspot = ThermodynamicTemperature::new::<degree_celsius>(98.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let rise = hotspot.minus(ambient);
//! // rise is a TemperatureInterval of 73 K
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{HeatTransferCoefficient, heat_transfer_coefficient, watt_per_square_meter_kelvin};
pub use temperature_difference::TemperatureDifference;
