//! Natural convection from a vertical surface into still air.

use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, TemperatureInterval, ThermalConductivity},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::{HeatTransferCoefficient, heat_transfer_coefficient};

/// Rayleigh number below which the surface is treated as non-convecting.
const RA_CONVECTION_ONSET: f64 = 1e4;

/// Rayleigh number at the laminar to turbulent transition.
const RA_TURBULENT: f64 = 1e9;

/// Stefan–Boltzmann constant, W/m²·K⁴.
pub(super) const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Properties of the surrounding air.
///
/// Evaluated once at a film temperature; [`AirProperties::default`] is air at
/// 300 K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    pub thermal_conductivity: ThermalConductivity,

    pub prandtl: f64,

    /// Kinematic viscosity, m²/s.
    pub kinematic_viscosity: f64,

    /// Volumetric expansion coefficient, 1/K.
    pub expansion_coefficient: f64,

    pub gravity: Acceleration,
}

impl Default for AirProperties {
    fn default() -> Self {
        Self {
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0262),
            prandtl: 0.71,
            kinematic_viscosity: 1.846e-5,
            expansion_coefficient: 1.0 / 300.0,
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
        }
    }
}

impl AirProperties {
    /// Grashof number `g·β·Δt·L³ / ν²`.
    #[must_use]
    pub fn grashof(&self, rise: TemperatureInterval, length: Length) -> f64 {
        self.grashof_raw(rise.get::<delta_kelvin>(), length.get::<meter>())
    }

    /// Rayleigh number `Gr·Pr`.
    #[must_use]
    pub fn rayleigh(&self, rise: TemperatureInterval, length: Length) -> f64 {
        self.rayleigh_raw(rise.get::<delta_kelvin>(), length.get::<meter>())
    }

    /// Natural convection coefficient of a vertical surface.
    ///
    /// Zero below the convection onset (`Ra < 1e4`).
    #[must_use]
    pub fn natural_convection(
        &self,
        rise: TemperatureInterval,
        length: Length,
    ) -> HeatTransferCoefficient {
        heat_transfer_coefficient(self.natural_convection_raw(
            rise.get::<delta_kelvin>(),
            length.get::<meter>(),
        ))
    }

    fn grashof_raw(&self, rise_k: f64, length_m: f64) -> f64 {
        self.gravity.get::<meter_per_second_squared>()
            * self.expansion_coefficient
            * rise_k
            * length_m.powi(3)
            / self.kinematic_viscosity.powi(2)
    }

    fn rayleigh_raw(&self, rise_k: f64, length_m: f64) -> f64 {
        self.grashof_raw(rise_k, length_m) * self.prandtl
    }

    /// Natural convection coefficient in W/m²·K, for the fixed-point loop.
    pub(super) fn natural_convection_raw(&self, rise_k: f64, length_m: f64) -> f64 {
        let nu = nusselt_vertical(self.rayleigh_raw(rise_k, length_m));
        nu * self.thermal_conductivity.get::<watt_per_meter_kelvin>() / length_m
    }
}

/// Nusselt number of a vertical plate as a function of the Rayleigh number.
///
/// - `Ra < 1e4`: 0 (no convection)
/// - `1e4 ≤ Ra < 1e9`: `0.59·Ra^¼` (laminar)
/// - otherwise: `0.1·Ra^⅓` (turbulent)
#[must_use]
pub fn nusselt_vertical(rayleigh: f64) -> f64 {
    if rayleigh < RA_CONVECTION_ONSET {
        0.0
    } else if rayleigh < RA_TURBULENT {
        0.59 * rayleigh.powf(0.25)
    } else {
        0.1 * rayleigh.cbrt()
    }
}
