use uom::si::{
    f64::{Length, MassDensity, ThermodynamicTemperature},
    length::{centimeter, meter},
    mass_density::gram_per_cubic_centimeter,
    thermodynamic_temperature::degree_celsius,
};

use super::DesignVariables;

/// Material and empirical constants of the objective model.
///
/// Masses follow from the sections through two fixed geometric assumptions:
/// a constant core stack depth and a constant winding conductor length.
/// Losses use an empirical core term `k_core · core_cm2^1.5` and a copper term
/// `k_cu · P_w² / copper_mm2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConstants {
    /// Electrical steel density.
    pub steel_density: MassDensity,

    /// Copper density.
    pub copper_density: MassDensity,

    /// Steel price per kilogram.
    pub steel_price_per_kg: f64,

    /// Copper price per kilogram.
    pub copper_price_per_kg: f64,

    /// Assumed core stack depth.
    pub core_stack_depth: Length,

    /// Assumed conductor length of the winding.
    pub winding_length: Length,

    /// No-load loss coefficient, W per (cm²)^1.5.
    pub core_loss_coefficient: f64,

    /// Load loss coefficient, W·mm² per W².
    pub copper_loss_coefficient: f64,
}

impl Default for DesignConstants {
    fn default() -> Self {
        Self::standard()
    }
}

impl DesignConstants {
    /// Calibration used with the normalized four-weight objective.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            steel_density: MassDensity::new::<gram_per_cubic_centimeter>(7.6),
            copper_density: MassDensity::new::<gram_per_cubic_centimeter>(8.9),
            steel_price_per_kg: 2.0,
            copper_price_per_kg: 8.0,
            core_stack_depth: Length::new::<centimeter>(30.0),
            winding_length: Length::new::<meter>(2.0),
            core_loss_coefficient: 1.1,
            copper_loss_coefficient: 0.006,
        }
    }

    /// Higher loss coefficients, used with the three-term objective.
    #[must_use]
    pub fn conservative() -> Self {
        Self {
            core_loss_coefficient: 1.2,
            copper_loss_coefficient: 0.008,
            ..Self::standard()
        }
    }
}

/// Closed-form hotspot temperature proxy used as the optimizer constraint.
///
/// `T = ambient + coefficient · (core_cm2 + copper_mm2)^exponent`
///
/// The sum mixes cm² and mm² on purpose: the coefficients were fitted on that
/// raw sum. This is much coarser than the convective model in
/// [`cooling`](crate::models::transformer::cooling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotspotProxy {
    pub ambient: ThermodynamicTemperature,
    pub coefficient: f64,
    pub exponent: f64,
}

impl Default for HotspotProxy {
    fn default() -> Self {
        Self {
            ambient: ThermodynamicTemperature::new::<degree_celsius>(20.0),
            coefficient: 0.03,
            exponent: 1.2,
        }
    }
}

impl HotspotProxy {
    /// Estimated hotspot temperature of a design.
    #[must_use]
    pub fn temperature(&self, design: &DesignVariables) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(
            self.temperature_c(design.core_cm2(), design.copper_mm2()),
        )
    }

    /// Same as [`temperature`](Self::temperature) on raw solver coordinates, in °C.
    pub(super) fn temperature_c(&self, core_cm2: f64, copper_mm2: f64) -> f64 {
        self.ambient.get::<degree_celsius>()
            + self.coefficient * (core_cm2 + copper_mm2).powf(self.exponent)
    }
}
