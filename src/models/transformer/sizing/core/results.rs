use serde::{Deserialize, Serialize};
use uom::si::{
    f64::ThermodynamicTemperature, mass::kilogram, power::watt, ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use super::{DesignMetrics, DesignVariables};

/// Presentation record of an optimal design.
///
/// Every value is rounded to two decimals. The flat field layout serializes
/// to a mapping that a persistence layer can store as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub core_section_cm2: f64,
    pub copper_section_mm2: f64,
    pub mass_kg: f64,
    pub cost: f64,
    pub losses_w: f64,
    pub efficiency_percent: f64,
    pub max_temperature_c: f64,
}

impl OptimizationResult {
    pub(super) fn new(
        design: &DesignVariables,
        metrics: &DesignMetrics,
        temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            core_section_cm2: round2(design.core_cm2()),
            copper_section_mm2: round2(design.copper_mm2()),
            mass_kg: round2(metrics.mass.get::<kilogram>()),
            cost: round2(metrics.cost),
            losses_w: round2(metrics.losses.get::<watt>()),
            efficiency_percent: round2(metrics.efficiency.get::<percent>()),
            max_temperature_c: round2(temperature.get::<degree_celsius>()),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
