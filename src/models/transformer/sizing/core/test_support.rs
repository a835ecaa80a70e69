//! Shared fixtures for sizing tests.

use uom::si::{
    area::{square_centimeter, square_millimeter},
    electric_potential::volt,
    f64::{Area, ElectricPotential, Power},
    power::kilowatt,
};

use super::{DesignSpec, DesignVariables};

/// A 20 kV / 400 V, 250 kVA distribution transformer.
pub(crate) fn spec_250_kva() -> DesignSpec {
    DesignSpec::new(
        ElectricPotential::new::<volt>(20_000.0),
        ElectricPotential::new::<volt>(400.0),
        Power::new::<kilowatt>(250.0),
    )
    .unwrap()
}

/// A design from a core section in cm² and a copper section in mm².
pub(crate) fn design(core_cm2: f64, copper_mm2: f64) -> DesignVariables {
    DesignVariables::new(
        Area::new::<square_centimeter>(core_cm2),
        Area::new::<square_millimeter>(copper_mm2),
    )
    .unwrap()
}
