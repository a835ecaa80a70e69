use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Power},
    power::watt,
};

use crate::support::constraint::StrictlyPositive;

use super::SizingError;

/// Electrical rating of the transformer being sized.
///
/// Immutable once built. The rated apparent power is carried as a [`Power`]
/// (1 kVA is treated as 1 kW).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignSpec {
    primary_voltage: ElectricPotential,
    secondary_voltage: ElectricPotential,
    rated_power: Power,
}

impl DesignSpec {
    /// Creates a specification from line voltages and rated apparent power.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidDomainInput`] if any value is not strictly positive.
    pub fn new(
        primary_voltage: ElectricPotential,
        secondary_voltage: ElectricPotential,
        rated_power: Power,
    ) -> Result<Self, SizingError> {
        Ok(Self {
            primary_voltage: StrictlyPositive::new(primary_voltage)
                .map_err(SizingError::invalid("primary voltage"))?
                .into_inner(),
            secondary_voltage: StrictlyPositive::new(secondary_voltage)
                .map_err(SizingError::invalid("secondary voltage"))?
                .into_inner(),
            rated_power: StrictlyPositive::new(rated_power)
                .map_err(SizingError::invalid("rated power"))?
                .into_inner(),
        })
    }

    #[must_use]
    pub fn primary_voltage(&self) -> ElectricPotential {
        self.primary_voltage
    }

    #[must_use]
    pub fn secondary_voltage(&self) -> ElectricPotential {
        self.secondary_voltage
    }

    #[must_use]
    pub fn rated_power(&self) -> Power {
        self.rated_power
    }

    /// Rated power in watts (kVA × 1000).
    #[must_use]
    pub fn rated_power_w(&self) -> f64 {
        self.rated_power.get::<watt>()
    }

    /// Secondary line current of a three-phase unit, `S / (√3 · U2)`.
    #[must_use]
    pub fn secondary_current(&self) -> ElectricCurrent {
        let volts = self.secondary_voltage.get::<volt>();
        ElectricCurrent::new::<ampere>(self.rated_power_w() / (3.0_f64.sqrt() * volts))
    }
}
