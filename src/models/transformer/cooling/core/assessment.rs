//! Checks and estimates applied to a computed temperature rise.

use uom::si::{
    acceleration::meter_per_second_squared,
    area::square_meter,
    f64::{
        Acceleration, Area, Length, Mass, Power, SpecificHeatCapacity, TemperatureInterval,
        ThermodynamicTemperature, Time, Velocity,
    },
    length::meter,
    mass::kilogram,
    power::watt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    units::{HeatTransferCoefficient, TemperatureDifference, watt_per_square_meter_kelvin},
};

use super::air::STEFAN_BOLTZMANN;

/// Absolute temperature reached by a body `rise` above `ambient`.
#[must_use]
pub fn final_temperature(
    ambient: ThermodynamicTemperature,
    rise: TemperatureInterval,
) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(ambient.get::<kelvin>() + rise.get::<delta_kelvin>())
}

/// Winding hotspot estimate of an ONAN unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnanHotspot {
    /// Hotspot to top-oil gradient, default 15 K.
    pub gradient: TemperatureInterval,
}

impl Default for OnanHotspot {
    fn default() -> Self {
        Self {
            gradient: TemperatureInterval::new::<delta_kelvin>(15.0),
        }
    }
}

impl OnanHotspot {
    /// `ambient + top-oil rise + gradient`.
    #[must_use]
    pub fn temperature(
        &self,
        ambient: ThermodynamicTemperature,
        top_oil_rise: TemperatureInterval,
    ) -> ThermodynamicTemperature {
        final_temperature(ambient, top_oil_rise + self.gradient)
    }
}

/// Insulation thermal class with its permitted average temperature rise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InsulationClass {
    /// 60 K.
    #[default]
    A,
    /// 80 K.
    B,
    /// 100 K.
    F,
    /// 125 K.
    H,
}

impl InsulationClass {
    /// Largest temperature rise the class permits.
    #[must_use]
    pub fn max_rise(self) -> TemperatureInterval {
        let limit_k = match self {
            Self::A => 60.0,
            Self::B => 80.0,
            Self::F => 100.0,
            Self::H => 125.0,
        };
        TemperatureInterval::new::<delta_kelvin>(limit_k)
    }

    /// Whether `rise` is within the class limit (inclusive).
    #[must_use]
    pub fn permits(self, rise: TemperatureInterval) -> bool {
        rise <= self.max_rise()
    }
}

/// Heat radiated by a grey surface, `εσA(Ts⁴ − Ta⁴)`.
///
/// Negative when the surface is colder than its surroundings.
#[must_use]
pub fn radiation_loss(
    surface_temperature: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
    emissivity: Constrained<f64, UnitInterval>,
    surface: Constrained<Area, StrictlyPositive>,
) -> Power {
    let ts = surface_temperature.get::<kelvin>();
    let ta = ambient.get::<kelvin>();
    let area_m2 = surface.into_inner().get::<square_meter>();

    Power::new::<watt>(
        emissivity.into_inner() * STEFAN_BOLTZMANN * area_m2 * (ts.powi(4) - ta.powi(4)),
    )
}

/// First-order thermal time constant `m·c / (h·A)`.
#[must_use]
pub fn thermal_time_constant(
    mass: Constrained<Mass, StrictlyPositive>,
    specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    h: Constrained<HeatTransferCoefficient, StrictlyPositive>,
    surface: Constrained<Area, StrictlyPositive>,
) -> Time {
    let heat_capacity = mass.into_inner().get::<kilogram>()
        * specific_heat.into_inner().get::<joule_per_kilogram_kelvin>();
    let conductance =
        watt_per_square_meter_kelvin(h.into_inner()) * surface.into_inner().get::<square_meter>();

    Time::new::<second>(heat_capacity / conductance)
}

/// Temperature after `elapsed` of a first-order approach to `target`.
///
/// `T(t) = T_f − (T_f − T_0)·exp(−t/τ)`
#[must_use]
pub fn transient_temperature(
    initial: ThermodynamicTemperature,
    target: ThermodynamicTemperature,
    elapsed: Time,
    time_constant: Constrained<Time, StrictlyPositive>,
) -> ThermodynamicTemperature {
    let decay = (-elapsed.get::<second>() / time_constant.into_inner().get::<second>()).exp();
    let gap = target.minus(initial).get::<delta_kelvin>();

    ThermodynamicTemperature::new::<kelvin>(target.get::<kelvin>() - gap * decay)
}

/// Buoyancy-driven oil circulation in a tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OilCirculation {
    /// Volumetric expansion coefficient of the oil, 1/K.
    pub expansion_coefficient: f64,

    /// Height of the oil column between the heat source and the cooler.
    pub height: Length,

    /// Temperature difference between hot and cold oil columns.
    pub temperature_difference: TemperatureInterval,

    pub gravity: Acceleration,
}

impl Default for OilCirculation {
    fn default() -> Self {
        Self {
            expansion_coefficient: 0.0007,
            height: Length::new::<meter>(1.5),
            temperature_difference: TemperatureInterval::new::<delta_kelvin>(10.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
        }
    }
}

impl OilCirculation {
    /// Rough natural circulation velocity, `√(2·a·H)` with `a = g·H·β·Δt`.
    ///
    /// Low values suggest forced oil or air circulation is needed.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        let height_m = self.height.get::<meter>();
        let buoyant_acceleration = self.gravity.get::<meter_per_second_squared>()
            * height_m
            * self.expansion_coefficient
            * self.temperature_difference.get::<delta_kelvin>();

        Velocity::new::<meter_per_second>((2.0 * buoyant_acceleration * height_m).max(0.0).sqrt())
    }
}
