//! Oil-immersed cooling: series oil-to-wall and wall-to-air resistances.

use uom::si::{
    area::square_meter,
    f64::{Area, Power, TemperatureInterval, Velocity},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::{HeatTransferCoefficient, heat_transfer_coefficient, watt_per_square_meter_kelvin},
};

use super::CoolingError;

/// Film coefficients of a naturally cooled (ONAN) tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnanCoefficients {
    /// Oil to tank wall, default 100 W/m²·K.
    pub oil_to_wall: Constrained<HeatTransferCoefficient, StrictlyPositive>,

    /// Tank wall to still air, default 10 W/m²·K.
    pub wall_to_air: Constrained<HeatTransferCoefficient, StrictlyPositive>,
}

impl Default for OnanCoefficients {
    fn default() -> Self {
        Self {
            oil_to_wall: Constrained::new_unchecked(heat_transfer_coefficient(100.0)),
            wall_to_air: Constrained::new_unchecked(heat_transfer_coefficient(10.0)),
        }
    }
}

/// Fan-cooled (ONAF) tank: the air side is forced convection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnafCoefficients {
    /// Air velocity over the tank, default 3 m/s.
    pub air_velocity: Constrained<Velocity, NonNegative>,

    /// Oil to tank wall, default 100 W/m²·K.
    pub oil_to_wall: Constrained<HeatTransferCoefficient, StrictlyPositive>,
}

impl Default for OnafCoefficients {
    fn default() -> Self {
        Self {
            air_velocity: Constrained::new_unchecked(Velocity::new::<meter_per_second>(3.0)),
            oil_to_wall: Constrained::new_unchecked(heat_transfer_coefficient(100.0)),
        }
    }
}

/// Empirical forced convection coefficient in air, `10.45 − v + 10·√v`.
///
/// # Errors
///
/// Returns [`CoolingError::InvalidDomainInput`] when the correlation gives a
/// non-positive coefficient, which happens above roughly 122 m/s.
pub fn forced_convection_coefficient(
    air_velocity: Constrained<Velocity, NonNegative>,
) -> Result<HeatTransferCoefficient, CoolingError> {
    let v = air_velocity.into_inner().get::<meter_per_second>();
    let h = 10.45 - v + 10.0 * v.sqrt();

    StrictlyPositive::new(h).map_err(CoolingError::invalid("forced convection coefficient"))?;
    Ok(heat_transfer_coefficient(h))
}

/// Series combination `1 / (1/h₁ + 1/h₂)`.
fn series(h1: f64, h2: f64) -> f64 {
    1.0 / (1.0 / h1 + 1.0 / h2)
}

fn rise(
    losses: Constrained<Power, NonNegative>,
    surface: Constrained<Area, StrictlyPositive>,
    h_eq: f64,
) -> TemperatureInterval {
    let losses_w = losses.into_inner().get::<watt>();
    let surface_m2 = surface.into_inner().get::<square_meter>();
    TemperatureInterval::new::<delta_kelvin>(losses_w / (h_eq * surface_m2))
}

pub(crate) fn onan_rise(
    losses: Constrained<Power, NonNegative>,
    surface: Constrained<Area, StrictlyPositive>,
    coefficients: &OnanCoefficients,
) -> TemperatureInterval {
    let h_eq = series(
        watt_per_square_meter_kelvin(coefficients.oil_to_wall.into_inner()),
        watt_per_square_meter_kelvin(coefficients.wall_to_air.into_inner()),
    );
    rise(losses, surface, h_eq)
}

pub(crate) fn onaf_rise(
    losses: Constrained<Power, NonNegative>,
    surface: Constrained<Area, StrictlyPositive>,
    coefficients: &OnafCoefficients,
) -> Result<TemperatureInterval, CoolingError> {
    let forced = forced_convection_coefficient(coefficients.air_velocity)?;
    let h_eq = series(
        watt_per_square_meter_kelvin(coefficients.oil_to_wall.into_inner()),
        watt_per_square_meter_kelvin(forced),
    );
    Ok(rise(losses, surface, h_eq))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn losses(w: f64) -> Constrained<Power, NonNegative> {
        NonNegative::new(Power::new::<watt>(w)).unwrap()
    }

    fn surface(m2: f64) -> Constrained<Area, StrictlyPositive> {
        StrictlyPositive::new(Area::new::<square_meter>(m2)).unwrap()
    }

    fn velocity(m_per_s: f64) -> Constrained<Velocity, NonNegative> {
        NonNegative::new(Velocity::new::<meter_per_second>(m_per_s)).unwrap()
    }

    #[test]
    fn onan_with_default_films() {
        // h_eq = 1 / (1/100 + 1/10) = 9.0909 W/m²·K
        let rise = onan_rise(losses(1_000.0), surface(2.0), &OnanCoefficients::default());
        assert_relative_eq!(rise.get::<delta_kelvin>(), 55.0, epsilon = 1e-9);
    }

    #[test]
    fn onaf_beats_onan() {
        let onan = onan_rise(losses(1_000.0), surface(2.0), &OnanCoefficients::default());
        let onaf = onaf_rise(losses(1_000.0), surface(2.0), &OnafCoefficients::default()).unwrap();

        // h_forced(3 m/s) = 7.45 + 10·√3
        let forced = 7.45 + 10.0 * 3.0_f64.sqrt();
        let expected = 1_000.0 / (series(100.0, forced) * 2.0);
        assert_relative_eq!(onaf.get::<delta_kelvin>(), expected, epsilon = 1e-9);
        assert!(onaf < onan);
    }

    #[test]
    fn zero_losses_give_zero_rise() {
        let rise = onan_rise(losses(0.0), surface(2.0), &OnanCoefficients::default());
        assert_eq!(rise.get::<delta_kelvin>(), 0.0);
    }

    #[test]
    fn forced_coefficient_in_still_air() {
        let h = forced_convection_coefficient(velocity(0.0)).unwrap();
        assert_relative_eq!(watt_per_square_meter_kelvin(h), 10.45);
    }

    #[test]
    fn forced_coefficient_rejects_extreme_velocity() {
        assert!(matches!(
            forced_convection_coefficient(velocity(200.0)),
            Err(CoolingError::InvalidDomainInput { .. })
        ));

        let coefficients = OnafCoefficients {
            air_velocity: velocity(200.0),
            ..OnafCoefficients::default()
        };
        assert!(onaf_rise(losses(1_000.0), surface(2.0), &coefficients).is_err());
    }
}
