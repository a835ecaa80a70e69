//! Fixed-point resolution of the steady-state temperature rise.
//!
//! The convective coefficient depends on the temperature rise through the
//! Rayleigh number, and the rise depends on the coefficient through the heat
//! balance `P = h·A·Δt`. Starting from a seed rise, each iteration evaluates
//! `h(Δt)` and updates `Δt ← P / (h·A)` until two successive estimates agree
//! within the tolerance.

use tracing::{trace, warn};
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive, UnitInterval};

use super::{AirProperties, air::STEFAN_BOLTZMANN};

/// Settings of the fixed-point iteration.
///
/// The seed must be positive: a zero rise gives a zero Rayleigh number and no
/// convection, which would read as an unbounded surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumConfig {
    /// Temperature rise the iteration starts from.
    pub initial_rise: Constrained<TemperatureInterval, StrictlyPositive>,

    /// Largest change between successive estimates accepted as converged.
    pub tolerance: Constrained<TemperatureInterval, StrictlyPositive>,

    /// Maximum number of iterations.
    pub max_iters: Constrained<usize, StrictlyPositive>,

    /// Properties of the surrounding air.
    pub air: AirProperties,
}

impl Default for EquilibriumConfig {
    fn default() -> Self {
        Self {
            initial_rise: Constrained::new_unchecked(TemperatureInterval::new::<delta_kelvin>(10.0)),
            tolerance: Constrained::new_unchecked(TemperatureInterval::new::<delta_kelvin>(0.1)),
            max_iters: Constrained::new_unchecked(10),
            air: AirProperties::default(),
        }
    }
}

/// Surface radiation added to natural convection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationConfig {
    /// Surface emissivity; painted tank steel is close to 0.9.
    pub emissivity: Constrained<f64, UnitInterval>,

    /// Temperature of the surroundings.
    pub ambient: ThermodynamicTemperature,
}

impl Default for RadiationConfig {
    fn default() -> Self {
        Self {
            emissivity: Constrained::new_unchecked(0.9),
            ambient: ThermodynamicTemperature::new::<degree_celsius>(20.0),
        }
    }
}

impl RadiationConfig {
    /// Linearized radiation coefficient `εσ(Ts² + Ta²)(Ts + Ta)`, W/m²·K.
    ///
    /// Multiplied by `Ts − Ta` it gives exactly `εσ(Ts⁴ − Ta⁴)`, and it stays
    /// finite when the rise is zero.
    pub(super) fn coefficient_raw(&self, rise_k: f64) -> f64 {
        let ta = self.ambient.get::<kelvin>();
        let ts = ta + rise_k;
        self.emissivity.into_inner() * STEFAN_BOLTZMANN * (ts * ts + ta * ta) * (ts + ta)
    }
}

/// Outcome of a thermal equilibrium solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Equilibrium {
    /// Two successive estimates agreed within the tolerance.
    Converged {
        rise: TemperatureInterval,
        iters: usize,
    },

    /// The iteration budget ran out; `rise` is the last estimate.
    IterationLimit {
        rise: TemperatureInterval,

        /// Change produced by the final iteration.
        last_change: TemperatureInterval,
    },

    /// The heat transfer coefficient vanished while losses are positive, so
    /// no finite rise balances the heat.
    Unbounded { iters: usize },
}

impl Equilibrium {
    /// The temperature rise, unless it is unbounded.
    #[must_use]
    pub fn rise(&self) -> Option<TemperatureInterval> {
        match self {
            Self::Converged { rise, .. } | Self::IterationLimit { rise, .. } => Some(*rise),
            Self::Unbounded { .. } => None,
        }
    }

    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// State of the fixed-point loop.
#[derive(Debug, Clone, Copy)]
struct ThermalState {
    rise_k: f64,
    iters: usize,
    surface_m2: f64,
    length_m: f64,
    losses_w: f64,
}

impl ThermalState {
    fn seed(
        losses: Constrained<Power, NonNegative>,
        surface: Constrained<Area, StrictlyPositive>,
        length: Constrained<Length, StrictlyPositive>,
        config: &EquilibriumConfig,
    ) -> Self {
        Self {
            rise_k: config.initial_rise.into_inner().get::<delta_kelvin>(),
            iters: 0,
            surface_m2: surface.into_inner().get::<square_meter>(),
            length_m: length.into_inner().get::<meter>(),
            losses_w: losses.into_inner().get::<watt>(),
        }
    }

    /// Rise balancing the losses with coefficient `h`, or `None` when `h`
    /// cannot carry positive losses.
    fn balanced_rise(&self, h: f64) -> Option<f64> {
        if self.losses_w == 0.0 {
            Some(0.0)
        } else if h > 0.0 {
            Some(self.losses_w / (h * self.surface_m2))
        } else {
            None
        }
    }
}

/// Runs the fixed-point loop with `h_of(rise_k, length_m)` as the total
/// surface coefficient.
fn solve(
    mut state: ThermalState,
    config: &EquilibriumConfig,
    h_of: impl Fn(f64, f64) -> f64,
) -> Equilibrium {
    let tol = config.tolerance.into_inner().get::<delta_kelvin>();
    let max_iters = config.max_iters.into_inner();
    let mut last_change = f64::INFINITY;

    while state.iters < max_iters {
        state.iters += 1;
        let h = h_of(state.rise_k, state.length_m);

        let Some(next) = state.balanced_rise(h) else {
            warn!(
                iters = state.iters,
                rise_k = state.rise_k,
                losses_w = state.losses_w,
                "no convective heat transfer, temperature rise is unbounded"
            );
            return Equilibrium::Unbounded { iters: state.iters };
        };

        last_change = (next - state.rise_k).abs();
        trace!(iter = state.iters, h, rise_k = next, change = last_change, "thermal equilibrium");
        state.rise_k = next;

        if last_change < tol {
            return Equilibrium::Converged {
                rise: TemperatureInterval::new::<delta_kelvin>(state.rise_k),
                iters: state.iters,
            };
        }
    }

    warn!(
        iters = state.iters,
        rise_k = state.rise_k,
        last_change,
        "thermal equilibrium hit iteration limit"
    );
    Equilibrium::IterationLimit {
        rise: TemperatureInterval::new::<delta_kelvin>(state.rise_k),
        last_change: TemperatureInterval::new::<delta_kelvin>(last_change),
    }
}

pub(crate) fn natural_convection(
    losses: Constrained<Power, NonNegative>,
    surface: Constrained<Area, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
    config: &EquilibriumConfig,
) -> Equilibrium {
    let state = ThermalState::seed(losses, surface, length, config);
    solve(state, config, |rise_k, length_m| {
        config.air.natural_convection_raw(rise_k, length_m)
    })
}

pub(crate) fn combined_convection_radiation(
    losses: Constrained<Power, NonNegative>,
    surface: Constrained<Area, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
    radiation: &RadiationConfig,
    config: &EquilibriumConfig,
) -> Equilibrium {
    let state = ThermalState::seed(losses, surface, length, config);
    solve(state, config, |rise_k, length_m| {
        config.air.natural_convection_raw(rise_k, length_m) + radiation.coefficient_raw(rise_k)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn inputs(
        losses_w: f64,
        surface_m2: f64,
        length_m: f64,
    ) -> (
        Constrained<Power, NonNegative>,
        Constrained<Area, StrictlyPositive>,
        Constrained<Length, StrictlyPositive>,
    ) {
        (
            NonNegative::new(Power::new::<watt>(losses_w)).unwrap(),
            StrictlyPositive::new(Area::new::<square_meter>(surface_m2)).unwrap(),
            StrictlyPositive::new(Length::new::<meter>(length_m)).unwrap(),
        )
    }

    fn rise_k(eq: Equilibrium) -> f64 {
        eq.rise().unwrap().get::<delta_kelvin>()
    }

    #[test]
    fn zero_losses_converge_to_zero_rise() {
        let (p, a, l) = inputs(0.0, 1.0, 1.0);
        let eq = natural_convection(p, a, l, &EquilibriumConfig::default());

        assert!(eq.is_converged());
        assert_eq!(rise_k(eq), 0.0);

        let eq = combined_convection_radiation(
            p,
            a,
            l,
            &RadiationConfig::default(),
            &EquilibriumConfig::default(),
        );
        assert_eq!(rise_k(eq), 0.0);
    }

    #[test]
    fn reference_rise() {
        let (p, a, l) = inputs(500.0, 2.0, 1.0);
        let eq = natural_convection(p, a, l, &EquilibriumConfig::default());

        assert!(matches!(eq, Equilibrium::Converged { iters: 8, .. }));
        assert_relative_eq!(rise_k(eq), 59.7435, epsilon = 1e-3);
    }

    #[test]
    fn rise_grows_with_losses() {
        let config = EquilibriumConfig::default();
        let rises: Vec<f64> = [100.0, 250.0, 500.0, 1_000.0, 2_000.0]
            .into_iter()
            .map(|losses| {
                let (p, a, l) = inputs(losses, 2.0, 1.0);
                let eq = natural_convection(p, a, l, &config);
                assert!(eq.is_converged());
                rise_k(eq)
            })
            .collect();

        assert!(rises.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn non_convecting_surface_is_unbounded() {
        let (p, a, l) = inputs(500.0, 1.0, 0.01);
        let eq = natural_convection(p, a, l, &EquilibriumConfig::default());

        assert_eq!(eq, Equilibrium::Unbounded { iters: 1 });
        assert_eq!(eq.rise(), None);
    }

    #[test]
    fn iteration_limit_keeps_last_estimate() {
        let (p, a, l) = inputs(1_000.0, 2.0, 1.0);
        let config = EquilibriumConfig {
            max_iters: StrictlyPositive::new(3).unwrap(),
            ..EquilibriumConfig::default()
        };

        let eq = natural_convection(p, a, l, &config);
        let Equilibrium::IterationLimit { rise, last_change } = eq else {
            panic!("expected iteration limit, got {eq:?}");
        };
        assert!(rise.get::<delta_kelvin>() > 0.0);
        assert!(last_change >= config.tolerance.into_inner());
    }

    #[test]
    fn radiation_lowers_the_rise() {
        let config = EquilibriumConfig::default();
        for losses in [250.0, 1_000.0, 2_000.0] {
            let (p, a, l) = inputs(losses, 2.0, 1.0);
            let convection = rise_k(natural_convection(p, a, l, &config));
            let combined = rise_k(combined_convection_radiation(
                p,
                a,
                l,
                &RadiationConfig::default(),
                &config,
            ));
            assert!(combined < convection);
        }
    }

    #[test]
    fn linearized_radiation_matches_stefan_boltzmann() {
        let radiation = RadiationConfig::default();
        let ta = radiation.ambient.get::<kelvin>();
        let rise = 60.0;

        let exact = 0.9 * STEFAN_BOLTZMANN * ((ta + rise).powi(4) - ta.powi(4));
        assert_relative_eq!(radiation.coefficient_raw(rise) * rise, exact, max_relative = 1e-12);
    }

    #[test]
    fn black_body_without_convection_still_balances() {
        // Too small to convect, but radiation alone carries the heat.
        let (p, a, l) = inputs(50.0, 1.0, 0.01);
        let radiation = RadiationConfig {
            emissivity: UnitInterval::new(1.0).unwrap(),
            ..RadiationConfig::default()
        };
        let config = EquilibriumConfig {
            tolerance: StrictlyPositive::new(TemperatureInterval::new::<delta_kelvin>(1e-6)).unwrap(),
            max_iters: StrictlyPositive::new(100).unwrap(),
            ..EquilibriumConfig::default()
        };

        let eq = combined_convection_radiation(p, a, l, &radiation, &config);
        assert!(eq.is_converged());
        let rise = rise_k(eq);
        assert_relative_eq!(radiation.coefficient_raw(rise) * rise, 50.0, max_relative = 1e-5);
    }

    #[test]
    fn seed_and_budget_must_be_positive() {
        assert!(StrictlyPositive::new(TemperatureInterval::new::<delta_kelvin>(0.0)).is_err());
        assert!(StrictlyPositive::new(0_usize).is_err());
    }

    #[test]
    fn small_seed_still_converges() {
        let (p, a, l) = inputs(500.0, 2.0, 1.0);
        let config = EquilibriumConfig {
            initial_rise: StrictlyPositive::new(TemperatureInterval::new::<delta_kelvin>(1e-3))
                .unwrap(),
            max_iters: StrictlyPositive::new(50).unwrap(),
            ..EquilibriumConfig::default()
        };

        let eq = natural_convection(p, a, l, &config);
        assert!(eq.is_converged());
        assert_relative_eq!(rise_k(eq), 59.7435, epsilon = 0.1);
    }
}
