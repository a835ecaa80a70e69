use twine_solvers::equation::bisection;
use uom::si::{
    area::square_meter,
    f64::{Area, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::{
    models::transformer::cooling::core::EquilibriumConfig, support::constraint::Constrained,
};

/// Solver configuration for the required cooling surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequiredSurfaceConfig {
    /// Surface bracket searched by bisection.
    pub search: [Area; 2],

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the surface area.
    pub area_tol: Area,

    /// Absolute tolerance on the rise residual (achieved − allowable).
    pub rise_tol: TemperatureInterval,

    /// Equilibrium settings used at each candidate surface.
    ///
    /// Tighter than [`EquilibriumConfig::default`] so the residual is smooth
    /// enough for bisection.
    pub equilibrium: EquilibriumConfig,
}

impl Default for RequiredSurfaceConfig {
    fn default() -> Self {
        Self {
            search: [
                Area::new::<square_meter>(0.01),
                Area::new::<square_meter>(1_000.0),
            ],
            max_iters: 100,
            area_tol: Area::new::<square_meter>(1e-9),
            rise_tol: TemperatureInterval::new::<delta_kelvin>(1e-6),
            equilibrium: EquilibriumConfig {
                tolerance: Constrained::new_unchecked(TemperatureInterval::new::<delta_kelvin>(
                    1e-9,
                )),
                max_iters: Constrained::new_unchecked(200),
                ..EquilibriumConfig::default()
            },
        }
    }
}

impl RequiredSurfaceConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.area_tol.get::<square_meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.rise_tol.get::<delta_kelvin>(),
        }
    }

    pub(super) fn bracket(&self) -> [f64; 2] {
        [
            self.search[0].get::<square_meter>(),
            self.search[1].get::<square_meter>(),
        ]
    }
}
