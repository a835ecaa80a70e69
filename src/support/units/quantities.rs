use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N3, P1, Z0},
};

/// Surface heat transfer coefficient, W/m²·K in SI.
pub type HeatTransferCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`HeatTransferCoefficient`] from a value in W/m²·K.
#[must_use]
pub fn heat_transfer_coefficient(watt_per_square_meter_kelvin: f64) -> HeatTransferCoefficient {
    HeatTransferCoefficient {
        dimension: PhantomData,
        units: PhantomData,
        value: watt_per_square_meter_kelvin,
    }
}

/// Returns the value of a [`HeatTransferCoefficient`] in W/m²·K.
#[must_use]
pub fn watt_per_square_meter_kelvin(h: HeatTransferCoefficient) -> f64 {
    h.value
}
