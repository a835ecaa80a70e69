use std::cmp::Ordering;

use uom::si::{
    area::{square_centimeter, square_millimeter},
    f64::Area,
};

use crate::support::constraint::StrictlyPositive;

use super::SizingError;

/// A candidate design: core leg section and winding conductor section.
///
/// Both sections are strictly positive by construction.
/// The solver works on the raw pair `[core in cm², copper in mm²]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignVariables {
    core_section: Area,
    copper_section: Area,
}

impl DesignVariables {
    /// Creates a design-variable pair.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidDomainInput`] if either section is not strictly positive.
    pub fn new(core_section: Area, copper_section: Area) -> Result<Self, SizingError> {
        Ok(Self {
            core_section: StrictlyPositive::new(core_section)
                .map_err(SizingError::invalid("core section"))?
                .into_inner(),
            copper_section: StrictlyPositive::new(copper_section)
                .map_err(SizingError::invalid("copper section"))?
                .into_inner(),
        })
    }

    /// Creates a pair without checking positivity.
    ///
    /// The caller must guarantee both sections are strictly positive.
    pub(super) fn new_unchecked(core_section: Area, copper_section: Area) -> Self {
        Self {
            core_section,
            copper_section,
        }
    }

    pub(super) fn to_solver(self) -> [f64; 2] {
        [self.core_cm2(), self.copper_mm2()]
    }

    #[must_use]
    pub fn core_section(&self) -> Area {
        self.core_section
    }

    #[must_use]
    pub fn copper_section(&self) -> Area {
        self.copper_section
    }

    pub(super) fn core_cm2(&self) -> f64 {
        self.core_section.get::<square_centimeter>()
    }

    pub(super) fn copper_mm2(&self) -> f64 {
        self.copper_section.get::<square_millimeter>()
    }
}

/// A search range `0 < min < max` for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRange {
    min: Area,
    max: Area,
}

impl SectionRange {
    /// Creates a range, rejecting empty, degenerate or non-positive ones.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidBounds`] unless `0 < min < max`.
    pub fn new(variable: &'static str, min: Area, max: Area) -> Result<Self, SizingError> {
        if StrictlyPositive::new(min).is_err() || min.partial_cmp(&max) != Some(Ordering::Less) {
            return Err(SizingError::InvalidBounds { variable, min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Area {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Area {
        self.max
    }

    fn clamp(&self, value: Area) -> Area {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Box bounds for the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignBounds {
    /// Core leg section range.
    pub core: SectionRange,

    /// Conductor section range.
    pub copper: SectionRange,
}

impl Default for DesignBounds {
    /// Core 10–200 cm², copper 50–1000 mm².
    fn default() -> Self {
        Self {
            core: SectionRange {
                min: Area::new::<square_centimeter>(10.0),
                max: Area::new::<square_centimeter>(200.0),
            },
            copper: SectionRange {
                min: Area::new::<square_millimeter>(50.0),
                max: Area::new::<square_millimeter>(1000.0),
            },
        }
    }
}

impl DesignBounds {
    /// Creates bounds from raw ranges in cm² (core) and mm² (copper).
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidBounds`] unless `0 < min < max` for both ranges.
    pub fn from_cm2_mm2(core: (f64, f64), copper: (f64, f64)) -> Result<Self, SizingError> {
        Ok(Self {
            core: SectionRange::new(
                "core section",
                Area::new::<square_centimeter>(core.0),
                Area::new::<square_centimeter>(core.1),
            )?,
            copper: SectionRange::new(
                "copper section",
                Area::new::<square_millimeter>(copper.0),
                Area::new::<square_millimeter>(copper.1),
            )?,
        })
    }

    /// Projects a design onto the box.
    #[must_use]
    pub fn clamp(&self, design: DesignVariables) -> DesignVariables {
        DesignVariables {
            core_section: self.core.clamp(design.core_section),
            copper_section: self.copper.clamp(design.copper_section),
        }
    }

    /// Projects raw solver coordinates `[cm², mm²]` onto the box.
    ///
    /// The box is strictly positive, so the result is always a valid design.
    pub(super) fn project(&self, x: &[f64]) -> DesignVariables {
        self.clamp(DesignVariables::new_unchecked(
            Area::new::<square_centimeter>(x[0]),
            Area::new::<square_millimeter>(x[1]),
        ))
    }

    /// Solver bounds `[(core min, core max) in cm², (copper min, copper max) in mm²]`.
    pub(super) fn to_solver(self) -> [(f64, f64); 2] {
        [
            (
                self.core.min.get::<square_centimeter>(),
                self.core.max.get::<square_centimeter>(),
            ),
            (
                self.copper.min.get::<square_millimeter>(),
                self.copper.max.get::<square_millimeter>(),
            ),
        ]
    }
}
