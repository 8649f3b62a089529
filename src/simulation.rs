//! End-to-end field computation: sample the domain, evaluate, collect.

use tracing::{info, instrument};

use crate::errors::FieldError;
use crate::fields::{CoaxialCapacitor, FieldSample};
use crate::geometry::GeometryParameters;
use crate::grid::build_sample_grid;
use crate::materials::PhysicalConstants;
use crate::math::{R3, Scalar};

/// Default spacing between samples in meters.
pub const DEFAULT_DENSITY: Scalar = 4.0e-3;

/// Field of a dielectric-filled coaxial capacitor over its surrounding region.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DielectricField {
    /// Material permittivities.
    pub constants: PhysicalConstants,
    /// Capacitor and sampling-region geometry.
    pub geometry: GeometryParameters,
    /// Minimum spacing between samples in meters.
    pub density: Scalar,
}

impl DielectricField {
    /// Creates a field model from its parts.
    #[must_use]
    pub const fn new(constants: PhysicalConstants, geometry: GeometryParameters, density: Scalar) -> Self {
        Self { constants, geometry, density }
    }

    /// Validates every parameter without sampling.
    pub fn validate(&self) -> Result<(), FieldError> {
        CoaxialCapacitor::new(&self.constants, &self.geometry).map(|_| ())
    }

    /// Samples the domain and evaluates the field at every sample.
    ///
    /// All validation happens before the first point is generated.
    #[instrument(level = "debug", skip(self), fields(density = self.density))]
    pub fn calculate_field(&self) -> Result<FieldSolution, FieldError> {
        let capacitor = CoaxialCapacitor::new(&self.constants, &self.geometry)?;
        let cloud = build_sample_grid(&self.geometry, self.density)?;
        let samples = capacitor.evaluate(cloud.points());
        let solution = FieldSolution::new(samples);
        let (min, max) = solution.magnitude_range();
        info!(
            samples = solution.len(),
            geometric_factor = capacitor.geometric_factor(),
            min_magnitude = min,
            max_magnitude = max,
            "field evaluated"
        );
        Ok(solution)
    }
}

impl Default for DielectricField {
    fn default() -> Self {
        Self::new(PhysicalConstants::default(), GeometryParameters::default(), DEFAULT_DENSITY)
    }
}

/// Field samples from one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSolution {
    samples: Vec<FieldSample>,
}

impl FieldSolution {
    /// Wraps evaluated samples.
    #[must_use]
    pub fn new(samples: Vec<FieldSample>) -> Self {
        Self { samples }
    }

    /// Samples in point-cloud order.
    #[must_use]
    pub fn samples(&self) -> &[FieldSample] {
        &self.samples
    }

    /// Total samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample positions.
    pub fn points(&self) -> impl Iterator<Item = &R3> + '_ {
        self.samples.iter().map(|s| &s.position)
    }

    /// Unit directions.
    pub fn directions(&self) -> impl Iterator<Item = &R3> + '_ {
        self.samples.iter().map(|s| &s.direction)
    }

    /// Field magnitudes in V/m.
    pub fn magnitudes(&self) -> impl Iterator<Item = Scalar> + '_ {
        self.samples.iter().map(|s| s.magnitude)
    }

    /// Smallest and largest magnitude; `(0.0, 0.0)` when empty.
    #[must_use]
    pub fn magnitude_range(&self) -> (Scalar, Scalar) {
        if self.samples.is_empty() {
            return (0.0, 0.0);
        }
        self.magnitudes()
            .fold((Scalar::INFINITY, Scalar::NEG_INFINITY), |(lo, hi), m| (lo.min(m), hi.max(m)))
    }

    /// Consumes the solution, returning its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<FieldSample> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_produces_unit_directions() {
        let solution = DielectricField::default().calculate_field().unwrap();
        assert_eq!(solution.len(), 6 * 47 * 25);
        for d in solution.directions() {
            assert!((d.norm() - 1.0).abs() < 1.0e-9);
        }
    }

    #[test]
    fn magnitude_range_brackets_every_sample() {
        let solution = DielectricField::default().calculate_field().unwrap();
        let (lo, hi) = solution.magnitude_range();
        assert!(lo > 0.0 && lo < hi);
        assert!(solution.magnitudes().all(|m| m >= lo && m <= hi));
    }

    #[test]
    fn empty_solution_has_zero_range() {
        assert_eq!(FieldSolution::default().magnitude_range(), (0.0, 0.0));
    }

    #[test]
    fn invalid_radii_are_reported_before_sampling() {
        let mut model = DielectricField::default();
        model.geometry.inner_radius = 0.02;
        model.geometry.interface_radius = 0.01;
        model.geometry.outer_radius = 0.03;
        model.geometry.sampling_radius = 0.05;
        assert!(model.validate().is_err());
        assert!(model.calculate_field().is_err());
    }
}
