use tracing::debug;

use crate::constants::RADIUS_FLOOR;
use crate::errors::FieldError;
use crate::geometry::GeometryParameters;
use crate::materials::PhysicalConstants;
use crate::math::{R3, Scalar};

use super::sample::FieldSample;

/// Returns `ε_gap / (ε_gap·ln(r_d/r_a) + ε_d·ln(r_b/r_d))`.
///
/// Proportional to the capacitance per unit length of the layered cross-section.
pub fn geometric_factor(constants: &PhysicalConstants, geometry: &GeometryParameters) -> Result<Scalar, FieldError> {
    constants.validate()?;
    geometry.validate()?;
    let eps_gap = constants.gap_permittivity();
    let eps_dielectric = constants.dielectric_permittivity();
    let denominator = eps_gap * (geometry.interface_radius / geometry.inner_radius).ln()
        + eps_dielectric * (geometry.outer_radius / geometry.interface_radius).ln();
    Ok(eps_gap / denominator)
}

/// Finite coaxial capacitor with a precomputed geometric factor.
///
/// Construction validates the geometry once; evaluation afterwards cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoaxialCapacitor {
    geometry: GeometryParameters,
    geometric_factor: Scalar,
}

impl CoaxialCapacitor {
    /// Validates `constants` and `geometry` and computes the geometric factor.
    pub fn new(constants: &PhysicalConstants, geometry: &GeometryParameters) -> Result<Self, FieldError> {
        let geometric_factor = geometric_factor(constants, geometry)?;
        Ok(Self { geometry: *geometry, geometric_factor })
    }

    /// Geometry this capacitor was built from.
    #[must_use]
    pub fn geometry(&self) -> &GeometryParameters {
        &self.geometry
    }

    /// Dimensionless geometric factor g.
    #[must_use]
    pub fn geometric_factor(&self) -> Scalar {
        self.geometric_factor
    }

    #[inline]
    fn prefactor(&self, r: Scalar) -> Scalar {
        self.geometry.voltage * self.geometric_factor / (2.0 * r)
    }

    /// Radial component E_r(r, z) in V/m. `r` must be positive.
    #[must_use]
    pub fn radial_field(&self, r: Scalar, z: Scalar) -> Scalar {
        let h = self.geometry.half_length();
        let near = z + h;
        let far = z - h;
        let term1 = near / (r * r + near * near).sqrt();
        let term2 = far / (r * r + far * far).sqrt();
        self.prefactor(r) * (term1 - term2)
    }

    /// Axial component E_z(r, z) in V/m. `r` must be positive.
    #[must_use]
    pub fn axial_field(&self, r: Scalar, z: Scalar) -> Scalar {
        let h = self.geometry.half_length();
        let r2 = r * r;
        let near = z + h;
        let far = z - h;
        -self.prefactor(r) * (r2 / (r2 + near * near).powf(1.5) - r2 / (r2 + far * far).powf(1.5))
    }

    /// Field vector at a Cartesian point.
    ///
    /// A point exactly on the axis uses r = [`RADIUS_FLOOR`]; the sample
    /// grid never produces one.
    #[must_use]
    pub fn field_vector(&self, point: &R3) -> R3 {
        let mut r = (point.x * point.x + point.y * point.y).sqrt();
        if r == 0.0 {
            r = RADIUS_FLOOR;
        }
        let er = self.radial_field(r, point.z);
        let ez = self.axial_field(r, point.z);
        R3::new(er * (point.x / r), er * (point.y / r), ez)
    }

    /// Field sample (position, unit direction, magnitude) at a Cartesian point.
    #[must_use]
    pub fn field_at(&self, point: &R3) -> FieldSample {
        FieldSample::from_vector(*point, self.field_vector(point))
    }

    /// Evaluates every point, preserving input order.
    ///
    /// With the `parallel` feature the map runs on the rayon pool; each point
    /// is independent so the output is identical to the sequential path.
    #[must_use]
    pub fn evaluate(&self, points: &[R3]) -> Vec<FieldSample> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            points.par_iter().map(|p| self.field_at(p)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            points.iter().map(|p| self.field_at(p)).collect()
        }
    }
}

/// Evaluates the capacitor field at every point.
///
/// Fails with [`FieldError::InvalidGeometry`] before evaluating anything if the
/// radii are out of order or a permittivity is not positive.
pub fn evaluate_field(
    points: &[R3],
    constants: &PhysicalConstants,
    geometry: &GeometryParameters,
) -> Result<Vec<FieldSample>, FieldError> {
    let capacitor = CoaxialCapacitor::new(constants, geometry)?;
    debug!(
        points = points.len(),
        geometric_factor = capacitor.geometric_factor(),
        "evaluating coaxial field"
    );
    Ok(capacitor.evaluate(points))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::MAGNITUDE_FLOOR;

    fn reference() -> CoaxialCapacitor {
        CoaxialCapacitor::new(&PhysicalConstants::default(), &GeometryParameters::default()).unwrap()
    }

    #[test]
    fn geometric_factor_matches_reference_capacitor() {
        assert_relative_eq!(reference().geometric_factor(), 0.934_002_992_720_196, max_relative = 1.0e-12);
    }

    #[test]
    fn mid_plane_field_is_purely_radial() {
        let sample = reference().field_at(&R3::new(0.02, 0.0, 0.0));
        assert_eq!(sample.vector.z, 0.0);
        assert_relative_eq!(sample.vector.x, 457_932.642_849_455_8, max_relative = 1.0e-10);
        assert_relative_eq!(sample.direction, R3::new(1.0, 0.0, 0.0), epsilon = 1.0e-12);
    }

    #[test]
    fn off_mid_plane_components_match_closed_form() {
        let cap = reference();
        assert_relative_eq!(cap.radial_field(0.02, 0.05), 448_252.458_415_778_6, max_relative = 1.0e-10);
        assert_relative_eq!(cap.axial_field(0.02, 0.05), 571_116.719_893_126, max_relative = 1.0e-10);
        assert_relative_eq!(cap.axial_field(0.02, -0.05), -571_116.719_893_126, max_relative = 1.0e-10);
    }

    #[test]
    fn radial_component_follows_azimuth() {
        let cap = reference();
        let sample = cap.field_at(&R3::new(0.0, -0.02, 0.0));
        assert_relative_eq!(sample.vector.y, -457_932.642_849_455_8, max_relative = 1.0e-10);
        assert!(sample.vector.x.abs() < 1.0e-6);
    }

    #[test]
    fn on_axis_point_is_clamped_not_nan() {
        let sample = reference().field_at(&R3::new(0.0, 0.0, 0.01));
        assert!(sample.magnitude.is_finite());
        assert!(sample.direction.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn zero_voltage_gives_clamped_magnitude() {
        let geometry = GeometryParameters { voltage: 0.0, ..GeometryParameters::default() };
        let cap = CoaxialCapacitor::new(&PhysicalConstants::default(), &geometry).unwrap();
        let sample = cap.field_at(&R3::new(0.02, 0.0, 0.0));
        assert_eq!(sample.magnitude, MAGNITUDE_FLOOR);
        assert!(sample.direction.iter().all(|c| !c.is_nan()));
    }

    #[test]
    fn out_of_order_radii_fail_before_evaluation() {
        let geometry = GeometryParameters {
            inner_radius: 0.02,
            interface_radius: 0.01,
            outer_radius: 0.03,
            sampling_radius: 0.05,
            ..GeometryParameters::default()
        };
        let result = evaluate_field(&[R3::new(0.04, 0.0, 0.0)], &PhysicalConstants::default(), &geometry);
        assert!(matches!(result, Err(FieldError::InvalidGeometry(_))));
    }

    #[test]
    fn output_preserves_input_order() {
        let points = [R3::new(0.02, 0.0, 0.0), R3::new(0.0, 0.025, 0.03), R3::new(-0.03, 0.0, -0.09)];
        let samples = evaluate_field(&points, &PhysicalConstants::default(), &GeometryParameters::default()).unwrap();
        assert_eq!(samples.len(), points.len());
        for (sample, point) in samples.iter().zip(points.iter()) {
            assert_eq!(sample.position, *point);
        }
    }

    #[test]
    fn batch_evaluation_matches_pointwise() {
        let geometry = GeometryParameters::default();
        let cloud = crate::grid::build_sample_grid(&geometry, 4.0e-3).unwrap();
        let cap = reference();
        let batch = cap.evaluate(cloud.points());
        let pointwise: Vec<FieldSample> = cloud.points().iter().map(|p| cap.field_at(p)).collect();
        assert_eq!(batch, pointwise);
    }
}
