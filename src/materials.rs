//! Permittivities of the capacitor's gap and dielectric layers.

use crate::constants::REFERENCE_PERMITTIVITY;
use crate::errors::FieldError;
use crate::math::Scalar;

/// Linear isotropic permittivities of the two media between the conductors.
///
/// The gap medium fills `r_a < r < r_d`, the dielectric layer fills
/// `r_d < r < r_b`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Vacuum permittivity ε₀ in F/m.
    pub vacuum_permittivity: Scalar,
    /// Relative permittivity of the gap medium.
    pub gap_relative_permittivity: Scalar,
    /// Relative permittivity of the dielectric layer.
    pub dielectric_relative_permittivity: Scalar,
}

impl PhysicalConstants {
    /// Creates constants from ε₀ and the two relative permittivities.
    #[must_use]
    pub const fn new(
        vacuum_permittivity: Scalar,
        gap_relative_permittivity: Scalar,
        dielectric_relative_permittivity: Scalar,
    ) -> Self {
        Self {
            vacuum_permittivity,
            gap_relative_permittivity,
            dielectric_relative_permittivity,
        }
    }

    /// Absolute permittivity of the gap medium ε_gap in F/m.
    #[must_use]
    pub fn gap_permittivity(&self) -> Scalar {
        self.vacuum_permittivity * self.gap_relative_permittivity
    }

    /// Absolute permittivity of the dielectric layer ε_d in F/m.
    #[must_use]
    pub fn dielectric_permittivity(&self) -> Scalar {
        self.vacuum_permittivity * self.dielectric_relative_permittivity
    }

    /// Checks that every permittivity is finite and strictly positive.
    pub fn validate(&self) -> Result<(), FieldError> {
        for (name, value) in [
            ("vacuum permittivity", self.vacuum_permittivity),
            ("gap relative permittivity", self.gap_relative_permittivity),
            ("dielectric relative permittivity", self.dielectric_relative_permittivity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FieldError::geometry(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PhysicalConstants {
    /// Air gap (εr = 1) and a εr = 5 dielectric layer.
    fn default() -> Self {
        Self::new(REFERENCE_PERMITTIVITY, 1.0, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn absolute_permittivities_scale_with_vacuum() {
        let c = PhysicalConstants::default();
        assert_relative_eq!(c.gap_permittivity(), 8.854e-12);
        assert_relative_eq!(c.dielectric_permittivity(), 5.0 * 8.854e-12, max_relative = 1.0e-15);
    }

    #[test]
    fn negative_relative_permittivity_is_rejected() {
        let c = PhysicalConstants::new(8.854e-12, 1.0, -5.0);
        assert!(matches!(c.validate(), Err(FieldError::InvalidGeometry(_))));
    }
}
