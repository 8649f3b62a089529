//! Physical constants and numerical tolerances.
//!
//! ## Accuracy
//!
//! [`VACUUM_PERMITTIVITY`] follows CODATA 2018 to 11 significant figures.
//! [`REFERENCE_PERMITTIVITY`] is the rounded value used by the reference
//! capacitor configuration so that its published numbers are reproduced
//! exactly.

/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Rounded ε₀ used by the reference capacitor (8.854 × 10⁻¹² F/m).
pub const REFERENCE_PERMITTIVITY: f64 = 8.854e-12;

/// Points closer than this to the z-axis (m) are removed from the sample cloud.
pub const AXIS_EXCLUSION: f64 = 1.0e-6;

/// Floor applied to a planar radius of exactly zero before dividing by it.
pub const RADIUS_FLOOR: f64 = 1.0e-12;

/// Floor applied to a field magnitude of exactly zero before normalizing.
pub const MAGNITUDE_FLOOR: f64 = 1.0e-12;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reference_permittivity_is_close_to_codata() {
        assert_relative_eq!(REFERENCE_PERMITTIVITY, VACUUM_PERMITTIVITY, max_relative = 1.0e-4);
    }
}
