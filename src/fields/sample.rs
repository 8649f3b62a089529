use crate::constants::MAGNITUDE_FLOOR;
use crate::math::{R3, Scalar};

/// Electric field evaluated at one sample point.
///
/// The direction is always a unit vector so glyphs can be drawn at a fixed
/// length; the magnitude is kept separately for colour mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Sample position in meters.
    pub position: R3,
    /// Field vector E in volts per meter (V/m).
    pub vector: R3,
    /// Unit direction of `vector`.
    pub direction: R3,
    /// |E| in V/m, floored at [`MAGNITUDE_FLOOR`] when the field vanishes.
    pub magnitude: Scalar,
}

impl FieldSample {
    /// Builds a sample from a raw field vector.
    ///
    /// A field of exactly zero magnitude is divided by [`MAGNITUDE_FLOOR`]
    /// instead, which yields a zero direction rather than NaN.
    #[must_use]
    pub fn from_vector(position: R3, vector: R3) -> Self {
        let mut magnitude = vector.norm();
        if magnitude == 0.0 {
            magnitude = MAGNITUDE_FLOOR;
        }
        Self {
            position,
            vector,
            direction: vector / magnitude,
            magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn from_vector_normalizes_direction() {
        let sample = FieldSample::from_vector(R3::new(0.02, 0.0, 0.0), R3::new(0.0, 3.0, 4.0));
        assert_relative_eq!(sample.magnitude, 5.0, epsilon = 1.0e-12);
        assert_relative_eq!(sample.direction.norm(), 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_field_is_clamped_not_nan() {
        let sample = FieldSample::from_vector(R3::new(0.02, 0.0, 0.0), R3::zeros());
        assert_eq!(sample.magnitude, MAGNITUDE_FLOOR);
        assert!(sample.direction.iter().all(|c| *c == 0.0));
    }
}
