//! Capacitor dimensions, applied voltage and the extent of the sampled region.

use crate::errors::FieldError;
use crate::math::Scalar;

/// Geometry of a finite coaxial capacitor centred at the origin with its axis along z.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParameters {
    /// Inner conductor radius r_a in meters.
    pub inner_radius: Scalar,
    /// Radius of the gap/dielectric interface r_d in meters.
    pub interface_radius: Scalar,
    /// Outer conductor radius r_b in meters.
    pub outer_radius: Scalar,
    /// Axial length L in meters; the capacitor spans z ∈ [-L/2, L/2].
    pub length: Scalar,
    /// Radius R of the sampled region in meters, larger than r_b.
    pub sampling_radius: Scalar,
    /// Applied voltage V₀ in volts.
    pub voltage: Scalar,
}

impl GeometryParameters {
    /// Half of the axial length.
    #[inline]
    #[must_use]
    pub fn half_length(&self) -> Scalar {
        0.5 * self.length
    }

    /// Checks radius ordering `0 < r_a < r_d < r_b < R`, `L > 0` and finiteness.
    pub fn validate(&self) -> Result<(), FieldError> {
        let values = [
            ("inner radius", self.inner_radius),
            ("interface radius", self.interface_radius),
            ("outer radius", self.outer_radius),
            ("length", self.length),
            ("sampling radius", self.sampling_radius),
            ("voltage", self.voltage),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FieldError::geometry(format!("{name} must be finite, got {value}")));
        }
        if self.inner_radius <= 0.0 {
            return Err(FieldError::geometry(format!(
                "inner radius must be positive, got {}",
                self.inner_radius
            )));
        }
        if self.inner_radius >= self.interface_radius {
            return Err(FieldError::geometry(format!(
                "inner radius {} must be smaller than interface radius {}",
                self.inner_radius, self.interface_radius
            )));
        }
        if self.interface_radius >= self.outer_radius {
            return Err(FieldError::geometry(format!(
                "interface radius {} must be smaller than outer radius {}",
                self.interface_radius, self.outer_radius
            )));
        }
        if self.sampling_radius <= self.outer_radius {
            return Err(FieldError::geometry(format!(
                "sampling radius {} must exceed outer radius {}",
                self.sampling_radius, self.outer_radius
            )));
        }
        if self.length <= 0.0 {
            return Err(FieldError::geometry(format!(
                "length must be positive, got {}",
                self.length
            )));
        }
        Ok(())
    }

    /// Returns a copy with a different sampling radius.
    #[must_use]
    pub fn with_sampling_radius(mut self, sampling_radius: Scalar) -> Self {
        self.sampling_radius = sampling_radius;
        self
    }
}

impl Default for GeometryParameters {
    /// Reference capacitor: 13.5/14.8/18 mm radii, 20 cm long, 10 kV, sampled out to 30 mm.
    fn default() -> Self {
        Self {
            inner_radius: 13.5e-3,
            interface_radius: 14.8e-3,
            outer_radius: 18.0e-3,
            length: 0.2,
            sampling_radius: 30.0e-3,
            voltage: 10.0e3,
        }
    }
}
