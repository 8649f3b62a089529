//! Run configuration: the field model plus display settings.

use crate::errors::FieldError;
use crate::math::Scalar;
use crate::simulation::DielectricField;

/// Settings for the glyph viewer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// Drawn length of every glyph in meters, independent of |E|.
    pub glyph_length: Scalar,
    /// Opacity of the reference cylinder, in [0, 1]. Zero hides it.
    pub cylinder_opacity: Scalar,
    /// Draw x/y/z axes at the origin.
    pub show_axes: bool,
    /// Viewer window title.
    pub window_title: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            glyph_length: 2.0e-3,
            cylinder_opacity: 0.1,
            show_axes: true,
            window_title: "coax-field: coaxial capacitor field".to_owned(),
        }
    }
}

impl DisplaySettings {
    /// Checks the glyph length and opacity.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.glyph_length.is_finite() || self.glyph_length <= 0.0 {
            return Err(FieldError::geometry(format!(
                "glyph length must be finite and positive, got {}",
                self.glyph_length
            )));
        }
        if !(0.0..=1.0).contains(&self.cylinder_opacity) {
            return Err(FieldError::geometry(format!(
                "cylinder opacity must lie in [0, 1], got {}",
                self.cylinder_opacity
            )));
        }
        Ok(())
    }
}

/// Everything needed for one compute-and-render pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Constants, geometry and sample density.
    pub model: DielectricField,
    /// Viewer settings.
    pub display: DisplaySettings,
}

impl RunConfig {
    /// Validates the model and display settings.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.model.validate()?;
        self.display.validate()
    }

    /// Applies `overrides` on top of this configuration and validates the result.
    ///
    /// Overridden values go through the same checks as values loaded from a file.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, FieldError> {
        let model = &mut self.model;
        let slots = [
            (overrides.voltage, &mut model.geometry.voltage),
            (overrides.length, &mut model.geometry.length),
            (overrides.inner_radius, &mut model.geometry.inner_radius),
            (overrides.interface_radius, &mut model.geometry.interface_radius),
            (overrides.outer_radius, &mut model.geometry.outer_radius),
            (overrides.sampling_radius, &mut model.geometry.sampling_radius),
            (overrides.density, &mut model.density),
            (overrides.gap_permittivity, &mut model.constants.gap_relative_permittivity),
            (overrides.dielectric_permittivity, &mut model.constants.dielectric_relative_permittivity),
            (overrides.glyph_length, &mut self.display.glyph_length),
            (overrides.cylinder_opacity, &mut self.display.cylinder_opacity),
        ];
        for (value, slot) in slots {
            if let Some(v) = value {
                *slot = v;
            }
        }
        if overrides.hide_axes {
            self.display.show_axes = false;
        }

        self.validate()?;
        Ok(self)
    }
}

/// Optional per-field replacements, typically taken from the command line.
///
/// `None` keeps the value already in the [`RunConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Applied voltage V0 (V).
    pub voltage: Option<Scalar>,
    /// Axial length L (m).
    pub length: Option<Scalar>,
    /// Inner conductor radius r_a (m).
    pub inner_radius: Option<Scalar>,
    /// Gap/dielectric interface radius r_d (m).
    pub interface_radius: Option<Scalar>,
    /// Outer conductor radius r_b (m).
    pub outer_radius: Option<Scalar>,
    /// Sampled region radius R (m).
    pub sampling_radius: Option<Scalar>,
    /// Minimum sample spacing (m).
    pub density: Option<Scalar>,
    /// Relative permittivity of the gap medium.
    pub gap_permittivity: Option<Scalar>,
    /// Relative permittivity of the dielectric layer.
    pub dielectric_permittivity: Option<Scalar>,
    /// Drawn glyph length (m).
    pub glyph_length: Option<Scalar>,
    /// Reference cylinder opacity.
    pub cylinder_opacity: Option<Scalar>,
    /// Hide the axes regardless of the configured setting.
    pub hide_axes: bool,
}
