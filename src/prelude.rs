//! Convenience re-exports for computing and viewing the capacitor field.

pub use crate::config::{ConfigOverrides, DisplaySettings, RunConfig};
pub use crate::constants::*;
pub use crate::errors::FieldError;
pub use crate::fields::{evaluate_field, geometric_factor, CoaxialCapacitor, FieldSample};
pub use crate::geometry::GeometryParameters;
pub use crate::grid::{build_sample_grid, PointCloud, SampleGrid};
pub use crate::materials::PhysicalConstants;
pub use crate::math::{R3, Scalar};
#[cfg(feature = "viewer")]
pub use crate::render::FieldPlot;
pub use crate::simulation::{DielectricField, FieldSolution, DEFAULT_DENSITY};
