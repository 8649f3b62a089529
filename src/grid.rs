//! Cylindrical sampling lattice and the point cloud derived from it.

use std::f64::consts::TAU;

use tracing::debug;

use crate::constants::AXIS_EXCLUSION;
use crate::errors::FieldError;
use crate::geometry::GeometryParameters;
use crate::math::{cylindrical_to_cartesian, linspace, planar_radius, R3, Scalar};

/// Cylindrical lattice covering r ∈ [0, R], θ ∈ [0, 2π], z ∈ [-L/2, L/2].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    /// Radial samples in meters.
    pub radii: Vec<Scalar>,
    /// Azimuthal samples in radians.
    pub angles: Vec<Scalar>,
    /// Axial samples in meters.
    pub heights: Vec<Scalar>,
}

impl SampleGrid {
    /// Builds the lattice for `geometry` with roughly `density` meters between samples.
    ///
    /// Counts are `floor(R/density)`, `floor(2πR/density)` and `floor(L/(2·density))`.
    pub fn new(geometry: &GeometryParameters, density: Scalar) -> Result<Self, FieldError> {
        geometry.validate()?;
        if !density.is_finite() || density <= 0.0 {
            return Err(FieldError::geometry(format!(
                "sample density must be finite and positive, got {density}"
            )));
        }

        let extent = geometry.sampling_radius;
        let n_r = axis_count("radial", extent / density)?;
        let n_theta = axis_count("azimuthal", TAU * extent / density)?;
        let n_z = axis_count("axial", geometry.length / (2.0 * density))?;

        let half = geometry.half_length();
        Ok(Self {
            radii: linspace(0.0, extent, n_r),
            angles: linspace(0.0, TAU, n_theta),
            heights: linspace(-half, half, n_z),
        })
    }

    /// Number of lattice nodes before the axis filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.radii.len() * self.angles.len() * self.heights.len()
    }

    /// True if the lattice has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts the lattice to Cartesian points, z varying fastest, dropping points on the axis.
    #[must_use]
    pub fn to_point_cloud(&self) -> PointCloud {
        let mut points = Vec::with_capacity(self.len());
        for &r in &self.radii {
            for &theta in &self.angles {
                for &z in &self.heights {
                    let p = cylindrical_to_cartesian(r, theta, z);
                    if planar_radius(&p) > AXIS_EXCLUSION {
                        points.push(p);
                    }
                }
            }
        }
        PointCloud { points }
    }
}

fn axis_count(axis: &str, ratio: Scalar) -> Result<usize, FieldError> {
    let count = ratio.floor();
    if !count.is_finite() || count < 1.0 {
        return Err(FieldError::geometry(format!(
            "{axis} sample count must be at least 1, got {count} (density too coarse for the extent)"
        )));
    }
    Ok(count as usize)
}

/// Ordered Cartesian sample points, none of them on the z-axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<R3>,
}

impl PointCloud {
    /// Sample points in lattice order.
    #[must_use]
    pub fn points(&self) -> &[R3] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no point survived the axis filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the cloud, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<R3> {
        self.points
    }
}

/// Samples the field domain of `geometry` with minimum spacing `density`.
///
/// Fails with [`FieldError::InvalidGeometry`] before any sampling when the
/// geometry is inconsistent or any axis would receive fewer than one sample,
/// and after sampling when every lattice node lies on the axis.
pub fn build_sample_grid(geometry: &GeometryParameters, density: Scalar) -> Result<PointCloud, FieldError> {
    let grid = SampleGrid::new(geometry, density)?;
    let cloud = grid.to_point_cloud();
    if cloud.is_empty() {
        return Err(FieldError::geometry(format!(
            "density {density} leaves no samples off the axis (a single radial sample at r = 0)"
        )));
    }
    debug!(
        n_r = grid.radii.len(),
        n_theta = grid.angles.len(),
        n_z = grid.heights.len(),
        kept = cloud.len(),
        "built cylindrical sample grid"
    );
    Ok(cloud)
}
