#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and numerical tolerances.
pub mod constants;
/// Shared mathematical utilities (vector aliases, sampling helpers).
pub mod math;
/// Capacitor dimensions and the sampled region.
pub mod geometry;
/// Permittivities of the gap and dielectric media.
pub mod materials;
/// Cylindrical sample lattice and point cloud.
pub mod grid;
/// Closed-form field evaluation.
pub mod fields;
/// End-to-end field computation.
pub mod simulation;
/// Run configuration.
pub mod config;
/// Magnitude colour mapping.
pub mod colormap;
/// Error types shared between modules.
pub mod errors;
/// 3D glyph viewer.
#[cfg(feature = "viewer")]
pub mod render;

/// Common exports for downstream crates.
pub mod prelude;
