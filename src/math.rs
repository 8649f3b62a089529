//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Generates `n` linearly spaced samples in [start, stop], endpoints included.
///
/// `n == 0` yields an empty vector and `n == 1` yields `[start]`. The last
/// sample is exactly `stop`, so symmetric axes stay symmetric.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            let mut samples: Vec<Scalar> = (0..n - 1).map(|i| start + step * i as Scalar).collect();
            samples.push(stop);
            samples
        }
    }
}

/// Converts cylindrical coordinates `(r, theta, z)` to a Cartesian point.
#[inline]
#[must_use]
pub fn cylindrical_to_cartesian(r: Scalar, theta: Scalar, z: Scalar) -> R3 {
    let (sin, cos) = theta.sin_cos();
    R3::new(r * cos, r * sin, z)
}

/// Distance of `point` from the z-axis.
#[inline]
#[must_use]
pub fn planar_radius(point: &R3) -> Scalar {
    point.x.hypot(point.y)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_single_sample_keeps_start() {
        assert_eq!(linspace(-0.1, 0.1, 1), vec![-0.1]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn linspace_ends_exactly_on_stop() {
        let z = linspace(-0.1, 0.1, 25);
        assert_eq!(z.first(), Some(&-0.1));
        assert_eq!(z.last(), Some(&0.1));
        assert_eq!(linspace(0.0, 2.0 * std::f64::consts::PI, 47)[46], 2.0 * std::f64::consts::PI);
    }

    #[test]
    fn cylindrical_conversion_preserves_radius() {
        let p = cylindrical_to_cartesian(0.02, 1.3, -0.05);
        assert_relative_eq!(planar_radius(&p), 0.02, epsilon = 1.0e-15);
        assert_relative_eq!(p.z, -0.05);
    }
}
