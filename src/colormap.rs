//! Scalar-to-colour mapping for magnitude-coloured glyphs.

use crate::math::Scalar;

/// Viridis sampled at eleven evenly spaced stops (t = 0, 0.1, ..., 1), RGB in [0, 1].
const VIRIDIS: [[f32; 3]; 11] = [
    [0.267_004, 0.004_874, 0.329_415],
    [0.282_623, 0.140_926, 0.457_517],
    [0.253_935, 0.265_254, 0.529_983],
    [0.206_756, 0.371_758, 0.553_117],
    [0.163_625, 0.471_133, 0.558_148],
    [0.127_568, 0.566_949, 0.550_556],
    [0.134_692, 0.658_636, 0.517_649],
    [0.266_941, 0.748_751, 0.440_573],
    [0.477_504, 0.821_444, 0.318_195],
    [0.741_388, 0.873_449, 0.149_561],
    [0.993_248, 0.906_157, 0.143_936],
];

/// Maps `value` from `[lo, hi]` to `[0, 1]`, clamping outside the range.
///
/// A degenerate or non-finite range maps everything to the midpoint.
#[must_use]
pub fn normalize(value: Scalar, lo: Scalar, hi: Scalar) -> Scalar {
    if !lo.is_finite() || !hi.is_finite() || (hi - lo).abs() < Scalar::EPSILON * hi.abs().max(1.0) {
        return 0.5;
    }
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Viridis colour for `t` in [0, 1]; `t` is clamped and NaN maps to the low end.
#[must_use]
pub fn viridis(t: Scalar) -> [f32; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (VIRIDIS.len() - 1) as Scalar;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = (scaled - i as Scalar) as f32;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    [
        a[0] + (b[0] - a[0]) * frac,
        a[1] + (b[1] - a[1]) * frac,
        a[2] + (b[2] - a[2]) * frac,
    ]
}

/// Index of the colour bin holding `t` when [0, 1] is split into `bins` equal bins.
#[must_use]
pub fn bin_index(t: Scalar, bins: usize) -> usize {
    if bins == 0 {
        return 0;
    }
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    ((t * bins as Scalar) as usize).min(bins - 1)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn viridis_endpoints_match_table() {
        assert_eq!(viridis(0.0), VIRIDIS[0]);
        assert_eq!(viridis(-3.0), VIRIDIS[0]);
        assert_eq!(viridis(Scalar::NAN), VIRIDIS[0]);
        let top = viridis(1.0);
        for (c, expected) in top.iter().zip(VIRIDIS[VIRIDIS.len() - 1].iter()) {
            assert_relative_eq!(*c, *expected, epsilon = 1.0e-6);
        }
    }

    #[test]
    fn viridis_interpolates_between_stops() {
        let mid = viridis(0.05);
        for (c, (a, b)) in mid.iter().zip(VIRIDIS[0].iter().zip(VIRIDIS[1].iter())) {
            assert_relative_eq!(*c, 0.5 * (a + b), epsilon = 1.0e-6);
        }
    }

    #[test]
    fn viridis_stops_sit_at_tenths() {
        let cases = [
            (0.5, [0.127_568, 0.566_949, 0.550_556]),
            (0.8, [0.477_504, 0.821_444, 0.318_195]),
            (0.9, [0.741_388, 0.873_449, 0.149_561]),
        ];
        for (t, expected) in cases {
            for (c, e) in viridis(t).iter().zip(expected.iter()) {
                assert_relative_eq!(*c, *e, epsilon = 1.0e-5);
            }
        }
    }

    #[test]
    fn normalize_handles_degenerate_range() {
        assert_eq!(normalize(3.0, 2.0, 2.0), 0.5);
        assert_eq!(normalize(3.0, 2.0, 4.0), 0.5);
        assert_eq!(normalize(10.0, 2.0, 4.0), 1.0);
    }

    #[test]
    fn bin_index_covers_closed_interval() {
        assert_eq!(bin_index(0.0, 64), 0);
        assert_eq!(bin_index(1.0, 64), 63);
        assert_eq!(bin_index(0.5, 64), 32);
    }
}
