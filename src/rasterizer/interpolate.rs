//! Linear interpolation over an integer independent variable
//!
//! Two separate variants: pixel coordinates truncate to `i32`, attributes
//! (shading intensity) keep full float precision. Do not merge them.

/// One `i32` per integer step from `i0` to `i1` inclusive.
///
/// The slope is added to an `f32` accumulator once per step and each step's
/// value is truncated toward zero, so the last value can land one short of
/// `d1`. `i0 == i1` yields `[d0]`; `i1 < i0` yields nothing.
pub fn interpolate_i32(i0: i32, d0: i32, i1: i32, d1: i32) -> Vec<i32> {
    if i0 == i1 {
        return vec![d0];
    }
    if i1 < i0 {
        return Vec::new();
    }

    let count = (i1 as i64 - i0 as i64 + 1) as usize;
    let slope = (d1 as f32 - d0 as f32) / (i1 as f32 - i0 as f32);
    let mut d = d0 as f32;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(d as i32);
        d += slope;
    }
    values
}

/// One `f32` per integer step from `i0` to `i1` inclusive.
///
/// `i0 == i1` yields `[d0]`; `i1 < i0` yields nothing.
pub fn interpolate_f32(i0: i32, d0: f32, i1: i32, d1: f32) -> Vec<f32> {
    if i0 == i1 {
        return vec![d0];
    }
    if i1 < i0 {
        return Vec::new();
    }
    (i0..=i1).map(|i| interpolate_f32_at(i0, d0, i1, d1, i)).collect()
}

/// The value `interpolate_f32` produces at `i`, without building the sequence
pub(crate) fn interpolate_f32_at(i0: i32, d0: f32, i1: i32, d1: f32, i: i32) -> f32 {
    let span = i1 as i64 - i0 as i64;
    let k = i as i64 - i0 as i64;
    if span == 0 {
        d0
    } else if k == span {
        d1
    } else {
        d0 + (d1 - d0) * (k as f32 / span as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_range_single_value() {
        assert_eq!(interpolate_i32(5, 42, 5, -7), vec![42]);
        assert_eq!(interpolate_f32(-3, 0.25, -3, 9.0), vec![0.25]);
    }

    #[test]
    fn test_length_and_endpoints() {
        for &(i0, d0, i1, d1) in &[(0, 0, 3, 10), (-4, 7, 9, -2), (0, -10, 20, 0), (1, 3, 2, 3)] {
            let v = interpolate_i32(i0, d0, i1, d1);
            assert_eq!(v.len() as i32, i1 - i0 + 1);
            assert_eq!(v[0], d0);
            assert!((*v.last().unwrap() - d1).abs() <= 1);
        }
    }

    #[test]
    fn test_monotonic() {
        let up = interpolate_i32(0, -5, 17, 40);
        assert!(up.windows(2).all(|w| w[0] <= w[1]));
        let down = interpolate_i32(-8, 30, 8, -3);
        assert!(down.windows(2).all(|w| w[0] >= w[1]));
        let fdown = interpolate_f32(0, 1.0, 7, 0.0);
        assert!(fdown.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_integer_truncates_toward_zero() {
        // -10 + 0.5k: -9.5 truncates to -9, 9.5 truncates to 9
        let v = interpolate_i32(0, -10, 40, 10);
        assert_eq!(v[1], -9);
        assert_eq!(v[39], 9);
        assert_eq!(interpolate_i32(0, 0, 3, 1), vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_integer_accumulates_slope() {
        // -59/6 added six times falls just short of -59 and truncates to -58
        assert_eq!(interpolate_i32(0, 0, 6, -59), vec![0, -9, -19, -29, -39, -49, -58]);
    }

    #[test]
    fn test_float_at_matches_sequence() {
        let v = interpolate_f32(-3, 0.2, 9, 0.9);
        for (i, &h) in (-3..=9).zip(&v) {
            assert_eq!(interpolate_f32_at(-3, 0.2, 9, 0.9, i), h);
        }
    }

    #[test]
    fn test_float_keeps_fraction() {
        let v = interpolate_f32(0, 0.0, 4, 1.0);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let i = interpolate_i32(0, 0, 4, 1);
        assert_eq!(i, vec![0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_reversed_range_empty() {
        assert!(interpolate_i32(3, 0, 1, 5).is_empty());
        assert!(interpolate_f32(3, 0.0, 1, 5.0).is_empty());
    }
}
