//! Common

use num_traits::Num;
use std::ops::{Add, Mul, Neg};

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// PI (π)
pub const PI: Float = std::f32::consts::PI;

/// 1/PI (1/π)
pub const INV_PI: Float = 1.0 / PI;

/// 2*PI (2π)
pub const TWO_PI: Float = PI * 2.0;

/// 1/2*PI (1/2π)
pub const INV_TWO_PI: Float = 1.0 / TWO_PI;

/// 4*PI (4π)
pub const FOUR_PI: Float = PI * 4.0;

/// 1/4*PI (1/4π)
pub const INV_FOUR_PI: Float = 1.0 / FOUR_PI;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps a value to the closed interval `[low, high]`.
///
/// * `val`  - The value.
/// * `low`  - Lower bound.
/// * `high` - Upper bound.
#[inline(always)]
pub fn clamp<T>(val: T, low: T, high: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Linear interpolation between 2 points.
///
/// * `t`  - Parameter t.
/// * `p0` - Point at t=0.
/// * `p1` - Point at t=1.
#[inline(always)]
pub fn lerp<P>(t: Float, p0: P, p1: P) -> P
where
    Float: Mul<P, Output = P>,
    P: Add<P, Output = P>,
{
    (1.0 - t) * p0 + t * p1
}

/// Converts an angle in degrees to radians.
///
/// * `deg` - The angle in degrees.
#[inline(always)]
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) * deg
}

/// Bump a floating point value up to the next greater representable floating
/// point value.
///
/// * `v` - Floating point value.
pub fn next_float_up(v: Float) -> Float {
    // Handle infinity and negative zero for next_float_up
    if v.is_infinite() && v > 0.0 {
        return v;
    }

    let nv = if v == -0.0 { 0.0 } else { v };

    // Advance v to next higher float
    let mut ui = nv.to_bits();
    if nv >= 0.0 {
        ui += 1;
    } else {
        ui -= 1;
    }

    Float::from_bits(ui)
}

/// Bump a floating point value up to the next lower representable floating
/// point value.
///
/// * `v` - Floating point value.
pub fn next_float_down(v: Float) -> Float {
    // Handle infinity and positive zero for next_float_down
    if v.is_infinite() && v < 0.0 {
        return v;
    }

    // Advance v to next lower float
    let nv = if v == 0.0 { -0.0 } else { v };
    let mut ui = nv.to_bits();
    if nv > 0.0 {
        ui -= 1;
    } else {
        ui += 1;
    }

    Float::from_bits(ui)
}

/// Emulates the behavior of `upper_bound` but uses a function object to get
/// values at various indices instead of requiring access to an actual array.
/// Returns the last index `i` in `[0, size - 2]` for which `pred(i)` holds.
///
/// * `size` - Size of array; must be at least 2.
/// * `pred` - Function that returns a value at a given index.
pub fn find_interval<Predicate>(size: usize, pred: Predicate) -> usize
where
    Predicate: Fn(usize) -> bool,
{
    debug_assert!(size >= 2);
    let (mut first, mut len) = (0, size);

    while len > 0 {
        let half = len >> 1;
        let middle = first + half;

        // Bisect range based on value of `pred` at `middle`.
        if pred(middle) {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }

    clamp(first.saturating_sub(1), 0, size - 2)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn find_interval_behaves_like_upper_bound() {
        let cdf = [0.0, 0.25, 0.25, 0.75, 1.0];
        assert_eq!(find_interval(cdf.len(), |i| cdf[i] <= 0.1), 0);
        assert_eq!(find_interval(cdf.len(), |i| cdf[i] <= 0.25), 2);
        assert_eq!(find_interval(cdf.len(), |i| cdf[i] <= 0.8), 3);
        assert_eq!(find_interval(cdf.len(), |i| cdf[i] <= 1.0), 3);
    }

    #[test]
    fn find_interval_clamps_below_first_entry() {
        let cdf = [0.5, 1.0];
        assert_eq!(find_interval(cdf.len(), |i| cdf[i] <= 0.0), 0);
    }

    #[test]
    fn next_float_up_and_down_step_one_ulp() {
        assert!(next_float_up(1.0) > 1.0);
        assert!(next_float_down(1.0) < 1.0);
        assert_eq!(next_float_down(next_float_up(0.5)), 0.5);
        assert!(next_float_up(-0.0) > 0.0);
    }

    proptest! {
        #[test]
        fn clamp_stays_in_range(v in -100.0..100.0f32) {
            let c = clamp(v, -1.0, 1.0);
            prop_assert!((-1.0..=1.0).contains(&c));
        }

        #[test]
        fn lerp_hits_end_points(a in -100.0..100.0f32, b in -100.0..100.0f32) {
            prop_assert_eq!(lerp(0.0, a, b), a);
            prop_assert_eq!(lerp(1.0, a, b), b);
        }
    }
}
