//! 2-D Points

use crate::pbrt::*;
use num_traits::Num;
use std::ops::Index;

/// A 2-D point containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D point containing `Float` values.
pub type Point2f = Point2<Float>;

/// 2-D point containing `usize` values; used for discrete grid cells.
pub type Point2u = Point2<usize>;

impl<T: Num> Point2<T> {
    /// Creates a new 2-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Index<usize> for Point2<T> {
    type Output = T;

    /// Index the point by an axis to get the immutable coordinate axis value.
    ///
    /// * `axis` -  A 2-D coordinate axis; 0 for x and 1 for y.
    fn index(&self, axis: usize) -> &Self::Output {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Invalid axis for std::Index on Point2<T>"),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let p = Point2::new(1, 2);
        let _ = p[2];
    }

    proptest! {
        #[test]
        fn index_matches_fields(x in -100.0..100.0f32, y in -100.0..100.0f32) {
            let p = Point2f::new(x, y);
            prop_assert_eq!(p[0], x);
            prop_assert_eq!(p[1], y);
        }
    }
}
