//! Triangle Filter

use lux_core::filter::*;
use lux_core::geometry::*;
use lux_core::pbrt::*;

/// Implements the triangle filter in which the weight falls off linearly from
/// the filter center over the square extent of the filter.
pub struct TriangleFilter {
    /// Filter data.
    pub data: FilterData,
}

impl TriangleFilter {
    /// Returns a new instance of `TriangleFilter`.
    ///
    /// * `radius` - Radius of the filter in x and y directions; beyond this
    ///              filter is 0.
    pub fn new(radius: Vector2f) -> Self {
        Self {
            data: FilterData::new(radius),
        }
    }
}

impl Default for TriangleFilter {
    fn default() -> Self {
        Self::new(Vector2f::new(2.0, 2.0))
    }
}

impl Filter for TriangleFilter {
    /// Return the filter parameters.
    fn get_data(&self) -> &FilterData {
        &self.data
    }

    /// Returns value of the filter at a given point.
    ///
    /// * `p` - The position of the sample point relative to the center of the
    ///         filter. The point should be within the filter's extent.
    fn evaluate(&self, p: &Point2f) -> Float {
        max(0.0, self.data.radius.x - abs(p.x)) * max(0.0, self.data.radius.y - abs(p.y))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn weight_falls_off_linearly() {
        let f = TriangleFilter::default();
        assert_eq!(f.evaluate(&Point2f::new(0.0, 0.0)), 4.0);
        assert_eq!(f.evaluate(&Point2f::new(1.0, 0.0)), 2.0);
        assert_eq!(f.evaluate(&Point2f::new(2.0, 1.0)), 0.0);
    }

    #[test]
    fn centre_is_denser_than_the_rim() {
        let fd = FilterDistribution::new(Some(Arc::new(TriangleFilter::default())), 32).unwrap();
        let centre = fd.pdf(&Point2f::new(0.0, 0.0));
        let rim = fd.pdf(&Point2f::new(1.9, 1.9));
        assert!(centre > 10.0 * rim);
    }
}
