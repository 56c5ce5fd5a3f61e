//! Box Filter

use lux_core::filter::*;
use lux_core::geometry::*;
use lux_core::pbrt::*;

/// Implements the box filter which equally weights all samples within a square
/// region of the image.
pub struct BoxFilter {
    /// Filter data.
    pub data: FilterData,
}

impl BoxFilter {
    /// Returns a new instance of `BoxFilter`.
    ///
    /// * `radius` - Radius of the filter in x and y directions; beyond this
    ///              filter is 0.
    pub fn new(radius: Vector2f) -> Self {
        Self {
            data: FilterData::new(radius),
        }
    }
}

impl Default for BoxFilter {
    /// Returns a `BoxFilter` covering a single pixel.
    fn default() -> Self {
        Self::new(Vector2f::new(0.5, 0.5))
    }
}

impl Filter for BoxFilter {
    /// Return the filter parameters.
    fn get_data(&self) -> &FilterData {
        &self.data
    }

    /// Returns value of the filter at a given point.
    fn evaluate(&self, _p: &Point2f) -> Float {
        1.0
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
    fn box_distribution_is_uniform() {
        let fd = FilterDistribution::new(Some(Arc::new(BoxFilter::default())), 8).unwrap();
        assert_eq!(fd.pdf(&Point2f::new(0.1, -0.3)), 1.0);
        assert_eq!(fd.pdf(&Point2f::new(0.6, 0.0)), 0.0);
        let (p, pdf) = fd.sample_continuous(&Point2f::new(0.25, 0.75));
        assert!((p.x + 0.25).abs() < 1e-6 && (p.y - 0.25).abs() < 1e-6);
        assert!((pdf - 1.0).abs() < 1e-5);
    }
}
