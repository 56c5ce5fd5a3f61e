//! Mitchell Filter

use lux_core::filter::*;
use lux_core::geometry::*;
use lux_core::pbrt::*;

/// Implements the Mitchell-Netravali filter, a cubic with negative lobes that
/// trades blurring against ringing through its `B` and `C` parameters.
pub struct MitchellFilter {
    /// Filter data.
    pub data: FilterData,

    /// Parameter `B`.
    pub b: Float,

    /// Parameter `C`.
    pub c: Float,
}

impl MitchellFilter {
    /// Returns a new instance of `MitchellFilter`. Ideally the 2 parameters
    /// `B` and `C` should satisfy `B + 2C = 1`.
    ///
    /// * `radius` - Radius of the filter in x and y directions; beyond this
    ///              filter is 0.
    /// * `b`      - Parameter `B`.
    /// * `c`      - Parameter `C`.
    pub fn new(radius: Vector2f, b: Float, c: Float) -> Self {
        Self {
            data: FilterData::new(radius),
            b,
            c,
        }
    }

    /// Calculates the 1D filter function.
    ///
    /// * `x` - Distance from center of filter, in units of the radius.
    fn mitchell_1d(&self, x: Float) -> Float {
        let x = abs(2.0 * x);

        if x > 2.0 {
            0.0
        } else if x > 1.0 {
            ((-self.b - 6.0 * self.c) * x * x * x
                + (6.0 * self.b + 30.0 * self.c) * x * x
                + (-12.0 * self.b - 48.0 * self.c) * x
                + (8.0 * self.b + 24.0 * self.c))
                * (1.0 / 6.0)
        } else {
            ((12.0 - 9.0 * self.b - 6.0 * self.c) * x * x * x
                + (-18.0 + 12.0 * self.b + 6.0 * self.c) * x * x
                + (6.0 - 2.0 * self.b))
                * (1.0 / 6.0)
        }
    }
}

impl Default for MitchellFilter {
    fn default() -> Self {
        Self::new(Vector2f::new(2.0, 2.0), 1.0 / 3.0, 1.0 / 3.0)
    }
}

impl Filter for MitchellFilter {
    /// Return the filter parameters.
    fn get_data(&self) -> &FilterData {
        &self.data
    }

    /// Returns value of the filter at a given point.
    ///
    /// * `p` - The position of the sample point relative to the center of the
    ///         filter. The point should be within the filter's extent.
    fn evaluate(&self, p: &Point2f) -> Float {
        self.mitchell_1d(p.x * self.data.inv_radius.x)
            * self.mitchell_1d(p.y * self.data.inv_radius.y)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use std::sync::Arc;

    #[test]
    fn cubic_is_continuous_and_vanishes_at_the_radius() {
        let f = MitchellFilter::default();
        // Both pieces meet at half the radius.
        let inner = f.mitchell_1d(0.5);
        let outer = f.mitchell_1d(0.5 + 1e-4);
        assert!(approx_eq!(f32, inner, outer, epsilon = 1e-3));
        assert!(approx_eq!(f32, f.mitchell_1d(1.0), 0.0, epsilon = 1e-4));
        assert!(approx_eq!(f32, f.mitchell_1d(0.0), 8.0 / 9.0, epsilon = 1e-5));
    }

    #[test]
    fn negative_lobes_are_not_sampled() {
        let f = MitchellFilter::default();
        // The lobe between half and full radius is negative.
        assert!(f.evaluate(&Point2f::new(1.5, 0.0)) < 0.0);

        let fd = FilterDistribution::new(Some(Arc::new(MitchellFilter::default())), 32).unwrap();
        assert_eq!(fd.pdf(&Point2f::new(1.5, 0.0)), 0.0);
        assert!(fd.pdf(&Point2f::new(0.0, 0.0)) > 0.0);
    }
}
