//! Irregular 1D Distribution.

use crate::error::*;
use crate::pbrt::*;
use crate::sampling::irregular_function_1d::*;

/// Lower bound on the function value used when integrating a segment. Keeps
/// segments whose measured value is zero sampleable.
pub const IRREGULAR_SEGMENT_FLOOR: Float = 1e-3;

/// Samples from a 1D function given at irregularly spaced locations inside a
/// domain `[x0, x1]`.
///
/// Each sample owns the segment between the midpoints to its neighbours (the
/// domain bounds for the first and last sample). The CDF integrates
/// `max(IRREGULAR_SEGMENT_FLOOR, y)` over those segments while the reported
/// PDF uses the unfloored `y`.
#[derive(Clone, Debug)]
pub struct IrregularDistribution1D {
    /// Start of the domain.
    x0: Float,

    /// End of the domain.
    x1: Float,

    /// The sample locations.
    x_func: Vec<Float>,

    /// The function values.
    y_func: Vec<Float>,

    /// Segment boundaries; `count() + 1` entries from `x0` to `x1`.
    x_cdf: Vec<Float>,

    /// Normalized CDF at the segment boundaries.
    y_cdf: Vec<Float>,

    /// Integral of the floored step function.
    func_int: Float,

    /// 1 / func_int.
    inv_func_int: Float,
}

impl IrregularDistribution1D {
    /// Returns a new `IrregularDistribution1D`.
    ///
    /// * `x0` - The start of the domain.
    /// * `x1` - The end of the domain.
    /// * `x`  - The sample locations; strictly increasing inside `[x0, x1]`.
    /// * `y`  - The non-negative function values at `x`.
    pub fn new(x0: Float, x1: Float, x: &[Float], y: &[Float]) -> Result<Self> {
        check_samples("IrregularDistribution1D", x, y)?;
        check_non_negative("IrregularDistribution1D function", y)?;
        let count = x.len();
        if !(x0 < x1 && x0 <= x[0] && x[count - 1] <= x1) {
            return Err(SamplingError::InvalidArgument(format!(
                "IrregularDistribution1D samples [{}, {}] must lie in a non-empty domain [{x0}, {x1}]",
                x[0],
                x[count - 1]
            )));
        }

        // Segment boundaries at the midpoints between samples.
        let mut x_cdf = Vec::with_capacity(count + 1);
        x_cdf.push(x0);
        for i in 1..count {
            x_cdf.push((x[i - 1] + x[i]) * 0.5);
        }
        x_cdf.push(x1);

        // Compute integrals of step function.
        let mut y_cdf = Vec::with_capacity(count + 1);
        y_cdf.push(0.0);
        for i in 1..count + 1 {
            y_cdf.push(y_cdf[i - 1] + max(IRREGULAR_SEGMENT_FLOOR, y[i - 1]) * (x_cdf[i] - x_cdf[i - 1]));
        }

        // Transform step function integral into CDF. The floor and the
        // non-empty domain keep `func_int` positive.
        let func_int = y_cdf[count];
        for v in y_cdf.iter_mut().skip(1) {
            *v /= func_int;
        }

        Ok(Self {
            x0,
            x1,
            x_func: x.to_vec(),
            y_func: y.to_vec(),
            x_cdf,
            y_cdf,
            func_int,
            inv_func_int: 1.0 / func_int,
        })
    }

    /// Returns the number of samples.
    pub fn count(&self) -> usize {
        self.x_func.len()
    }

    /// Returns the domain `(x0, x1)`.
    pub fn domain(&self) -> (Float, Float) {
        (self.x0, self.x1)
    }

    /// Returns the integral of the floored step function over the domain.
    pub fn average(&self) -> Float {
        self.func_int
    }

    /// Returns the normalized CDF at the segment boundaries.
    pub fn cdf(&self) -> &[Float] {
        &self.y_cdf
    }

    /// Samples a position in the domain. Returns the position and the PDF,
    /// computed from the unfloored function value of the sampled segment.
    ///
    /// * `u` - The random sample.
    pub fn sample(&self, u: Float) -> (Float, Float) {
        let count = self.count();

        // Find surrounding cdf segments.
        if u >= self.y_cdf[count] {
            return (self.x_cdf[count], self.y_func[count - 1] * self.inv_func_int);
        }
        if u <= self.y_cdf[0] {
            return (self.x_cdf[0], self.y_func[0] * self.inv_func_int);
        }
        let offset = find_interval(self.y_cdf.len(), |index| self.y_cdf[index] <= u);

        // Return offset along current cdf segment.
        let du = (u - self.y_cdf[offset]) / (self.y_cdf[offset + 1] - self.y_cdf[offset]);
        let x = lerp(du, self.x_cdf[offset], self.x_cdf[offset + 1]);
        (x, self.y_func[offset] * self.inv_func_int)
    }

    /// Returns the PDF at a position, using the same segment rule as
    /// `sample()`.
    ///
    /// * `x` - The position.
    pub fn pdf(&self, x: Float) -> Float {
        let count = self.count();
        let offset = if x <= self.x_cdf[0] {
            0
        } else if x >= self.x_cdf[count] {
            count - 1
        } else {
            find_interval(self.x_cdf.len(), |index| self.x_cdf[index] <= x)
        };
        self.y_func[offset] * self.inv_func_int
    }

    /// Evaluates the (unfloored) function at the given position.
    ///
    /// * `x` - The position.
    pub fn eval(&self, x: Float) -> Float {
        eval_irregular(&self.x_func, &self.y_func, x)
    }

    /// Returns the index of the sample at or before `x` and the fractional
    /// offset towards the next sample.
    ///
    /// * `x` - The position.
    pub fn index_of(&self, x: Float) -> (usize, Float) {
        index_of_irregular(&self.x_func, x)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn invalid_input_is_rejected() {
        assert!(IrregularDistribution1D::new(0.0, 1.0, &[], &[]).is_err());
        assert!(IrregularDistribution1D::new(0.0, 1.0, &[0.2, 0.1], &[1.0, 1.0]).is_err());
        assert!(IrregularDistribution1D::new(0.0, 1.0, &[0.2], &[-1.0]).is_err());
        assert!(IrregularDistribution1D::new(0.5, 1.0, &[0.2], &[1.0]).is_err());
        assert!(IrregularDistribution1D::new(1.0, 1.0, &[1.0], &[1.0]).is_err());
    }

    #[test]
    fn segments_are_split_at_midpoints() {
        let d = IrregularDistribution1D::new(0.0, 1.0, &[0.0, 0.5, 1.0], &[1.0, 2.0, 1.0]).unwrap();
        // Segment widths 0.25, 0.5, 0.25 weighted by 1, 2, 1.
        assert!(approx_eq!(f32, d.average(), 1.5, epsilon = 1e-6));
        let cdf = d.cdf();
        assert!(approx_eq!(f32, cdf[1], 0.25 / 1.5, epsilon = 1e-6));
        assert!(approx_eq!(f32, cdf[2], 1.25 / 1.5, epsilon = 1e-6));
        assert_eq!(cdf[3], 1.0);

        let (x, pdf) = d.sample(0.5);
        assert!(x > 0.25 && x < 0.75);
        assert!(approx_eq!(f32, pdf, 2.0 / 1.5, epsilon = 1e-6));
        assert_eq!(d.pdf(x), pdf);
    }

    #[test]
    fn sample_handles_cdf_end_points() {
        let d = IrregularDistribution1D::new(0.0, 2.0, &[0.5, 1.5], &[1.0, 3.0]).unwrap();
        let (x, pdf) = d.sample(0.0);
        assert_eq!(x, 0.0);
        assert_eq!(pdf, 1.0 * (1.0 / d.average()));
        let (x, pdf) = d.sample(1.0);
        assert_eq!(x, 2.0);
        assert_eq!(pdf, 3.0 * (1.0 / d.average()));
    }

    #[test]
    fn floored_segment_stays_sampleable() {
        let y = [1.0, 1e-4, 1.0];
        let x = [0.1, 0.5, 0.9];
        let d = IrregularDistribution1D::new(0.0, 1.0, &x, &y).unwrap();

        // The middle segment [0.3, 0.7] still owns part of the CDF.
        let cdf = d.cdf();
        assert!(cdf[2] > cdf[1]);
        let u = 0.5 * (cdf[1] + cdf[2]);
        let (xs, pdf) = d.sample(u);
        assert!(xs > 0.3 && xs < 0.7);
        assert!(pdf > 0.0);
        assert_eq!(pdf, 1e-4 * (1.0 / d.average()));

        // Evaluation reports the measured value, not the floor.
        assert_eq!(d.eval(0.5), 1e-4);
    }

    #[test]
    fn zero_valued_segment_is_sampled_with_zero_pdf() {
        let d = IrregularDistribution1D::new(0.0, 1.0, &[0.25, 0.75], &[0.0, 1.0]).unwrap();
        let (x, pdf) = d.sample(0.0001);
        assert!(x < 0.5);
        assert_eq!(pdf, 0.0);
    }

    proptest! {
        #[test]
        fn sample_stays_in_domain_and_matches_pdf(
            y in vec(prop_oneof![Just(0.0f32), 0.0..10.0f32], 1..32),
            u in 0.0..1.0f32,
        ) {
            let n = y.len();
            let x: Vec<Float> = (0..n).map(|i| (i as Float + 0.5) / n as Float).collect();
            let d = IrregularDistribution1D::new(0.0, 1.0, &x, &y).unwrap();
            let (xs, pdf) = d.sample(u);
            prop_assert!((0.0..=1.0).contains(&xs));
            prop_assert!(pdf >= 0.0);
            let cdf = d.cdf();
            for w in cdf.windows(2) {
                prop_assert!(w[0] < w[1]);
            }
            // Floating point may land a sample on a segment boundary, in which
            // case both neighbouring PDFs are acceptable.
            let (i, _) = d.index_of(xs);
            let neighbours: Vec<Float> = [i.saturating_sub(1), i, min(i + 1, n - 1)]
                .iter()
                .map(|&j| y[j] * (1.0 / d.average()))
                .collect();
            prop_assert!(neighbours.contains(&pdf));
        }
    }
}
