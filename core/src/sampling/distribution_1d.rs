//! 1D Distribution.

use crate::error::*;
use crate::pbrt::*;
use crate::rng::ONE_MINUS_EPSILON;

/// Represents a piecewise-constant 1D function’s PDF and CDF and provides
/// methods to perform this sampling efficiently.
///
/// The function is assumed to be regularly sampled over `[0, 1)` with unit
/// width bins, i.e. sample `i` covers `[i/n, (i+1)/n)`.
#[derive(Clone, Debug)]
pub struct Distribution1D {
    /// Piecewise-constant function. Normalized to a density when `func_int > 0`.
    func: Vec<Float>,

    /// CDF for `func`; `count() + 1` entries.
    cdf: Vec<Float>,

    /// Integral of the tabulated function, i.e. its average over `[0, 1)`.
    func_int: Float,

    /// 1 / count.
    inv_count: Float,
}

impl Distribution1D {
    /// Returns a new `Distribution1D` for given piecewise-constant function.
    ///
    /// An all-zero function is accepted; it yields a degenerate distribution
    /// whose samples all carry a zero PDF.
    ///
    /// * `f` - Piecewise-constant 1D function. Must be non-empty and contain
    ///         only finite, non-negative values.
    pub fn new(f: &[Float]) -> Result<Self> {
        let n = f.len();
        if n == 0 {
            return Err(SamplingError::InvalidArgument(
                "Distribution1D needs at least one function value".to_string(),
            ));
        }
        check_non_negative("Distribution1D function", f)?;

        let mut func = f.to_vec();

        // Compute integral of step function at `x_i`.
        let mut cdf: Vec<Float> = Vec::with_capacity(n + 1);
        cdf.push(0.0);
        for i in 1..n + 1 {
            cdf.push(cdf[i - 1] + func[i - 1] / n as Float);
        }

        // Transform step function integral into CDF; keep the all-zero CDF
        // as is when there is nothing to normalize.
        let func_int = cdf[n];
        if func_int > 0.0 {
            for v in cdf.iter_mut().skip(1) {
                *v /= func_int;
            }

            // `pdf()` hands `func` out directly so store it as a density.
            let inv_func_int = 1.0 / func_int;
            for v in func.iter_mut() {
                *v *= inv_func_int;
            }
        } else {
            debug!("Distribution1D: degenerate all-zero function with {n} values");
        }

        Ok(Self {
            func,
            cdf,
            func_int,
            inv_count: 1.0 / n as Float,
        })
    }

    /// Returns the number of sample points for the piecewise-constant function.
    #[inline]
    pub fn count(&self) -> usize {
        self.func.len()
    }

    /// Returns the (normalized when possible) function values.
    pub fn func(&self) -> &[Float] {
        &self.func
    }

    /// Returns the CDF values.
    pub fn cdf(&self) -> &[Float] {
        &self.cdf
    }

    /// Returns the average value of the function over `[0, 1)`.
    #[inline]
    pub fn average(&self) -> Float {
        self.func_int
    }

    /// Returns true if the function integrates to zero. Every sample drawn
    /// from such a distribution has a zero PDF.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.func_int <= 0.0
    }

    /// Returns the bin containing a given point in `[0, 1)`.
    ///
    /// * `x` - The point.
    #[inline]
    pub fn offset(&self, x: Float) -> usize {
        let n = self.count();
        // Negative and NaN positions cast to 0.
        min(n - 1, (x * n as Float).floor() as usize)
    }

    /// Return a sample in [0, 1), its PDF and the offset of the bin it falls
    /// in given a random sample. The PDF integrates to 1 over `[0, 1)` and
    /// always equals `self.pdf(x)` for the returned `x`.
    ///
    /// * `u` - The random sample.
    pub fn sample_continuous(&self, u: Float) -> (Float, Float, usize) {
        if self.is_degenerate() {
            return (0.0, 0.0, 0);
        }

        // Handle samples at or beyond the ends of the CDF.
        let n = self.count();
        if u <= self.cdf[0] {
            return (0.0, self.func[0], 0);
        }
        if u >= self.cdf[n] {
            let x = self.keep_in_bin(ONE_MINUS_EPSILON, n - 1);
            return (x, self.func[n - 1], n - 1);
        }

        // Find surrounding CDF segments and `offset`.
        let offset = find_interval(self.cdf.len(), |index| self.cdf[index] <= u);

        // Compute offset along CDF segment. Zero-width segments are never
        // selected since `cdf[offset] <= u < cdf[offset + 1]`.
        let du = (u - self.cdf[offset]) / (self.cdf[offset + 1] - self.cdf[offset]);
        debug_assert!(!du.is_nan());

        // Return `x` in [0,1) corresponding to sample, PDF and offset.
        let x = self.keep_in_bin((offset as Float + du) * self.inv_count, offset);
        (x, self.func[offset], offset)
    }

    /// Return a sample from the discrete distribution given a random sample.
    /// Returns the bin index, its probability mass and the remapped position
    /// of `u` inside the bin's CDF segment.
    ///
    /// * `u` - The random sample.
    pub fn sample_discrete(&self, u: Float) -> (usize, Float, Float) {
        if self.is_degenerate() {
            return (0, 0.0, 0.0);
        }

        let n = self.count();
        if u <= self.cdf[0] {
            return (0, self.func[0] * self.inv_count, 0.0);
        }
        if u >= self.cdf[n] {
            return (n - 1, self.func[n - 1] * self.inv_count, 1.0);
        }

        // Find surrounding CDF segments and `offset`.
        let offset = find_interval(self.cdf.len(), |index| self.cdf[index] <= u);
        let u_remapped = (u - self.cdf[offset]) / (self.cdf[offset + 1] - self.cdf[offset]);
        debug_assert!((0.0..=1.0).contains(&u_remapped));

        (offset, self.func[offset] * self.inv_count, u_remapped)
    }

    /// Return the PDF (density over `[0, 1)`) at a given point.
    ///
    /// * `x` - The point.
    #[inline]
    pub fn pdf(&self, x: Float) -> Float {
        self.func[self.offset(x)]
    }

    /// Return the probability of sampling a given bin from the discrete
    /// distribution.
    ///
    /// * `index` - Bin index.
    #[inline]
    pub fn pdf_discrete(&self, index: usize) -> Float {
        self.func[index] * self.inv_count
    }

    /// Nudges `x` by whole ULPs until `offset(x) == offset` so that the
    /// density reported for a sample is the one `pdf(x)` looks up.
    ///
    /// * `x`      - The sampled point.
    /// * `offset` - The bin the point was sampled from.
    fn keep_in_bin(&self, x: Float, offset: usize) -> Float {
        let mut x = min(x, ONE_MINUS_EPSILON);
        while self.offset(x) > offset {
            x = next_float_down(x);
        }
        while self.offset(x) < offset {
            x = next_float_up(x);
        }
        x
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
