//! Irregular 1D Function.

use crate::error::*;
use crate::pbrt::*;
use itertools::Itertools;

/// Checks that irregular sample locations and values line up.
///
/// * `what` - Name of the caller, used in error messages.
/// * `x`    - Sample locations; must be strictly increasing.
/// * `y`    - Function values.
pub(crate) fn check_samples(what: &str, x: &[Float], y: &[Float]) -> Result<()> {
    if x.is_empty() {
        return Err(SamplingError::InvalidArgument(format!(
            "{what} needs at least one sample"
        )));
    }
    if x.len() != y.len() {
        return Err(SamplingError::InvalidArgument(format!(
            "{what} has {} sample locations but {} values",
            x.len(),
            y.len()
        )));
    }
    if let Some((i, (a, b))) = x
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|(_, (a, b))| !(a < b))
    {
        return Err(SamplingError::InvalidArgument(format!(
            "{what} sample locations must be strictly increasing; x[{}] = {} and x[{}] = {}",
            i,
            a,
            i + 1,
            b
        )));
    }
    Ok(())
}

/// Evaluates an irregularly sampled function by linear interpolation, holding
/// the end values outside the sampled range.
///
/// * `x_func` - Sample locations.
/// * `y_func` - Function values.
/// * `x`      - Position to evaluate.
pub(crate) fn eval_irregular(x_func: &[Float], y_func: &[Float], x: Float) -> Float {
    let (offset, d) = index_of_irregular(x_func, x);
    if d == 0.0 {
        y_func[offset]
    } else {
        lerp(d, y_func[offset], y_func[offset + 1])
    }
}

/// Returns the segment of an irregularly sampled function containing `x` and
/// the fractional position in that segment. Positions outside the sampled
/// range map to the first or last sample with a zero fraction.
///
/// * `x_func` - Sample locations.
/// * `x`      - Position to locate.
pub(crate) fn index_of_irregular(x_func: &[Float], x: Float) -> (usize, Float) {
    let count = x_func.len();
    if x <= x_func[0] {
        return (0, 0.0);
    }
    if x >= x_func[count - 1] {
        return (count - 1, 0.0);
    }

    let offset = find_interval(count, |index| x_func[index] <= x);
    let d = (x - x_func[offset]) / (x_func[offset + 1] - x_func[offset]);
    (offset, d)
}

/// A 1D function sampled at irregularly spaced, increasing locations.
#[derive(Clone, Debug)]
pub struct IrregularFunction1D {
    /// The sample locations.
    x_func: Vec<Float>,

    /// The function values.
    y_func: Vec<Float>,
}

impl IrregularFunction1D {
    /// Returns a new `IrregularFunction1D`.
    ///
    /// * `x` - Sample locations; strictly increasing.
    /// * `y` - Function values at `x`.
    pub fn new(x: &[Float], y: &[Float]) -> Result<Self> {
        check_samples("IrregularFunction1D", x, y)?;
        Ok(Self {
            x_func: x.to_vec(),
            y_func: y.to_vec(),
        })
    }

    /// Returns the number of samples.
    pub fn count(&self) -> usize {
        self.x_func.len()
    }

    /// Evaluates the function at the given position.
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

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn invalid_samples_are_rejected() {
        assert!(IrregularFunction1D::new(&[], &[]).is_err());
        assert!(IrregularFunction1D::new(&[0.0, 1.0], &[1.0]).is_err());
        assert!(IrregularFunction1D::new(&[0.0, 0.0], &[1.0, 2.0]).is_err());
        assert!(IrregularFunction1D::new(&[0.5, 0.1], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn eval_interpolates_and_clamps() {
        let f = IrregularFunction1D::new(&[0.0, 0.1, 1.0], &[0.0, 10.0, 1.0]).unwrap();
        assert_eq!(f.eval(-1.0), 0.0);
        assert!(approx_eq!(f32, f.eval(0.05), 5.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, f.eval(0.1), 10.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, f.eval(0.55), 5.5, epsilon = 1e-5));
        assert_eq!(f.eval(2.0), 1.0);
    }

    #[test]
    fn single_sample_is_constant() {
        let f = IrregularFunction1D::new(&[0.3], &[7.0]).unwrap();
        assert_eq!(f.eval(0.0), 7.0);
        assert_eq!(f.eval(1.0), 7.0);
        assert_eq!(f.index_of(0.9), (0, 0.0));
    }

    #[test]
    fn index_of_returns_segment_and_fraction() {
        let f = IrregularFunction1D::new(&[0.0, 0.5, 2.0], &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(f.index_of(-1.0), (0, 0.0));
        let (i, d) = f.index_of(1.25);
        assert_eq!(i, 1);
        assert!(approx_eq!(f32, d, 0.5, epsilon = 1e-6));
        assert_eq!(f.index_of(3.0), (2, 0.0));
    }
}
