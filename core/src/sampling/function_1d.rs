//! 1D Function.

use crate::error::*;
use crate::pbrt::*;

/// A regularly sampled 1D function over `[0, 1]`. Sample `i` is located at
/// `(i + 0.5) / n`, e.g. 0.1, 0.3, 0.5, 0.7, 0.9 for 5 samples.
#[derive(Clone, Debug)]
pub struct Function1D {
    /// The function values.
    func: Vec<Float>,
}

impl Function1D {
    /// Returns a new `Function1D`.
    ///
    /// * `f` - The function values; must not be empty.
    pub fn new(f: &[Float]) -> Result<Self> {
        if f.is_empty() {
            return Err(SamplingError::InvalidArgument(
                "Function1D needs at least one function value".to_string(),
            ));
        }
        Ok(Self { func: f.to_vec() })
    }

    /// Returns the number of function values.
    pub fn count(&self) -> usize {
        self.func.len()
    }

    /// Returns the function values.
    pub fn func(&self) -> &[Float] {
        &self.func
    }

    /// Evaluates the function at the given position by linearly interpolating
    /// the two closest samples. Positions before the first or after the last
    /// sample return that sample's value.
    ///
    /// * `x` - The position in `[0, 1]`; clamped.
    pub fn eval(&self, x: Float) -> Float {
        let n = self.count();
        let pos = clamp(clamp(x, 0.0, 1.0) * n as Float - 0.5, 0.0, (n - 1) as Float);
        let off1 = pos as usize;
        let off2 = min(n - 1, off1 + 1);
        let d = pos - off1 as Float;
        lerp(d, self.func[off1], self.func[off2])
    }
}
