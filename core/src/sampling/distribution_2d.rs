//! 2D Distribution.

use crate::error::*;
use crate::geometry::*;
use crate::pbrt::*;
use crate::sampling::Distribution1D;

/// Represents a piecewise-constant 2D function’s PDF and CDF and provides
/// methods to perform this sampling efficiently.
///
/// The function is stored as `nv` rows of `nu` values. `u` runs along a row
/// and `v` selects the row.
#[derive(Clone, Debug)]
pub struct Distribution2D {
    /// 1D conditional sampling density `p[ũ|ṽ]` for each `nv`.
    p_conditional_v: Vec<Distribution1D>,

    /// Marginal sampling density p[ṽ].
    p_marginal: Distribution1D,
}

impl Distribution2D {
    /// Returns a new `Distribution2D` for given piecewise-constant function.
    ///
    /// * `data` - Row-major function values; `data[u + v * nu]`.
    /// * `nu`   - Number of values per row.
    /// * `nv`   - Number of rows.
    pub fn new(data: &[Float], nu: usize, nv: usize) -> Result<Self> {
        if nu == 0 || nv == 0 {
            return Err(SamplingError::InvalidArgument(format!(
                "Distribution2D resolution {nu}x{nv} is empty"
            )));
        }
        if data.len() != nu * nv {
            return Err(SamplingError::InvalidArgument(format!(
                "Distribution2D expected {nu}x{nv} = {} values, got {}",
                nu * nv,
                data.len()
            )));
        }

        // Compute conditional sampling distribution for ṽ.
        let p_conditional_v = data
            .chunks_exact(nu)
            .map(Distribution1D::new)
            .collect::<Result<Vec<Distribution1D>>>()?;

        // Compute marginal sampling distribution p[ṽ].
        let marginal_func: Vec<Float> = p_conditional_v.iter().map(|pcv| pcv.average()).collect();
        let p_marginal = Distribution1D::new(&marginal_func)?;

        debug!(
            "Distribution2D: {nu}x{nv} values, average {}",
            p_marginal.average()
        );

        Ok(Self {
            p_conditional_v,
            p_marginal,
        })
    }

    /// Returns a new `Distribution2D` from a list of rows which must all have
    /// the same length.
    ///
    /// * `rows` - Function values, one vector per `v`.
    pub fn from_rows(rows: &[Vec<Float>]) -> Result<Self> {
        let nu = rows.first().map_or(0, |row| row.len());
        if let Some(v) = rows.iter().position(|row| row.len() != nu) {
            return Err(SamplingError::InvalidArgument(format!(
                "Distribution2D row {v} has {} values, expected {nu}",
                rows[v].len()
            )));
        }
        Self::new(&rows.concat(), nu, rows.len())
    }

    /// Returns the number of values per row.
    pub fn width(&self) -> usize {
        self.p_conditional_v[0].count()
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.p_marginal.count()
    }

    /// Returns the average value of the function over `[0, 1)^2`.
    pub fn average(&self) -> Float {
        self.p_marginal.average()
    }

    /// Returns the marginal distribution over rows.
    pub fn marginal(&self) -> &Distribution1D {
        &self.p_marginal
    }

    /// Returns the conditional distribution of a row.
    ///
    /// * `v` - Row index.
    pub fn conditional(&self, v: usize) -> &Distribution1D {
        &self.p_conditional_v[v]
    }

    /// Return a sample point in `[0, 1)^2` and its PDF given a random sample.
    /// `u[1]` picks the row from the marginal and `u[0]` the position inside
    /// the row.
    ///
    /// * `u` - The random sample.
    pub fn sample_continuous(&self, u: &Point2f) -> (Point2f, Float) {
        // Draw a sample from the p[ṽ] marginal distribution in order to find
        // the ṽ coordinate.
        let (d1, pdf1, v) = self.p_marginal.sample_continuous(u[1]);

        // Use ṽ to find the precomputed conditional distribution to use for
        // sampling ũ.
        let (d0, pdf0, _) = self.p_conditional_v[v].sample_continuous(u[0]);

        (Point2f::new(d0, d1), pdf0 * pdf1)
    }

    /// Return a sampled cell and its probability given a random sample.
    ///
    /// * `u` - The random sample.
    pub fn sample_discrete(&self, u: &Point2f) -> (Point2u, Float) {
        let (v, pdf1, _) = self.p_marginal.sample_discrete(u[1]);
        let (iu, pdf0, _) = self.p_conditional_v[v].sample_discrete(u[0]);
        (Point2u::new(iu, v), pdf0 * pdf1)
    }

    /// Return the PDF value for a given sample value.
    ///
    /// * `p` - Sample value.
    pub fn pdf(&self, p: &Point2f) -> Float {
        // Compute the product of the conditional and marginal PDFs for
        // sampling it from the distribution.
        let v = self.p_marginal.offset(p[1]);
        self.p_conditional_v[v].pdf(p[0]) * self.p_marginal.pdf(p[1])
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
