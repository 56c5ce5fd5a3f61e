//! Latitude-Longitude Grid

use super::SphericalFunction;
use crate::error::*;
use crate::pbrt::*;

/// A spherical function tabulated on a latitude-longitude grid. Columns span
/// `phi` in `[0, 2π]` and rows span `theta` in `[0, π]`; lookups return the
/// nearest texel.
#[derive(Clone, Debug)]
pub struct GridSphericalFunction {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// Row-major values.
    values: Vec<Float>,
}

impl GridSphericalFunction {
    /// Returns a new `GridSphericalFunction`.
    ///
    /// * `width`  - Number of columns.
    /// * `height` - Number of rows.
    /// * `values` - Row-major values; `values[x + y * width]`.
    pub fn new(width: usize, height: usize, values: Vec<Float>) -> Result<Self> {
        if width == 0 || height == 0 || values.len() != width * height {
            return Err(SamplingError::InvalidArgument(format!(
                "GridSphericalFunction {width}x{height} needs {} values, got {}",
                width * height,
                values.len()
            )));
        }
        check_non_negative("GridSphericalFunction", &values)?;
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Returns a grid with the same value everywhere.
    ///
    /// * `value` - The constant value.
    pub fn constant(value: Float) -> Result<Self> {
        Self::new(1, 1, vec![value])
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the texel at the given column and row.
    ///
    /// * `x` - Column.
    /// * `y` - Row.
    pub fn texel(&self, x: usize, y: usize) -> Float {
        self.values[x + y * self.width]
    }
}

impl SphericalFunction for GridSphericalFunction {
    fn evaluate(&self, phi: Float, theta: Float) -> Float {
        let s = clamp(phi * INV_TWO_PI, 0.0, 1.0);
        let t = clamp(theta * INV_PI, 0.0, 1.0);
        let x = min(self.width - 1, (s * self.width as Float) as usize);
        let y = min(self.height - 1, (t * self.height as Float) as usize);
        self.texel(x, y)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_uses_nearest_texel() {
        let grid = GridSphericalFunction::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(grid.evaluate(0.1, 0.1), 1.0);
        assert_eq!(grid.evaluate(PI + 0.1, 0.1), 2.0);
        assert_eq!(grid.evaluate(0.1, PI - 0.1), 3.0);
        assert_eq!(grid.evaluate(TWO_PI, PI), 4.0);
    }

    #[test]
    fn invalid_grids_are_rejected() {
        assert!(GridSphericalFunction::new(0, 2, vec![]).is_err());
        assert!(GridSphericalFunction::new(2, 2, vec![1.0; 3]).is_err());
        assert!(GridSphericalFunction::new(1, 1, vec![-1.0]).is_err());
    }
}
