//! Filter

use crate::error::*;
use crate::geometry::*;
use crate::pbrt::*;
use crate::sampling::Distribution2D;
use std::sync::Arc;

/// Filter interface.
pub trait Filter {
    /// Return the filter parameters.
    fn get_data(&self) -> &FilterData;

    /// Returns value of the filter at a given point.
    ///
    /// * `p` - The position of the sample point relative to the center of the
    ///         filter. The point should be within the filter's extent.
    fn evaluate(&self, p: &Point2f) -> Float;
}

/// Atomic reference counted `Filter`.
pub type ArcFilter = Arc<dyn Filter + Send + Sync>;

/// Data for filters centered at origin (0, 0).
#[derive(Copy, Clone, Debug)]
pub struct FilterData {
    /// Radius of the filter in x and y directions; beyond this filter is 0.
    pub radius: Vector2f,

    /// Reciprocal of filter radii.
    pub inv_radius: Vector2f,
}

impl FilterData {
    /// Returns a new instance of `FilterData`.
    ///
    /// * `radius` - Radius of the filter in x and y directions; beyond this
    ///              filter is 0.
    pub fn new(radius: Vector2f) -> Self {
        Self {
            radius,
            inv_radius: Vector2f::new(1.0 / radius.x, 1.0 / radius.y),
        }
    }
}

/// Tabulates a filter over its footprint so that pixel sample offsets can be
/// drawn proportionally to the filter weight.
pub struct FilterDistribution {
    /// The filter; `None` samples the pixel uniformly.
    filter: Option<ArcFilter>,

    /// Table resolution along each axis.
    size: usize,

    /// Distribution over the footprint mapped to `[0, 1)^2`.
    distrib: Distribution2D,
}

impl FilterDistribution {
    /// Returns a new `FilterDistribution`. Negative filter lobes are clipped
    /// to zero in the table.
    ///
    /// * `filter` - The filter or `None` for a box over the pixel.
    /// * `size`   - Table resolution along each axis.
    pub fn new(filter: Option<ArcFilter>, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SamplingError::InvalidArgument(
                "FilterDistribution table size must be positive".to_string(),
            ));
        }

        let inv_size = 1.0 / size as Float;
        let mut data = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                let value = match filter.as_ref() {
                    Some(f) => {
                        let radius = f.get_data().radius;
                        let p = Point2f::new(
                            2.0 * radius.x * ((x as Float + 0.5) * inv_size - 0.5),
                            2.0 * radius.y * ((y as Float + 0.5) * inv_size - 0.5),
                        );
                        max(0.0, f.evaluate(&p))
                    }
                    None => 1.0,
                };
                data.push(value);
            }
        }

        let distrib = Distribution2D::new(&data, size, size)?;
        if distrib.average() == 0.0 {
            warn!("FilterDistribution: filter is zero over its whole footprint");
        }

        Ok(Self {
            filter,
            size,
            distrib,
        })
    }

    /// Returns the filter.
    pub fn filter(&self) -> Option<&ArcFilter> {
        self.filter.as_ref()
    }

    /// Returns the table resolution along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the tabulated distribution.
    pub fn distribution(&self) -> &Distribution2D {
        &self.distrib
    }

    /// Returns a sample offset from the pixel center and its density. With a
    /// filter the offset lies in `[-radius, radius]`, otherwise in
    /// `[-0.5, 0.5)`. The density is 0 when the filter is zero everywhere.
    ///
    /// * `u` - The random sample.
    pub fn sample_continuous(&self, u: &Point2f) -> (Point2f, Float) {
        match self.filter.as_ref() {
            Some(f) => {
                let radius = f.get_data().radius;
                let (uv, pdf) = self.distrib.sample_continuous(u);
                let p = Point2f::new(
                    (uv[0] - 0.5) * (2.0 * radius.x),
                    (uv[1] - 0.5) * (2.0 * radius.y),
                );
                (p, pdf / (4.0 * radius.x * radius.y))
            }
            None => (Point2f::new(u[0] - 0.5, u[1] - 0.5), 1.0),
        }
    }

    /// Returns the density of sampling an offset from the pixel center.
    ///
    /// * `p` - The offset.
    pub fn pdf(&self, p: &Point2f) -> Float {
        match self.filter.as_ref() {
            Some(f) => {
                let data = f.get_data();
                let uv = Point2f::new(
                    p.x * 0.5 * data.inv_radius.x + 0.5,
                    p.y * 0.5 * data.inv_radius.y + 0.5,
                );
                if !(0.0..=1.0).contains(&uv.x) || !(0.0..=1.0).contains(&uv.y) {
                    return 0.0;
                }
                self.distrib.pdf(&uv) / (4.0 * data.radius.x * data.radius.y)
            }
            None => {
                if (-0.5..=0.5).contains(&p.x) && (-0.5..=0.5).contains(&p.y) {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
