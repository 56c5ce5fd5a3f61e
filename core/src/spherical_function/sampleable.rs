//! Sampleable Spherical Function

use super::ArcSphericalFunction;
use crate::error::*;
use crate::geometry::*;
use crate::pbrt::*;
use crate::sampling::Distribution2D;

/// A direction sampled from a `SampleableSphericalFunction`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphericalSample {
    /// The sampled direction.
    pub wi: Vector3f,

    /// Solid angle density of `wi`.
    pub pdf: Float,

    /// Function value at `wi` divided by `pdf`.
    pub value: Float,
}

/// Importance samples directions proportionally to a spherical function.
///
/// The function is tabulated at `x_res × y_res` texel centres in
/// `(phi / 2π, theta / π)` and weighted by `sin θ` so the resulting
/// `Distribution2D` accounts for the area distortion of the latitude-longitude
/// parameterization.
pub struct SampleableSphericalFunction {
    /// The function being sampled.
    func: ArcSphericalFunction,

    /// Distribution over `(phi / 2π, theta / π)`.
    uv_distrib: Distribution2D,

    /// Integral of the function over the sphere.
    average: Float,
}

impl SampleableSphericalFunction {
    /// Returns a new `SampleableSphericalFunction`.
    ///
    /// * `func`  - The function to sample.
    /// * `x_res` - Number of `phi` bins.
    /// * `y_res` - Number of `theta` bins.
    pub fn new(func: ArcSphericalFunction, x_res: usize, y_res: usize) -> Result<Self> {
        if x_res == 0 || y_res == 0 {
            return Err(SamplingError::InvalidArgument(format!(
                "SampleableSphericalFunction resolution {x_res}x{y_res} is empty"
            )));
        }

        // Compute scalar-valued image.
        let mut img = vec![0.0; x_res * y_res];
        let mut average = 0.0;
        let mut normalize = 0.0;
        for y in 0..y_res {
            let yp = PI * (y as Float + 0.5) / y_res as Float;
            let weight = yp.sin();
            normalize += x_res as Float * weight;
            for x in 0..x_res {
                let xp = TWO_PI * (x as Float + 0.5) / x_res as Float;
                let value = func.evaluate(xp, yp) * weight;
                average += value;
                img[x + y * x_res] = value;
            }
        }
        average *= FOUR_PI / normalize;

        // Initialize sampling PDFs.
        let uv_distrib = Distribution2D::new(&img, x_res, y_res)?;

        debug!("SampleableSphericalFunction: {x_res}x{y_res}, average {average}");

        Ok(Self {
            func,
            uv_distrib,
            average,
        })
    }

    /// Evaluates the underlying function.
    ///
    /// * `phi`   - Azimuthal angle.
    /// * `theta` - Polar angle.
    pub fn evaluate(&self, phi: Float, theta: Float) -> Float {
        self.func.evaluate(phi, theta)
    }

    /// Samples a direction. Returns `None` when the sample carries no
    /// contribution.
    ///
    /// * `u` - The random sample.
    pub fn sample(&self, u: &Point2f) -> Option<SphericalSample> {
        // Find floating-point (u, v) sample coordinates.
        let (uv, map_pdf) = self.uv_distrib.sample_continuous(u);
        if map_pdf == 0.0 {
            return None;
        }

        // Convert sample point to direction on the unit sphere.
        let theta = uv[1] * PI;
        let phi = uv[0] * TWO_PI;
        let (sin_theta, cos_theta) = theta.sin_cos();
        if sin_theta == 0.0 {
            return None;
        }
        let wi = spherical_direction(sin_theta, cos_theta, phi);

        // Compute PDF for sampled direction.
        let pdf = map_pdf / (2.0 * PI * PI * sin_theta);

        Some(SphericalSample {
            wi,
            pdf,
            value: self.evaluate(phi, theta) / pdf,
        })
    }

    /// Returns the solid angle density of sampling a direction.
    ///
    /// * `w` - The direction; must be normalized.
    pub fn pdf(&self, w: &Vector3f) -> Float {
        let theta = spherical_theta(w);
        let phi = spherical_phi(w);
        let sin_theta = theta.sin();
        if sin_theta == 0.0 {
            return 0.0;
        }
        self.uv_distrib
            .pdf(&Point2f::new(phi * INV_TWO_PI, theta * INV_PI))
            / (2.0 * PI * PI * sin_theta)
    }

    /// Returns the integral of the function over the sphere.
    pub fn average(&self) -> Float {
        self.average
    }

    /// Returns the distribution over `(phi / 2π, theta / π)`.
    pub fn distribution(&self) -> &Distribution2D {
        &self.uv_distrib
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RNG;
    use crate::spherical_function::{GridSphericalFunction, SphericalFunction};
    use float_cmp::*;
    use std::sync::Arc;

    struct UpperHemisphere;

    impl SphericalFunction for UpperHemisphere {
        fn evaluate(&self, _phi: Float, theta: Float) -> Float {
            if theta < PI / 2.0 {
                1.0
            } else {
                0.0
            }
        }
    }

    #[test]
    fn constant_function_integrates_to_sphere_area() {
        let f = Arc::new(GridSphericalFunction::constant(1.0).unwrap());
        let s = SampleableSphericalFunction::new(f, 64, 32).unwrap();
        assert!(approx_eq!(f32, s.average(), FOUR_PI, epsilon = 1e-3));

        // Near the equator the density approaches the uniform 1 / 4π.
        let sample = s.sample(&Point2f::new(0.3, 0.5)).unwrap();
        assert!(sample.wi.z.abs() < 0.1);
        assert!(approx_eq!(f32, sample.pdf, INV_FOUR_PI, epsilon = 1e-3));
        assert!(approx_eq!(f32, sample.value, 1.0 / sample.pdf, ulps = 2));
    }

    #[test]
    fn sampled_pdf_matches_pdf_lookup() {
        let f = Arc::new(GridSphericalFunction::new(2, 2, vec![1.0, 4.0, 2.0, 0.5]).unwrap());
        let s = SampleableSphericalFunction::new(f, 16, 8).unwrap();
        let mut rng = RNG::new(7);
        for _ in 0..256 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            if let Some(sample) = s.sample(&u) {
                let pdf = s.pdf(&sample.wi);
                assert!(approx_eq!(f32, pdf, sample.pdf, epsilon = 1e-2 * sample.pdf));
            }
        }
    }

    #[test]
    fn samples_follow_the_function_support() {
        let s = SampleableSphericalFunction::new(Arc::new(UpperHemisphere), 32, 16).unwrap();
        let mut rng = RNG::new(3);
        for _ in 0..256 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let sample = s.sample(&u).unwrap();
            assert!(sample.wi.z > -1e-6);
            assert!(sample.pdf > 0.0);
        }
        assert_eq!(s.pdf(&Vector3f::new(0.0, 0.6, -0.8)), 0.0);
    }

    #[test]
    fn zero_function_yields_no_samples() {
        let f = Arc::new(GridSphericalFunction::constant(0.0).unwrap());
        let s = SampleableSphericalFunction::new(f, 8, 4).unwrap();
        assert_eq!(s.average(), 0.0);
        assert!(s.sample(&Point2f::new(0.5, 0.5)).is_none());
        assert_eq!(s.pdf(&Vector3f::new(1.0, 0.0, 0.0)), 0.0);
        assert!(SampleableSphericalFunction::new(
            Arc::new(GridSphericalFunction::constant(1.0).unwrap()),
            0,
            4
        )
        .is_err());
    }
}
