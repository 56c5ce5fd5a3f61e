//! Point Light Source

use lux_core::geometry::*;
use lux_core::light::*;
use lux_core::pbrt::*;
use lux_core::sampling::*;
use lux_core::scene::*;
use lux_core::spherical_function::SphericalSample;
use std::sync::Arc;

/// Implements an isotropic point light source that emits the same amount of
/// light in all directions.
#[derive(Clone)]
pub struct PointLight {
    /// Light source type.
    pub light_type: LightType,

    /// Intensity.
    pub intensity: Float,

    /// Multiplier applied by the light sampling strategies.
    pub importance: Float,

    /// Whether the light takes part in direct light sampling.
    pub direct_light_sampling: bool,
}

impl PointLight {
    /// Returns a new `PointLight`.
    ///
    /// * `intensity` - Intensity.
    pub fn new(intensity: Float) -> Self {
        Self {
            light_type: LightType::DELTA_POSITION_LIGHT,
            intensity,
            importance: 1.0,
            direct_light_sampling: true,
        }
    }

    /// Sets the importance multiplier.
    ///
    /// * `importance` - The multiplier.
    pub fn with_importance(mut self, importance: Float) -> Self {
        self.importance = importance;
        self
    }

    /// Enables or disables direct light sampling.
    ///
    /// * `enabled` - The switch.
    pub fn with_direct_light_sampling(mut self, enabled: bool) -> Self {
        self.direct_light_sampling = enabled;
        self
    }

    /// Returns the light wrapped as an `ArcLight`.
    pub fn into_arc(self) -> ArcLight {
        Arc::new(self)
    }
}

impl Light for PointLight {
    /// Returns the type of light.
    fn get_type(&self) -> LightType {
        self.light_type
    }

    /// Return the total emitted power.
    fn power(&self, _scene: &Scene) -> Float {
        FOUR_PI * self.intensity
    }

    fn importance(&self) -> Float {
        self.importance
    }

    fn is_direct_light_sampling_enabled(&self) -> bool {
        self.direct_light_sampling
    }

    /// Samples an emission direction uniformly over the sphere.
    ///
    /// * `u` - The random sample.
    fn sample_direction(&self, u: &Point2f) -> Option<SphericalSample> {
        let wi = uniform_sample_sphere(u);
        let pdf = uniform_sphere_pdf();
        Some(SphericalSample {
            wi,
            pdf,
            value: self.intensity / pdf,
        })
    }

    fn pdf_direction(&self, _w: &Vector3f) -> Float {
        uniform_sphere_pdf()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
