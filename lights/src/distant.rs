//! Distant Source

use lux_core::geometry::*;
use lux_core::light::*;
use lux_core::pbrt::*;
use lux_core::scene::*;
use lux_core::spherical_function::SphericalSample;
use std::sync::Arc;

/// Implements a directional light source that deposits illumination from the
/// same direction at every point in space.
#[derive(Clone)]
pub struct DistantLight {
    /// Light source type.
    pub light_type: LightType,

    /// The emitted radiance `L`.
    pub emitted_radiance: Float,

    /// Direction the light travels in.
    pub w_light: Vector3f,

    /// Multiplier applied by the light sampling strategies.
    pub importance: Float,

    /// Whether the light takes part in direct light sampling.
    pub direct_light_sampling: bool,
}

impl DistantLight {
    /// Returns a new `DistantLight`.
    ///
    /// * `emitted_radiance` - The emitted radiance.
    /// * `w_light`          - Direction of light; normalized here.
    pub fn new(emitted_radiance: Float, w_light: Vector3f) -> Self {
        Self {
            light_type: LightType::DELTA_DIRECTION_LIGHT,
            emitted_radiance,
            w_light: w_light.normalize(),
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

impl Light for DistantLight {
    /// Returns the type of light.
    fn get_type(&self) -> LightType {
        self.light_type
    }

    /// Return the total emitted power: radiance crossing a disk that covers
    /// the scene.
    ///
    /// * `scene` - The scene.
    fn power(&self, scene: &Scene) -> Float {
        PI * scene.world_radius * scene.world_radius * self.emitted_radiance
    }

    fn importance(&self) -> Float {
        self.importance
    }

    fn is_direct_light_sampling_enabled(&self) -> bool {
        self.direct_light_sampling
    }

    /// Returns the light direction with a unit discrete probability.
    fn sample_direction(&self, _u: &Point2f) -> Option<SphericalSample> {
        Some(SphericalSample {
            wi: self.w_light,
            pdf: 1.0,
            value: self.emitted_radiance,
        })
    }

    /// A delta direction has no density.
    fn pdf_direction(&self, _w: &Vector3f) -> Float {
        0.0
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn power_scales_with_world_radius() {
        let light = DistantLight::new(2.0, Vector3f::new(0.0, 0.0, -3.0));
        let small = Scene::new(vec![], 1.0);
        let large = Scene::new(vec![], 4.0);
        assert!(approx_eq!(f32, light.power(&small), TWO_PI, ulps = 2));
        assert!(approx_eq!(f32, light.power(&large), 32.0 * PI, ulps = 2));
        assert!(light.is_delta_light());
    }

    #[test]
    fn direction_is_a_delta() {
        let light = DistantLight::new(1.0, Vector3f::new(0.0, 0.0, -3.0)).with_importance(0.5);
        let s = light.sample_direction(&Point2f::new(0.1, 0.9)).unwrap();
        assert_eq!(s.wi, Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(light.pdf_direction(&s.wi), 0.0);
        assert_eq!(light.importance(), 0.5);
    }
}
