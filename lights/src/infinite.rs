//! Infinite Area Light Source

use super::{EMISSION_X_RES, EMISSION_Y_RES};
use lux_core::error::*;
use lux_core::geometry::*;
use lux_core::light::*;
use lux_core::pbrt::*;
use lux_core::scene::*;
use lux_core::spherical_function::*;
use std::sync::Arc;

/// Implements an infinite area light source surrounding the scene. Radiance
/// arriving from each direction is given by an environment function, usually
/// a latitude-longitude radiance map.
pub struct InfiniteAreaLight {
    /// Light source type.
    pub light_type: LightType,

    /// Radiance multiplier.
    pub scale: Float,

    /// Importance sampler over the environment.
    pub environment: SampleableSphericalFunction,

    /// Multiplier applied by the light sampling strategies.
    pub importance: Float,

    /// Whether the light takes part in direct light sampling.
    pub direct_light_sampling: bool,
}

impl InfiniteAreaLight {
    /// Returns a new `InfiniteAreaLight`.
    ///
    /// * `scale`       - Radiance multiplier.
    /// * `environment` - Radiance per direction.
    pub fn new(scale: Float, environment: ArcSphericalFunction) -> Result<Self> {
        let environment =
            SampleableSphericalFunction::new(environment, EMISSION_X_RES, EMISSION_Y_RES)?;
        if environment.average() == 0.0 {
            warn!("InfiniteAreaLight: environment emits no light");
        }
        Ok(Self {
            light_type: LightType::INFINITE_LIGHT,
            scale,
            environment,
            importance: 1.0,
            direct_light_sampling: true,
        })
    }

    /// Returns an `InfiniteAreaLight` with the same radiance from every
    /// direction.
    ///
    /// * `radiance` - The radiance.
    pub fn constant(radiance: Float) -> Result<Self> {
        Self::new(radiance, Arc::new(GridSphericalFunction::constant(1.0)?))
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

impl Light for InfiniteAreaLight {
    /// Returns the type of light.
    fn get_type(&self) -> LightType {
        self.light_type
    }

    /// Return the total emitted power. The environment is treated as a disk
    /// of the scene's radius facing every direction.
    ///
    /// * `scene` - The scene.
    fn power(&self, scene: &Scene) -> Float {
        PI * scene.world_radius * scene.world_radius * self.scale * self.environment.average()
    }

    fn importance(&self) -> Float {
        self.importance
    }

    fn is_direct_light_sampling_enabled(&self) -> bool {
        self.direct_light_sampling
    }

    /// Samples a direction proportionally to the environment radiance.
    ///
    /// * `u` - The random sample.
    fn sample_direction(&self, u: &Point2f) -> Option<SphericalSample> {
        self.environment.sample(u).map(|s| SphericalSample {
            value: self.scale * s.value,
            ..s
        })
    }

    fn pdf_direction(&self, w: &Vector3f) -> Float {
        self.environment.pdf(w)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    /// Bright upper hemisphere, dim lower one.
    fn sky() -> ArcSphericalFunction {
        Arc::new(GridSphericalFunction::new(1, 2, vec![4.0, 1.0]).unwrap())
    }

    #[test]
    fn constant_environment_power() {
        let light = InfiniteAreaLight::constant(2.0).unwrap();
        assert!(light.is_infinite());
        assert!(!light.is_delta_light());
        let scene = Scene::new(vec![], 3.0);
        // Integral of the unit environment is the sphere's solid angle.
        let expected = PI * 9.0 * 2.0 * FOUR_PI;
        assert!(approx_eq!(f32, light.power(&scene), expected, epsilon = 1e-2 * expected));
    }

    #[test]
    fn samples_favour_the_bright_hemisphere() {
        let light = InfiniteAreaLight::new(1.0, sky()).unwrap();
        let (mut upper, mut lower) = (0, 0);
        for i in 0..64 {
            let u = Point2f::new((i as Float + 0.5) / 64.0, (i as Float * 0.37 + 0.005).fract());
            let s = light.sample_direction(&u).unwrap();
            if s.wi.z > 0.0 {
                upper += 1;
            } else {
                lower += 1;
            }
            let pdf = light.pdf_direction(&s.wi);
            assert!(approx_eq!(f32, pdf, s.pdf, epsilon = 1e-2 * s.pdf));
        }
        assert!(upper > 3 * lower);
    }

    #[test]
    fn scale_multiplies_sample_value() {
        let a = InfiniteAreaLight::new(1.0, sky()).unwrap();
        let b = InfiniteAreaLight::new(3.0, sky()).unwrap();
        let u = Point2f::new(0.4, 0.6);
        let (sa, sb) = (a.sample_direction(&u).unwrap(), b.sample_direction(&u).unwrap());
        assert_eq!(sa.wi, sb.wi);
        assert!(approx_eq!(f32, sb.value, 3.0 * sa.value, ulps = 4));
    }

    #[test]
    fn included_in_scene_infinite_lights() {
        let light = InfiniteAreaLight::constant(1.0)
            .unwrap()
            .with_direct_light_sampling(false)
            .into_arc();
        let scene = Scene::new(vec![Arc::clone(&light)], 1.0);
        assert_eq!(scene.infinite_lights.len(), 1);
        assert!(!light.is_direct_light_sampling_enabled());
    }
}
