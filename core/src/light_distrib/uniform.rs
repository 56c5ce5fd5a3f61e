//! Uniform Light Strategy.

use super::{LightSamplingStrategy, LightStrategyType};
use crate::light::*;
use crate::pbrt::*;
use crate::scene::*;

/// The simplest possible strategy: every eligible light gets the same weight
/// regardless of its power. Works well for very simple scenes, but is quite
/// ineffective for scenes with lights of very different brightness.
#[derive(Copy, Clone, Debug, Default)]
pub struct UniformLightStrategy;

impl LightSamplingStrategy for UniformLightStrategy {
    fn strategy_type(&self) -> LightStrategyType {
        LightStrategyType::Uniform
    }

    fn weight(&self, _light: &ArcLight, _scene: &Scene) -> Float {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light_distrib::tests::TestLight;
    use crate::light_distrib::LightSamplingTask;

    #[test]
    fn every_light_is_equally_likely() {
        let lights = vec![
            TestLight::arc(1.0),
            TestLight::arc(10.0),
            TestLight::arc(1000.0),
            TestLight::arc(0.0),
        ];
        let scene = Scene::new(lights, 1.0);
        let d = UniformLightStrategy
            .preprocess(&scene, LightSamplingTask::Emit)
            .unwrap();
        for light in scene.lights.iter() {
            assert_eq!(d.sample_light_pdf(light), 0.25);
        }
    }

    #[test]
    fn single_light_is_always_picked() {
        let scene = Scene::new(vec![TestLight::arc(5.0)], 1.0);
        let d = UniformLightStrategy
            .preprocess(&scene, LightSamplingTask::Illuminate)
            .unwrap();
        let s = d.sample_lights(0.42).unwrap();
        assert_eq!(s.index, 0);
        assert_eq!(s.pdf, 1.0);
    }
}
