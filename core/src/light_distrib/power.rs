//! Power Light Strategy.

use super::{LightSamplingStrategy, LightStrategyType};
use crate::light::*;
use crate::pbrt::*;
use crate::scene::*;

/// Samples lights proportionally to their emitted power scaled by their
/// importance. Works well when the most powerful lights are also the most
/// important contributors, but a single very bright light (e.g. the sun) can
/// starve all the others.
#[derive(Copy, Clone, Debug, Default)]
pub struct PowerLightStrategy;

impl LightSamplingStrategy for PowerLightStrategy {
    fn strategy_type(&self) -> LightStrategyType {
        LightStrategyType::Power
    }

    fn weight(&self, light: &ArcLight, scene: &Scene) -> Float {
        light.power(scene) * light.importance()
    }
}
