//! Log Power Light Strategy.

use super::{LightSamplingStrategy, LightStrategyType};
use crate::light::*;
use crate::pbrt::*;
use crate::scene::*;

/// Samples lights proportionally to `ln(1 + power)` scaled by their
/// importance. Compresses the dynamic range of the light powers so bright
/// lights still get more samples without starving dim ones.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogPowerLightStrategy;

impl LightSamplingStrategy for LogPowerLightStrategy {
    fn strategy_type(&self) -> LightStrategyType {
        LightStrategyType::LogPower
    }

    fn weight(&self, light: &ArcLight, scene: &Scene) -> Float {
        light.power(scene).ln_1p() * light.importance()
    }
}
