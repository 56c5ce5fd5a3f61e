//! Light Distribution.
//!
//! Builds a discrete distribution over the lights of a scene from one
//! importance weight per light. The weight rule is the strategy; the
//! preprocessed `DistributionLightStrategy` answers which light to sample and
//! with what probability.

mod distribution;
mod light_strategy;
mod log_power;
mod power;
mod uniform;

pub use distribution::*;
pub use light_strategy::*;
pub use log_power::*;
pub use power::*;
pub use uniform::*;

use crate::error::*;
use crate::light::*;
use crate::pbrt::*;
use crate::scene::*;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Light sampling strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LightStrategyType {
    /// Sample all eligible light sources uniformly.
    Uniform,

    /// Samples light sources according to their emitted power.
    Power,

    /// Samples light sources according to the logarithm of their emitted
    /// power, so very bright lights do not starve dim ones.
    LogPower,
}

impl LightStrategyType {
    /// Returns the configuration name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "UNIFORM",
            Self::Power => "POWER",
            Self::LogPower => "LOG_POWER",
        }
    }
}

impl FromStr for LightStrategyType {
    type Err = SamplingError;

    /// Returns a `LightStrategyType` given a case-insensitive name.
    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "UNIFORM" => Ok(Self::Uniform),
            "POWER" => Ok(Self::Power),
            "LOG_POWER" => Ok(Self::LogPower),
            _ => Err(SamplingError::UnsupportedConfiguration(format!(
                "unknown light sampling strategy '{name}'"
            ))),
        }
    }
}

impl fmt::Display for LightStrategyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the light distribution is used for. Selects which lights are eligible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LightSamplingTask {
    /// Picking a light to emit a path from; every light is eligible.
    Emit,

    /// Direct light sampling; lights with direct light sampling disabled are
    /// excluded.
    Illuminate,

    /// Only infinite lights are eligible.
    InfiniteOnly,
}

impl LightSamplingTask {
    /// Returns the configuration name of the task.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Emit => "EMIT",
            Self::Illuminate => "ILLUMINATE",
            Self::InfiniteOnly => "INFINITE_ONLY",
        }
    }

    /// Returns whether a light may be sampled for this task.
    ///
    /// * `light` - The light.
    pub fn is_eligible(&self, light: &ArcLight) -> bool {
        match self {
            Self::Emit => true,
            Self::Illuminate => light.is_direct_light_sampling_enabled(),
            Self::InfiniteOnly => light.is_infinite(),
        }
    }
}

impl FromStr for LightSamplingTask {
    type Err = SamplingError;

    /// Returns a `LightSamplingTask` given a case-insensitive name.
    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "EMIT" => Ok(Self::Emit),
            "ILLUMINATE" => Ok(Self::Illuminate),
            "INFINITE_ONLY" => Ok(Self::InfiniteOnly),
            _ => Err(SamplingError::UnsupportedConfiguration(format!(
                "unknown light sampling task '{name}'"
            ))),
        }
    }
}

impl fmt::Display for LightSamplingTask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Interface of the light weighting rules.
pub trait LightSamplingStrategy {
    /// Returns the strategy type.
    fn strategy_type(&self) -> LightStrategyType;

    /// Returns the importance weight of an eligible light.
    ///
    /// * `light` - The light.
    /// * `scene` - The scene.
    fn weight(&self, light: &ArcLight, scene: &Scene) -> Float;

    /// Builds the light distribution for a scene. Lights not eligible for the
    /// task get weight 0.
    ///
    /// * `scene` - The scene.
    /// * `task`  - What the distribution is used for.
    fn preprocess(&self, scene: &Scene, task: LightSamplingTask) -> Result<DistributionLightStrategy> {
        let weights: Vec<Float> = scene
            .lights
            .iter()
            .map(|light| {
                if task.is_eligible(light) {
                    self.weight(light, scene)
                } else {
                    0.0
                }
            })
            .collect();
        DistributionLightStrategy::new(self.strategy_type(), task, &scene.lights, &weights)
    }
}

/// Atomic reference counted `LightSamplingStrategy`.
pub type ArcLightSamplingStrategy = Arc<dyn LightSamplingStrategy + Send + Sync>;

/// Returns a smart pointer to a new `LightSamplingStrategy` implementation.
///
/// * `strategy_type` - The strategy to use for light sampling.
pub fn create_light_strategy(strategy_type: LightStrategyType) -> ArcLightSamplingStrategy {
    match strategy_type {
        LightStrategyType::Uniform => Arc::new(UniformLightStrategy::default()),
        LightStrategyType::Power => Arc::new(PowerLightStrategy::default()),
        LightStrategyType::LogPower => Arc::new(LogPowerLightStrategy::default()),
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
