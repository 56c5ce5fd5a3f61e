//! Preprocessed Light Distribution.

use super::{LightSamplingTask, LightStrategyType};
use crate::error::*;
use crate::light::*;
use crate::pbrt::*;
use crate::sampling::Distribution1D;
use std::collections::HashMap;
use std::sync::Arc;

/// A light picked by `DistributionLightStrategy::sample_lights()`.
#[derive(Clone)]
pub struct SampledLight {
    /// The light.
    pub light: ArcLight,

    /// Position of the light in the scene's light list.
    pub index: usize,

    /// Probability of picking the light.
    pub pdf: Float,
}

/// An immutable discrete distribution over the lights of a scene. Built by
/// `LightSamplingStrategy::preprocess()`; rebuilt, never mutated, when the
/// light set changes.
pub struct DistributionLightStrategy {
    /// Weight rule the distribution was built with.
    strategy_type: LightStrategyType,

    /// Task the distribution was built for.
    task: LightSamplingTask,

    /// The lights; slot `i` holds the scene's `i`-th light.
    lights: Vec<ArcLight>,

    /// Maps `light_key()` of each light to its slot.
    light_to_index: HashMap<usize, usize>,

    /// Distribution over slots; `None` for a scene without lights.
    distrib: Option<Distribution1D>,
}

impl DistributionLightStrategy {
    /// Returns a new `DistributionLightStrategy`.
    ///
    /// * `strategy_type` - Weight rule used to compute `weights`.
    /// * `task`          - Task the weights were computed for.
    /// * `lights`        - The scene lights.
    /// * `weights`       - One non-negative weight per light.
    pub fn new(
        strategy_type: LightStrategyType,
        task: LightSamplingTask,
        lights: &[ArcLight],
        weights: &[Float],
    ) -> Result<Self> {
        if lights.len() != weights.len() {
            return Err(SamplingError::InvalidArgument(format!(
                "{} light weights for {} lights",
                weights.len(),
                lights.len()
            )));
        }

        let distrib = if lights.is_empty() {
            None
        } else {
            Some(Distribution1D::new(weights)?)
        };

        let mut light_to_index = HashMap::with_capacity(lights.len());
        for (i, light) in lights.iter().enumerate() {
            if let Some(first) = light_to_index.insert(light_key(light), i) {
                return Err(SamplingError::InvalidArgument(format!(
                    "light {i} is the same light as light {first}"
                )));
            }
        }

        if distrib.as_ref().map_or(true, |d| d.is_degenerate()) {
            warn!("{strategy_type} light strategy for {task}: no light can be sampled");
        } else {
            info!(
                "{strategy_type} light strategy for {task}: {} of {} lights eligible",
                weights.iter().filter(|&&w| w > 0.0).count(),
                lights.len()
            );
        }

        Ok(Self {
            strategy_type,
            task,
            lights: lights.iter().map(Arc::clone).collect(),
            light_to_index,
            distrib,
        })
    }

    /// Returns the weight rule the distribution was built with.
    pub fn strategy_type(&self) -> LightStrategyType {
        self.strategy_type
    }

    /// Returns the task the distribution was built for.
    pub fn task(&self) -> LightSamplingTask {
        self.task
    }

    /// Returns the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Returns the lights in slot order.
    pub fn lights(&self) -> &[ArcLight] {
        &self.lights
    }

    /// Picks a light. Returns `None` when no light can be sampled.
    ///
    /// * `u` - The random sample.
    pub fn sample_lights(&self, u: Float) -> Option<SampledLight> {
        let distrib = self.distrib.as_ref()?;
        let (index, pdf, _) = distrib.sample_discrete(u);
        if pdf == 0.0 {
            return None;
        }
        Some(SampledLight {
            light: Arc::clone(&self.lights[index]),
            index,
            pdf,
        })
    }

    /// Returns the probability of `sample_lights()` picking a light; 0 for a
    /// light this distribution was not built over.
    ///
    /// * `light` - The light.
    pub fn sample_light_pdf(&self, light: &ArcLight) -> Float {
        self.light_to_index
            .get(&light_key(light))
            .map_or(0.0, |&index| self.pdf_discrete(index))
    }

    /// Returns the probability of picking the light in a slot.
    ///
    /// * `index` - The slot.
    pub fn pdf_discrete(&self, index: usize) -> Float {
        match self.distrib.as_ref() {
            Some(d) if index < d.count() => d.pdf_discrete(index),
            _ => 0.0,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light_distrib::tests::TestLight;

    #[test]
    fn empty_scene_samples_nothing() {
        let d = DistributionLightStrategy::new(
            LightStrategyType::Power,
            LightSamplingTask::Emit,
            &[],
            &[],
        )
        .unwrap();
        assert_eq!(d.light_count(), 0);
        assert!(d.sample_lights(0.5).is_none());
        assert_eq!(d.pdf_discrete(0), 0.0);
        assert_eq!(d.sample_light_pdf(&TestLight::arc(1.0)), 0.0);
    }

    #[test]
    fn all_zero_weights_sample_nothing() {
        let lights = vec![TestLight::arc(0.0), TestLight::arc(0.0)];
        let d = DistributionLightStrategy::new(
            LightStrategyType::Power,
            LightSamplingTask::Illuminate,
            &lights,
            &[0.0, 0.0],
        )
        .unwrap();
        assert_eq!(d.task(), LightSamplingTask::Illuminate);
        assert_eq!(d.strategy_type(), LightStrategyType::Power);
        for u in [0.0, 0.3, 0.99] {
            assert!(d.sample_lights(u).is_none());
        }
        assert_eq!(d.sample_light_pdf(&lights[1]), 0.0);
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let lights = vec![TestLight::arc(1.0)];
        assert!(DistributionLightStrategy::new(
            LightStrategyType::Power,
            LightSamplingTask::Emit,
            &lights,
            &[1.0, 2.0],
        )
        .is_err());
        assert!(DistributionLightStrategy::new(
            LightStrategyType::Power,
            LightSamplingTask::Emit,
            &lights,
            &[Float::NAN],
        )
        .is_err());
    }

    #[test]
    fn repeated_light_is_rejected() {
        let light = TestLight::arc(2.0);
        let lights = vec![Arc::clone(&light), TestLight::arc(1.0), light];
        assert!(matches!(
            DistributionLightStrategy::new(
                LightStrategyType::Power,
                LightSamplingTask::Emit,
                &lights,
                &[2.0, 1.0, 2.0],
            ),
            Err(SamplingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn sampled_light_matches_its_pdf() {
        let lights = vec![TestLight::arc(1.0), TestLight::arc(3.0)];
        let d = DistributionLightStrategy::new(
            LightStrategyType::Power,
            LightSamplingTask::Emit,
            &lights,
            &[1.0, 3.0],
        )
        .unwrap();
        let s = d.sample_lights(0.1).unwrap();
        assert_eq!(s.index, 0);
        assert_eq!(light_key(&s.light), light_key(&lights[0]));
        assert_eq!(s.pdf, d.sample_light_pdf(&lights[0]));
        let s = d.sample_lights(0.9).unwrap();
        assert_eq!(s.index, 1);
        assert_eq!(s.pdf, d.sample_light_pdf(&lights[1]));
        assert_eq!(s.pdf, 0.75);
    }
}
