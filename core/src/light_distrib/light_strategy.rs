//! Light Strategy Holder.

use super::*;
use arc_swap::ArcSwapOption;

/// Owns a weight rule and the distribution it last produced.
///
/// `preprocess()` builds a new `DistributionLightStrategy` and swaps it in
/// atomically; render threads take `Arc` snapshots with `current()` and keep
/// using them even while a newer distribution is published.
pub struct LightStrategy {
    /// The weight rule.
    strategy: ArcLightSamplingStrategy,

    /// The last preprocessed distribution; empty until `preprocess()` runs.
    current: ArcSwapOption<DistributionLightStrategy>,
}

impl LightStrategy {
    /// Returns a new, not yet preprocessed, `LightStrategy`.
    ///
    /// * `strategy_type` - The strategy to use for light sampling.
    pub fn new(strategy_type: LightStrategyType) -> Self {
        Self {
            strategy: create_light_strategy(strategy_type),
            current: ArcSwapOption::const_empty(),
        }
    }

    /// Returns the weight rule.
    pub fn strategy_type(&self) -> LightStrategyType {
        self.strategy.strategy_type()
    }

    /// Rebuilds the light distribution for a scene and publishes it.
    ///
    /// * `scene` - The scene.
    /// * `task`  - What the distribution is used for.
    pub fn preprocess(&self, scene: &Scene, task: LightSamplingTask) -> Result<()> {
        let distrib = self.strategy.preprocess(scene, task)?;
        debug!(
            "Publishing {} light distribution over {} lights",
            self.strategy_type(),
            distrib.light_count()
        );
        self.current.store(Some(Arc::new(distrib)));
        Ok(())
    }

    /// Returns whether `preprocess()` has run.
    pub fn is_preprocessed(&self) -> bool {
        self.current.load().is_some()
    }

    /// Returns a snapshot of the current distribution.
    pub fn current(&self) -> Option<Arc<DistributionLightStrategy>> {
        self.current.load_full()
    }

    /// Picks a light from the current distribution. Returns `None` before the
    /// first `preprocess()` or when no light can be sampled.
    ///
    /// * `u` - The random sample.
    pub fn sample_lights(&self, u: Float) -> Option<SampledLight> {
        self.current
            .load()
            .as_ref()
            .and_then(|distrib| distrib.sample_lights(u))
    }

    /// Returns the probability of `sample_lights()` picking a light.
    ///
    /// * `light` - The light.
    pub fn sample_light_pdf(&self, light: &ArcLight) -> Float {
        self.current
            .load()
            .as_ref()
            .map_or(0.0, |distrib| distrib.sample_light_pdf(light))
    }
}

impl FromStr for LightStrategy {
    type Err = SamplingError;

    /// Returns a `LightStrategy` given a strategy name.
    fn from_str(name: &str) -> Result<Self> {
        name.parse::<LightStrategyType>().map(Self::new)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light_distrib::tests::TestLight;
    use std::thread;

    #[test]
    fn uninitialized_strategy_samples_nothing() {
        let strategy = LightStrategy::new(LightStrategyType::Power);
        assert!(!strategy.is_preprocessed());
        assert!(strategy.current().is_none());
        assert!(strategy.sample_lights(0.5).is_none());
        assert_eq!(strategy.sample_light_pdf(&TestLight::arc(1.0)), 0.0);
    }

    #[test]
    fn unknown_strategy_name_is_rejected() {
        assert!(matches!(
            "RANDOM".parse::<LightStrategy>(),
            Err(SamplingError::UnsupportedConfiguration(_))
        ));
        let strategy: LightStrategy = "log_power".parse().unwrap();
        assert_eq!(strategy.strategy_type(), LightStrategyType::LogPower);
    }

    #[test]
    fn preprocess_swaps_in_a_new_distribution() {
        let strategy = LightStrategy::new(LightStrategyType::Power);
        let a = TestLight::arc(1.0);
        let b = TestLight::arc(3.0);
        let scene = Scene::new(vec![Arc::clone(&a), Arc::clone(&b)], 1.0);
        strategy.preprocess(&scene, LightSamplingTask::Emit).unwrap();
        assert!(strategy.is_preprocessed());
        let before = strategy.current().unwrap();
        assert_eq!(strategy.sample_light_pdf(&b), 0.75);

        // Removing a light rebuilds the slots; the old snapshot is unchanged.
        let scene = Scene::new(vec![Arc::clone(&b)], 1.0);
        strategy.preprocess(&scene, LightSamplingTask::Emit).unwrap();
        assert_eq!(strategy.sample_light_pdf(&a), 0.0);
        assert_eq!(strategy.sample_light_pdf(&b), 1.0);
        assert_eq!(before.sample_light_pdf(&b), 0.75);

        // Sampling stays consistent with the pdf after re-preprocessing.
        let s = strategy.sample_lights(0.3).unwrap();
        assert_eq!(s.pdf, strategy.sample_light_pdf(&s.light));
    }

    #[test]
    fn snapshots_are_shared_across_threads() {
        let strategy = LightStrategy::new(LightStrategyType::Uniform);
        let scene = Scene::new((0..4).map(|i| TestLight::arc(i as Float)).collect(), 1.0);
        strategy.preprocess(&scene, LightSamplingTask::Emit).unwrap();

        thread::scope(|s| {
            for t in 0..4 {
                let strategy = &strategy;
                s.spawn(move || {
                    let snapshot = strategy.current().unwrap();
                    let u = (t as Float + 0.5) / 4.0;
                    let light = snapshot.sample_lights(u).unwrap();
                    assert_eq!(light.index, t);
                    assert_eq!(light.pdf, 0.25);
                });
            }
        });
    }
}
