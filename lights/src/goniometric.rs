//! Goniophotometric Light Source

use super::{EMISSION_X_RES, EMISSION_Y_RES};
use lux_core::error::*;
use lux_core::geometry::*;
use lux_core::light::*;
use lux_core::pbrt::*;
use lux_core::scene::*;
use lux_core::spherical_function::*;
use std::sync::Arc;

/// Implements a point light source whose intensity varies with direction
/// according to a goniophotometric diagram, such as an IES profile.
///
/// The light coordinate system is always at position (0, 0, 0) with the
/// profile's polar axis along +z.
pub struct GoniometricLight {
    /// Light source type.
    pub light_type: LightType,

    /// Intensity multiplier.
    pub intensity: Float,

    /// Importance sampler over the angular distribution.
    pub profile: SampleableSphericalFunction,

    /// Multiplier applied by the light sampling strategies.
    pub importance: Float,

    /// Whether the light takes part in direct light sampling.
    pub direct_light_sampling: bool,
}

impl GoniometricLight {
    /// Returns a new `GoniometricLight`.
    ///
    /// * `intensity` - Intensity multiplier.
    /// * `profile`   - Angular distribution of the emitted intensity.
    pub fn new(intensity: Float, profile: ArcSphericalFunction) -> Result<Self> {
        let profile = SampleableSphericalFunction::new(profile, EMISSION_X_RES, EMISSION_Y_RES)?;
        if profile.average() == 0.0 {
            warn!("GoniometricLight: profile emits no light");
        }
        Ok(Self {
            light_type: LightType::DELTA_POSITION_LIGHT,
            intensity,
            profile,
            importance: 1.0,
            direct_light_sampling: true,
        })
    }

    /// Returns a `GoniometricLight` using a photometric profile.
    ///
    /// * `intensity` - Intensity multiplier.
    /// * `data`      - The photometric data.
    /// * `flip_z`    - Mirror the profile so nadir points along +z.
    pub fn from_ies(intensity: Float, data: &PhotometricDataIes, flip_z: bool) -> Result<Self> {
        let profile = IesSphericalFunction::new(data, flip_z)?;
        Self::new(intensity, Arc::new(profile))
    }

    /// Returns a `GoniometricLight` using a photometric profile read from an
    /// IES file.
    ///
    /// * `intensity` - Intensity multiplier.
    /// * `path`      - Path to the IES file.
    /// * `flip_z`    - Mirror the profile so nadir points along +z.
    pub fn from_ies_file(intensity: Float, path: &str, flip_z: bool) -> Result<Self> {
        let data = PhotometricDataIes::read(path)?;
        Self::from_ies(intensity, &data, flip_z)
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

impl Light for GoniometricLight {
    /// Returns the type of light.
    fn get_type(&self) -> LightType {
        self.light_type
    }

    /// Return the total emitted power.
    fn power(&self, _scene: &Scene) -> Float {
        self.intensity * self.profile.average()
    }

    fn importance(&self) -> Float {
        self.importance
    }

    fn is_direct_light_sampling_enabled(&self) -> bool {
        self.direct_light_sampling
    }

    /// Samples an emission direction proportionally to the profile.
    ///
    /// * `u` - The random sample.
    fn sample_direction(&self, u: &Point2f) -> Option<SphericalSample> {
        self.profile.sample(u).map(|s| SphericalSample {
            value: self.intensity * s.value,
            ..s
        })
    }

    fn pdf_direction(&self, w: &Vector3f) -> Float {
        self.profile.pdf(w)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
