//! Light

mod light_type;

use crate::geometry::*;
use crate::pbrt::*;
use crate::scene::*;
use crate::spherical_function::SphericalSample;
use std::sync::Arc;

// Re-export
pub use light_type::*;

/// Light trait provides the queries the light sampling strategies and the
/// emission samplers need.
pub trait Light {
    /// Returns the type of light.
    fn get_type(&self) -> LightType;

    /// Return the total emitted power.
    ///
    /// * `scene` - The scene; infinite lights scale with its radius.
    fn power(&self, scene: &Scene) -> Float;

    /// Returns the user assigned importance multiplier.
    fn importance(&self) -> Float {
        1.0
    }

    /// Returns whether the light takes part in direct light sampling.
    fn is_direct_light_sampling_enabled(&self) -> bool {
        true
    }

    /// Returns whether the light surrounds the scene.
    fn is_infinite(&self) -> bool {
        self.get_type().matches(LightType::INFINITE_LIGHT)
    }

    /// Returns whether light source is a delta light.
    fn is_delta_light(&self) -> bool {
        self.get_type().is_delta_light()
    }

    /// Samples a direction light leaves the source in. The returned value is
    /// the emitted intensity divided by the solid angle density. Returns `None`
    /// when the sample carries no contribution.
    ///
    /// * `u` - The random sample.
    fn sample_direction(&self, u: &Point2f) -> Option<SphericalSample>;

    /// Returns the solid angle density of `sample_direction()` producing `w`.
    ///
    /// * `w` - The direction; must be normalized.
    fn pdf_direction(&self, w: &Vector3f) -> Float;
}

/// Atomic reference counted `Light`.
pub type ArcLight = Arc<dyn Light + Send + Sync>;

/// Returns a key identifying a light instance, independent of the vtable of
/// the trait object.
///
/// * `light` - The light.
pub fn light_key(light: &ArcLight) -> usize {
    Arc::as_ptr(light) as *const () as usize
}
