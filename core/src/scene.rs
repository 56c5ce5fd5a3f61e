//! Scene

use crate::light::*;
use crate::pbrt::*;
use std::sync::Arc;

/// The light set the sampling strategies are built over.
#[derive(Clone)]
pub struct Scene {
    /// All light sources in the scene.
    pub lights: Vec<ArcLight>,

    /// Infinite light sources in the scene.
    pub infinite_lights: Vec<ArcLight>,

    /// Radius of the sphere bounding the scene geometry.
    pub world_radius: Float,
}

impl Scene {
    /// Creates a new `Scene`.
    ///
    /// * `lights`       - All light sources in the scene.
    /// * `world_radius` - Radius of the sphere bounding the scene geometry.
    pub fn new(lights: Vec<ArcLight>, world_radius: Float) -> Self {
        let infinite_lights = lights
            .iter()
            .filter(|l| l.is_infinite())
            .map(Arc::clone)
            .collect();
        Self {
            lights,
            infinite_lights,
            world_radius,
        }
    }
}
