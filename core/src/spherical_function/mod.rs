//! Spherical Functions

mod composite;
mod grid;
mod ies;
mod photometric_data_ies;
mod sampleable;

use crate::pbrt::*;
use std::sync::Arc;

// Re-export.
pub use composite::*;
pub use grid::*;
pub use ies::*;
pub use photometric_data_ies::*;
pub use sampleable::*;

/// A scalar function defined over directions on the unit sphere.
pub trait SphericalFunction {
    /// Evaluates the function for a direction given in spherical coordinates.
    ///
    /// * `phi`   - Azimuthal angle in `[0, 2π]`.
    /// * `theta` - Polar angle in `[0, π]` measured from +z.
    fn evaluate(&self, phi: Float, theta: Float) -> Float;
}

/// Atomic reference counted `SphericalFunction`.
pub type ArcSphericalFunction = Arc<dyn SphericalFunction + Send + Sync>;
