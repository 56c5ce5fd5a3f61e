//! Geometry

mod point2;
mod spherical;
mod vector2;
mod vector3;

// Re-export
pub use point2::*;
pub use spherical::*;
pub use vector2::*;
pub use vector3::*;
