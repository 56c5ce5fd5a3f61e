//! Lights

#[macro_use]
extern crate log;

mod distant;
mod goniometric;
mod infinite;
mod point;

// Re-export.
pub use distant::*;
pub use goniometric::*;
pub use infinite::*;
pub use point::*;

/// Number of `phi` bins used to importance sample emission profiles.
pub const EMISSION_X_RES: usize = 512;

/// Number of `theta` bins used to importance sample emission profiles.
pub const EMISSION_Y_RES: usize = 256;
