//! Core
//!
//! Piecewise-constant Monte Carlo sampling and light importance sampling.

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;
#[macro_use]
extern crate pest_derive;

// Re-export.
pub mod error;
pub mod filter;
pub mod geometry;
pub mod light;
pub mod light_distrib;
pub mod pbrt;
pub mod rng;
pub mod sampling;
pub mod scene;
pub mod spherical_function;
