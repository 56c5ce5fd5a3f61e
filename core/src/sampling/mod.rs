//! Sampling

mod distribution_1d;
mod distribution_2d;
mod function_1d;
mod irregular_distribution_1d;
mod irregular_function_1d;
mod sphere;

// Re-export.
pub use distribution_1d::*;
pub use distribution_2d::*;
pub use function_1d::*;
pub use irregular_distribution_1d::*;
pub use irregular_function_1d::IrregularFunction1D;
pub use sphere::*;
