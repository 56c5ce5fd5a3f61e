//! Composite Spherical Function

use super::{ArcSphericalFunction, SphericalFunction};
use crate::pbrt::*;

/// The product of several spherical functions, e.g. an emission map
/// modulated by a photometric profile.
#[derive(Clone, Default)]
pub struct CompositeSphericalFunction {
    funcs: Vec<ArcSphericalFunction>,
}

impl CompositeSphericalFunction {
    /// Returns a new `CompositeSphericalFunction`.
    ///
    /// * `funcs` - The factors.
    pub fn new(funcs: Vec<ArcSphericalFunction>) -> Self {
        Self { funcs }
    }

    /// Appends a factor.
    ///
    /// * `func` - The function to multiply in.
    pub fn add(&mut self, func: ArcSphericalFunction) {
        self.funcs.push(func);
    }

    /// Returns the number of factors.
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Returns true if there are no factors.
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl SphericalFunction for CompositeSphericalFunction {
    /// Returns the product of all factors; 1 when there are none.
    fn evaluate(&self, phi: Float, theta: Float) -> Float {
        self.funcs.iter().map(|f| f.evaluate(phi, theta)).product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spherical_function::GridSphericalFunction;
    use std::sync::Arc;

    #[test]
    fn evaluates_product_of_factors() {
        let mut c = CompositeSphericalFunction::default();
        assert!(c.is_empty());
        assert_eq!(c.evaluate(1.0, 1.0), 1.0);

        c.add(Arc::new(GridSphericalFunction::constant(2.0).unwrap()));
        c.add(Arc::new(
            GridSphericalFunction::new(1, 2, vec![3.0, 5.0]).unwrap(),
        ));
        assert_eq!(c.len(), 2);
        assert_eq!(c.evaluate(1.0, 0.5), 6.0);
        assert_eq!(c.evaluate(1.0, 2.5), 10.0);
    }
}
