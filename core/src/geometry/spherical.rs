//! Spherical Coordinates

use crate::geometry::*;
use crate::pbrt::*;

/// Returns the direction for the given spherical coordinates with respect to
/// the standard basis, with `theta` measured from the +z axis.
///
/// * `sin_theta` - Sine of the polar angle.
/// * `cos_theta` - Cosine of the polar angle.
/// * `phi`       - Azimuthal angle.
#[inline]
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

/// Returns the polar angle of a unit vector.
///
/// * `v` - The unit vector.
#[inline]
pub fn spherical_theta(v: &Vector3f) -> Float {
    clamp(v.z, -1.0, 1.0).acos()
}

/// Returns the azimuthal angle of a unit vector in `[0, 2π)`.
///
/// * `v` - The unit vector.
#[inline]
pub fn spherical_phi(v: &Vector3f) -> Float {
    let p = v.y.atan2(v.x);
    if p < 0.0 {
        p + TWO_PI
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn spherical_angles_round_trip_direction(theta in 0.01..3.13f32, phi in 0.0..6.28f32) {
            let w = spherical_direction(theta.sin(), theta.cos(), phi);
            prop_assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 1e-5));
            prop_assert!(approx_eq!(f32, spherical_theta(&w), theta, epsilon = 1e-3));
            prop_assert!(approx_eq!(f32, spherical_phi(&w), phi, epsilon = 1e-3));
        }
    }

    #[test]
    fn spherical_phi_is_non_negative() {
        let w = Vector3f::new(0.0, -1.0, 0.0);
        assert!(approx_eq!(f32, spherical_phi(&w), 1.5 * PI, epsilon = 1e-5));
    }
}
