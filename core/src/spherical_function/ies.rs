//! IES Spherical Function

use super::{GridSphericalFunction, PhotometricDataIes, PhotometricType, SphericalFunction};
use crate::error::*;
use crate::pbrt::*;
use crate::sampling::IrregularFunction1D;

/// Number of `phi` columns the photometric profile is resampled to.
pub const IES_X_RES: usize = 512;

/// Number of `theta` rows the photometric profile is resampled to.
pub const IES_Y_RES: usize = 256;

/// A photometric profile resampled onto a latitude-longitude grid.
#[derive(Clone, Debug)]
pub struct IesSphericalFunction {
    grid: GridSphericalFunction,
}

impl IesSphericalFunction {
    /// Returns a new `IesSphericalFunction`. Only type C photometry is
    /// supported.
    ///
    /// * `data`   - The photometric data.
    /// * `flip_z` - Mirror the profile so nadir points along +z.
    pub fn new(data: &PhotometricDataIes, flip_z: bool) -> Result<Self> {
        if data.photometric_type != PhotometricType::C {
            return Err(SamplingError::InvalidPhotometricData(format!(
                "unsupported photometric type {}",
                data.photometric_type
            )));
        }

        let mut vert_angles = data.vertical_angles.clone();
        let mut horiz_angles = data.horizontal_angles.clone();
        let mut values = data.candela_values.clone();

        // Add a begin/end vertical angle with 0 emission if necessary.
        if vert_angles[0] < 0.0 {
            for a in vert_angles.iter_mut() {
                *a += 90.0;
            }
        }
        if vert_angles[0] > 0.0 {
            vert_angles.insert(0, max(0.0, vert_angles[0] - 1e-3));
            values.iter_mut().for_each(|row| row.insert(0, 0.0));
            if vert_angles[0] > 0.0 {
                vert_angles.insert(0, 0.0);
                values.iter_mut().for_each(|row| row.insert(0, 0.0));
            }
        }
        let last = vert_angles[vert_angles.len() - 1];
        if last < 180.0 {
            vert_angles.push(min(180.0, last + 1e-3));
            values.iter_mut().for_each(|row| row.push(0.0));
            if vert_angles[vert_angles.len() - 1] < 180.0 {
                vert_angles.push(180.0);
                values.iter_mut().for_each(|row| row.push(0.0));
            }
        }

        // Generate missing horizontal angles.
        if horiz_angles[0] == 90.0 || horiz_angles[0] == -90.0 {
            let offset = horiz_angles[0];
            for a in horiz_angles.iter_mut() {
                *a -= offset;
            }
        }
        if horiz_angles[0] != 0.0 {
            return Err(SamplingError::InvalidPhotometricData(format!(
                "horizontal angles must start at 0, found {}",
                horiz_angles[0]
            )));
        }
        if horiz_angles.len() == 1 {
            horiz_angles.push(90.0);
            values.push(values[0].clone());
        }
        for end in [90.0, 180.0] {
            if horiz_angles[horiz_angles.len() - 1] == end {
                for i in (0..horiz_angles.len() - 1).rev() {
                    horiz_angles.push(2.0 * end - horiz_angles[i]);
                    values.push(values[i].clone());
                }
            }
        }
        let n = horiz_angles.len();
        if horiz_angles[n - 1] != 360.0 {
            let (prev, last) = (horiz_angles[n - 2], horiz_angles[n - 1]);
            if 360.0 - last != last - prev {
                return Err(SamplingError::InvalidPhotometricData(format!(
                    "unsupported horizontal angles ending at {last}"
                )));
            }
            horiz_angles.push(360.0);
            values.push(values[0].clone());
        }

        // Initialize irregular functions.
        let value_scale =
            data.candela_multiplier * data.ballast_factor * data.ballast_lamp_photometric_factor;
        let v_func_x: Vec<Float> = vert_angles
            .iter()
            .map(|&a| clamp(radians(a) * INV_PI, 0.0, 1.0))
            .collect();
        let v_funcs = values
            .iter()
            .map(|row| {
                let y: Vec<Float> = row.iter().map(|&v| v * value_scale).collect();
                IrregularFunction1D::new(&v_func_x, &y)
            })
            .collect::<Result<Vec<IrregularFunction1D>>>()?;

        let u_func_x: Vec<Float> = horiz_angles
            .iter()
            .map(|&a| clamp(radians(a) * INV_TWO_PI, 0.0, 1.0))
            .collect();
        let u_func_y: Vec<Float> = (0..horiz_angles.len()).map(|i| i as Float).collect();
        let u_func = IrregularFunction1D::new(&u_func_x, &u_func_y)?;

        // Resample the irregular functions.
        let n_v_funcs = v_funcs.len();
        let mut img = vec![0.0; IES_X_RES * IES_Y_RES];
        for y in 0..IES_Y_RES {
            let t = (y as Float + 0.5) / IES_Y_RES as Float;
            let tgt_y = if flip_z { IES_Y_RES - 1 - y } else { y };
            for x in 0..IES_X_RES {
                let s = (x as Float + 0.5) / IES_X_RES as Float;
                let u = u_func.eval(s);
                let u1 = min(n_v_funcs - 1, u as usize);
                let u2 = min(n_v_funcs - 1, u1 + 1);
                let du = u - u1 as Float;
                img[x + tgt_y * IES_X_RES] = lerp(du, v_funcs[u1].eval(t), v_funcs[u2].eval(t));
            }
        }

        debug!(
            "IES profile resampled from {} vertical x {} horizontal angles",
            vert_angles.len(),
            horiz_angles.len()
        );

        Ok(Self {
            grid: GridSphericalFunction::new(IES_X_RES, IES_Y_RES, img)?,
        })
    }

    /// Returns the resampled grid.
    pub fn grid(&self) -> &GridSphericalFunction {
        &self.grid
    }
}

impl SphericalFunction for IesSphericalFunction {
    fn evaluate(&self, phi: Float, theta: Float) -> Float {
        self.grid.evaluate(phi, theta)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spherical_function::photometric_data_ies::tests::SINGLE_PLANE;
    use crate::spherical_function::SampleableSphericalFunction;
    use float_cmp::*;
    use std::sync::Arc;

    const TWO_PLANES: &str = "IESNA:LM-63-1995
TILT=NONE
1 -1 2.0 3 2 1 1 0 0 0
1 1 50
0 45 90
0 90
100 50 0
10 5 0
";

    #[test]
    fn single_plane_is_rotationally_symmetric() {
        let data = PhotometricDataIes::parse(SINGLE_PLANE).unwrap();
        let f = IesSphericalFunction::new(&data, false).unwrap();
        assert_eq!(f.grid().width(), IES_X_RES);
        assert_eq!(f.grid().height(), IES_Y_RES);

        for phi in [0.3, 2.0, 4.5] {
            let top = f.evaluate(phi, 0.001);
            assert!(top > 99.0 && top <= 100.0);
            assert!(approx_eq!(f32, f.evaluate(phi, PI / 4.0), 50.0, epsilon = 1.0));
            assert_eq!(f.evaluate(phi, 3.0 * PI / 4.0), 0.0);
        }
    }

    #[test]
    fn flip_z_mirrors_the_profile() {
        let data = PhotometricDataIes::parse(SINGLE_PLANE).unwrap();
        let f = IesSphericalFunction::new(&data, true).unwrap();
        let bottom = f.evaluate(1.0, PI - 0.001);
        assert!(bottom > 99.0 && bottom <= 100.0);
        assert_eq!(f.evaluate(1.0, PI / 4.0), 0.0);
    }

    #[test]
    fn quadrant_planes_are_mirrored_and_scaled() {
        let data = PhotometricDataIes::parse(TWO_PLANES).unwrap();
        let f = IesSphericalFunction::new(&data, false).unwrap();
        // Candela multiplier 2.
        assert!(approx_eq!(f32, f.evaluate(0.001, 0.001), 200.0, epsilon = 3.0));
        assert!(approx_eq!(f32, f.evaluate(PI / 2.0, 0.001), 20.0, epsilon = 3.0));
        assert!(approx_eq!(f32, f.evaluate(PI, 0.001), 200.0, epsilon = 3.0));
        assert!(approx_eq!(f32, f.evaluate(3.0 * PI / 2.0, 0.001), 20.0, epsilon = 3.0));
    }

    #[test]
    fn unsupported_profiles_are_rejected() {
        let mut data = PhotometricDataIes::parse(SINGLE_PLANE).unwrap();
        data.photometric_type = PhotometricType::B;
        assert!(IesSphericalFunction::new(&data, false).is_err());

        let mut data = PhotometricDataIes::parse(SINGLE_PLANE).unwrap();
        data.horizontal_angles = vec![30.0];
        assert!(IesSphericalFunction::new(&data, false).is_err());
    }

    #[test]
    fn profile_is_sampleable() {
        let data = PhotometricDataIes::parse(SINGLE_PLANE).unwrap();
        let f = Arc::new(IesSphericalFunction::new(&data, false).unwrap());
        let s = SampleableSphericalFunction::new(f, 64, 32).unwrap();
        assert!(s.average() > 0.0);
        // Nothing is emitted below the horizon.
        let sample = s.sample(&crate::geometry::Point2f::new(0.5, 0.5)).unwrap();
        assert!(sample.wi.z > 0.0);
    }
}
