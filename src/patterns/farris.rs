//! Farris curve: a sum of three circular motions at integer frequency ratios.
//!
//! See <http://www.quantamagazine.org/how-to-create-art-with-mathematics-20151008>
//! and <http://www.sineofthetimes.org/the-art-of-parametric-equations-2/>.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use super::{ParamRange, PatternGenerator};
use crate::errors::{require_finite, GenError};
use crate::geo_types::{rotate_path, Path};
use crate::turtle::degrees;
use geo_types::{coord, LineString};

/// Samples per full turn of theta.
pub const STEPS_PER_REVOLUTION: usize = 1000;

/// Every Farris curve starts about 12.5 degrees off the X axis at theta=0;
/// this brings the first sample back onto it before the user rotation.
pub fn base_rotation_degrees() -> f64 {
    (1.0f64 / 3.0).atan2(1.5).to_degrees()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FarrisConfig {
    /// Usually `min(canvas_width, canvas_height)`, supplied by the caller.
    pub radius: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Percentage of `radius`, 0..=100.
    pub scale: f64,
    /// Degrees, counter-clockwise.
    pub rotation: f64,
}

impl Default for FarrisConfig {
    fn default() -> Self {
        FarrisConfig {
            radius: 100.0,
            a: 1.0,
            b: 6.0,
            c: 14.0,
            scale: 25.0,
            rotation: 0.0,
        }
    }
}

pub const FARRIS_PARAMS: &[ParamRange] = &[
    ParamRange::new("a", "A Coefficient", 0.0, 20.0, 1.0, 1.0),
    ParamRange::new("b", "B Coefficient", 0.0, 20.0, 1.0, 6.0),
    ParamRange::new("c", "C Coefficient", 0.0, 20.0, 1.0, 14.0),
    ParamRange::new("scale", "Scale", 0.0, 100.0, 1.0, 25.0),
    ParamRange::new("rotation", "Rotation", -180.0, 180.0, 1.0, 0.0),
];

impl FarrisConfig {
    fn check(&self) -> Result<(), GenError> {
        require_finite("radius", self.radius)?;
        require_finite("a", self.a)?;
        require_finite("b", self.b)?;
        require_finite("c", self.c)?;
        require_finite("rotation", self.rotation)?;
        if require_finite("scale", self.scale)? < 0.0 {
            return Err(GenError::invalid("scale", "must not be negative"));
        }
        Ok(())
    }

    /// The raw samples, before the base and user rotations.
    pub fn sample(&self) -> Result<Path, GenError> {
        self.check()?;
        let k = (self.scale / 100.0) * self.radius;
        let points = (0..STEPS_PER_REVOLUTION)
            .map(|step| {
                let theta = (step as f64 / STEPS_PER_REVOLUTION as f64) * 2.0 * PI;
                coord! {
                    x: k * ((self.a * theta).cos() + (self.b * theta).cos() / 2.0 + (self.c * theta).sin() / 3.0),
                    y: k * ((self.a * theta).sin() + (self.b * theta).sin() / 2.0 + (self.c * theta).cos() / 3.0),
                }
            })
            .collect();
        Ok(LineString::new(points))
    }

    pub fn generate(&self) -> Result<Path, GenError> {
        let raw = self.sample()?;
        let rotation = self.rotation - base_rotation_degrees();
        let path = rotate_path(&raw, degrees(rotation));
        debug!(points = path.0.len(), a = self.a, b = self.b, c = self.c, "farris curve");
        Ok(path)
    }
}

impl PatternGenerator for FarrisConfig {
    fn key(&self) -> &'static str {
        "farris"
    }

    fn generate_path(&self) -> Result<Path, GenError> {
        self.generate()
    }
}
