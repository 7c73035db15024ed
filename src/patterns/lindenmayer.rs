//! Space-filling curves from Lindenmayer systems.
//!
//! The grammar is expanded first, then walked with a turtle. The finished
//! path is always centered on the origin and optionally rotated about it.
//!
//! See <https://en.wikipedia.org/wiki/Space-filling_curve> and
//! <https://fedimser.github.io/l-systems.html>.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ParamRange, PatternGenerator};
use crate::errors::{require_finite, GenError};
use crate::geo_types::{center, rotate_path, Path};
use crate::l_system::{CurvePreset, DrawSpec, LSystem, DEFAULT_MAX_PASSES, DEFAULT_MAX_SYMBOLS};
use crate::turtle::{degrees, Turtle, TurtleTrait};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LindenmayerConfig {
    pub curve: CurvePreset,
    pub iterations: u32,
    /// Segment length per `F`.
    pub length: f64,
    /// Degrees about the origin, applied after centering.
    pub rotation: f64,
    pub max_symbols: usize,
    /// Largest accepted `iterations`.
    pub max_passes: u32,
}

impl Default for LindenmayerConfig {
    fn default() -> Self {
        LindenmayerConfig {
            curve: CurvePreset::default(),
            iterations: 3,
            length: 10.0,
            rotation: 0.0,
            max_symbols: DEFAULT_MAX_SYMBOLS,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

/// Numeric controls only; the curve itself is picked from
/// [`CurvePreset::all`] by key.
pub const LINDENMAYER_PARAMS: &[ParamRange] = &[
    ParamRange::new("iterations", "Iterations", 1.0, 7.0, 1.0, 3.0),
    ParamRange::new("length", "Line Length", 1.0, 50.0, 1.0, 10.0),
    ParamRange::new("rotation", "Rotate", 0.0, 360.0, 1.0, 0.0),
];

impl LindenmayerConfig {
    pub fn curve(&self) -> LindenmayerCurve {
        LindenmayerCurve {
            system: self.curve.system(),
            draw: self.curve.draw(self.length),
            iterations: self.iterations,
            rotation: self.rotation,
            max_symbols: self.max_symbols,
            max_passes: self.max_passes,
        }
    }

    pub fn generate(&self) -> Result<Path, GenError> {
        self.curve().generate()
    }
}

impl PatternGenerator for LindenmayerConfig {
    fn key(&self) -> &'static str {
        "lindenmayer"
    }

    fn generate_path(&self) -> Result<Path, GenError> {
        self.generate()
    }
}

/// Any grammar plus the drawing rules for it. The presets go through here,
/// and so can hand-built systems.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LindenmayerCurve {
    pub system: LSystem,
    pub draw: DrawSpec,
    pub iterations: u32,
    pub rotation: f64,
    pub max_symbols: usize,
    pub max_passes: u32,
}

impl LindenmayerCurve {
    pub fn expand(&self) -> Result<String, GenError> {
        self.system
            .expand_bounded(self.iterations, self.max_symbols, self.max_passes)
    }

    /// Walk an already expanded string. The result is not centered.
    pub fn walk(&self, lpath: &str) -> Path {
        Turtle::new()
            .walk_lpath(lpath, self.draw.angle, self.draw.length)
            .into_path()
    }

    pub fn generate(&self) -> Result<Path, GenError> {
        require_finite("length", self.draw.length)?;
        require_finite("angle", self.draw.angle)?;
        require_finite("rotation", self.rotation)?;
        let lpath = self.expand()?;
        let mut path = center(&self.walk(&lpath))?;
        if self.rotation != 0.0 {
            path = center(&rotate_path(&path, degrees(self.rotation)))?;
        }
        debug!(
            symbols = lpath.len(),
            points = path.0.len(),
            iterations = self.iterations,
            "lindenmayer curve"
        );
        Ok(path)
    }
}
