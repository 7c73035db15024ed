//! The curve generators. Each config struct is a complete, typed snapshot of
//! the parameters one pattern needs; calling `generate` on it is a pure
//! function from that snapshot to a [`Path`].
//!
//! [`PatternConfig`] wraps the four configs so a caller can pick a pattern by
//! key, load it from RON, and generate without knowing which one it holds.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::GenError;
use crate::geo_types::Path;

pub mod farris;
pub use farris::{FarrisConfig, FARRIS_PARAMS};
pub mod heart;
pub use heart::{HeartConfig, HEART_PARAMS};
pub mod spiral;
pub use spiral::{SpiralConfig, SPIRAL_PARAMS};
pub mod lindenmayer;
pub use lindenmayer::{LindenmayerConfig, LindenmayerCurve, LINDENMAYER_PARAMS};

/// Step cap for the open-ended loops (spiral, heart).
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Implemented by every pattern config, so a `Box<dyn PatternGenerator>`
/// can stand in for whichever pattern is selected.
pub trait PatternGenerator: Debug + Send + Sync {
    fn key(&self) -> &'static str;
    fn generate_path(&self) -> Result<Path, GenError>;
}

/// Range, granularity and default of one control. This is description for
/// the presentation layer; generators never read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParamRange {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    ) -> Self {
        Self {
            key,
            label,
            min,
            max,
            step,
            default,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum PatternConfig {
    Farris(FarrisConfig),
    Heart(HeartConfig),
    Spiral(SpiralConfig),
    Lindenmayer(LindenmayerConfig),
}

impl PatternConfig {
    pub fn keys() -> &'static [&'static str] {
        &["farris", "heart", "spiral", "lindenmayer"]
    }

    /// Default config for a pattern key.
    pub fn from_key(key: &str) -> Option<PatternConfig> {
        match key {
            "farris" => Some(PatternConfig::Farris(FarrisConfig::default())),
            "heart" => Some(PatternConfig::Heart(HeartConfig::default())),
            "spiral" => Some(PatternConfig::Spiral(SpiralConfig::default())),
            "lindenmayer" => Some(PatternConfig::Lindenmayer(LindenmayerConfig::default())),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PatternConfig::Farris(_) => "Farris Curve",
            PatternConfig::Heart(_) => "Heart",
            PatternConfig::Spiral(_) => "Spiral",
            PatternConfig::Lindenmayer(_) => "Space Filling Curves",
        }
    }

    pub fn params(&self) -> &'static [ParamRange] {
        match self {
            PatternConfig::Farris(_) => FARRIS_PARAMS,
            PatternConfig::Heart(_) => HEART_PARAMS,
            PatternConfig::Spiral(_) => SPIRAL_PARAMS,
            PatternConfig::Lindenmayer(_) => LINDENMAYER_PARAMS,
        }
    }

    pub fn generator(&self) -> &dyn PatternGenerator {
        match self {
            PatternConfig::Farris(cfg) => cfg,
            PatternConfig::Heart(cfg) => cfg,
            PatternConfig::Spiral(cfg) => cfg,
            PatternConfig::Lindenmayer(cfg) => cfg,
        }
    }

    pub fn key(&self) -> &'static str {
        self.generator().key()
    }

    /// Generates the path. For the spiral the traced length is dropped; call
    /// [`SpiralConfig::generate`] directly to keep it.
    pub fn generate(&self) -> Result<Path, GenError> {
        self.generator().generate_path()
    }

    pub fn from_ron(text: &str) -> Result<PatternConfig, GenError> {
        Ok(ron::from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String, GenError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}
