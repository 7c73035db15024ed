//! Decorative curve generators for pen-plotter artwork.
//!
//! Every pattern here is a pure function from a small typed config to an
//! ordered run of points (a [`Path`](crate::geo_types::Path)): the Farris and heart
//! parametric curves, an Archimedean-style spiral, and Lindenmayer
//! space-filling curves (Hilbert, Gosper, Sierpinski arrowhead).
//! Drawing, UI and G-code export live elsewhere and only consume the path.
//!
//! ```rust
//! use plotty_curves::prelude::*;
//!
//! let path = LindenmayerConfig {
//!     curve: CurvePreset::Hilbert,
//!     iterations: 3,
//!     ..Default::default()
//! }
//! .generate()
//! .unwrap();
//! assert_eq!(path.0.len(), 63);
//! ```

/// Error type shared by every generator.
pub mod errors;

/// Point/path aliases plus rotation, centering and bounding box helpers.
pub mod geo_types;

/// Turtle graphics used to walk L-system strings.
pub mod turtle;

/// L-system implementation, with bounded expansion and the built-in curves.
pub mod l_system;

/// The pattern configs and their generators.
pub mod patterns;

/// Everything a caller usually needs in one import.
pub mod prelude {
    pub use crate::errors::GenError;
    pub use crate::geo_types::{
        bounding_box, center, rotate, rotate_path, Path, PathLength, Point2D, PointDistance,
    };
    pub use crate::l_system::{CurvePreset, DrawSpec, LSystem};
    pub use crate::patterns::{
        FarrisConfig, HeartConfig, LindenmayerConfig, LindenmayerCurve, ParamRange,
        PatternConfig, PatternGenerator, SpiralConfig,
    };
    pub use crate::turtle::{Turtle, TurtleTrait};
}
