use geo_types::{coord, Coord, LineString};

use crate::geo_types::Path;

/// # Turtle Module
///
/// Logo-style turtle used to walk an expanded L-system string. Only forward
/// moves leave a mark: each one records the turtle's new position, so a
/// string with n `F` symbols yields exactly n points.
#[derive(Clone, Debug)]
pub struct Turtle {
    points: Vec<Coord<f64>>,
    position: Coord<f64>,
    heading: f64,
}

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    std::f64::consts::PI * (deg / 180.0)
}

/// TurtleTrait provides turtle related functions for the Turtle struct.
///
/// Headings are tracked in degrees, with 0 along +X and positive angles
/// turning counter-clockwise.
///
/// # Example
///
/// ```
/// use plotty_curves::turtle::{Turtle, TurtleTrait};
/// let path = Turtle::new()
///     .fwd(100.0)
///     .left(90.0)
///     .fwd(100.0)
///     .into_path();
/// assert_eq!(path.0.len(), 2);
/// ```
pub trait TurtleTrait {
    fn new() -> Turtle;
    fn fwd(self, distance: f64) -> Self;
    fn left(self, angle: f64) -> Self;
    fn right(self, angle: f64) -> Self;
    fn walk_lpath(self, lpath: &str, angle: f64, distance: f64) -> Self;
    fn into_path(self) -> Path;
}

impl TurtleTrait for Turtle {
    fn new() -> Self {
        Turtle {
            points: vec![],
            position: coord! {x: 0.0, y: 0.0},
            heading: 0.0,
        }
    }

    fn fwd(mut self, distance: f64) -> Self {
        let radians = degrees(self.heading);
        let pos = coord! {
            x: self.position.x + distance * radians.cos(),
            y: self.position.y + distance * radians.sin(),
        };
        self.points.push(pos);
        self.position = pos;
        self
    }

    fn left(mut self, angle: f64) -> Self {
        self.heading += angle;
        self
    }

    fn right(mut self, angle: f64) -> Self {
        self.heading -= angle;
        self
    }

    /// `F` draws, `+` turns left, `-` turns right; anything else is a
    /// grammar-only symbol and is skipped.
    fn walk_lpath(mut self, lpath: &str, angle: f64, distance: f64) -> Self {
        for c in lpath.chars() {
            self = match c {
                'F' => self.fwd(distance),
                '+' => self.left(angle),
                '-' => self.right(angle),
                _ => self,
            }
        }
        self
    }

    fn into_path(self) -> Path {
        LineString::new(self.points)
    }
}
