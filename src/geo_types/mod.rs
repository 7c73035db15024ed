use geo::bounding_rect::BoundingRect;
use geo_types::{Coord, CoordNum, LineString, Point};
use num_traits::real::Real;

use crate::errors::GenError;

/// Affine helpers built on nalgebra, applied to paths through geo's
/// `MapCoords`.
pub mod matrix;

use matrix::{rotate_matrix, translate_matrix, TransformPath};

/// A single plotting coordinate.
pub type Point2D = Coord<f64>;

/// An ordered run of points; insertion order is drawing order.
pub type Path = LineString<f64>;

/// Trait that implements a distance function between two [`geo_types::Point`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Point`]
/// as if it were a Vector.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;
}

impl<T> PointDistance<T> for Point<T>
where
    T: CoordNum,
    T: Real,
{
    fn distance(&self, other: &Point<T>) -> T {
        let p = *self - *other;
        p.length()
    }

    fn length(&self) -> T {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }
}

/// Total pen travel along a path, summing the straight segments between
/// consecutive points. Plot-time estimates downstream are built on this.
pub trait PathLength {
    fn path_length(&self) -> f64;
}

impl PathLength for Path {
    fn path_length(&self) -> f64 {
        self.points()
            .zip(self.points().skip(1))
            .map(|(a, b)| a.distance(&b))
            .sum()
    }
}

/// Rotate a point about the origin by `theta` radians, counter-clockwise.
pub fn rotate(point: Point2D, theta: f64) -> Point2D {
    point.transformed(&rotate_matrix(theta))
}

/// Rotate every point of a path about the origin, preserving order.
pub fn rotate_path(path: &Path, theta: f64) -> Path {
    path.transformed(&rotate_matrix(theta))
}

/// Returns `(min_x, max_x, min_y, max_y)`.
pub fn bounding_box(path: &Path) -> Result<(f64, f64, f64, f64), GenError> {
    let rect = path.bounding_rect().ok_or(GenError::EmptyPath)?;
    Ok((rect.min().x, rect.max().x, rect.min().y, rect.max().y))
}

/// Translate a path so its bounding box is centered on the origin.
pub fn center(path: &Path) -> Result<Path, GenError> {
    let (min_x, max_x, min_y, max_y) = bounding_box(path)?;
    let dx = -min_x - (max_x - min_x) / 2.0;
    let dy = -min_y - (max_y - min_y) / 2.0;
    Ok(path.transformed(&translate_matrix(dx, dy)))
}
