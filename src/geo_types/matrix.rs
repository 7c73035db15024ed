use geo::map_coords::MapCoords;
use geo_types::{coord, Coord, LineString};
use nalgebra::Matrix3;
use nalgebra::{Affine2, Point2 as NPoint2, RealField};
use num_traits::Float;

/// Helper to create a translation matrix
pub fn translate_matrix<T>(tx: T, ty: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        T::one(),
        T::zero(),
        tx,
        T::zero(),
        T::one(),
        ty,
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

/// Counter-clockwise rotation about the origin, standard orientation.
pub fn rotate_matrix<T>(radians: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        Float::cos(radians),
        -Float::sin(radians),
        T::zero(),
        Float::sin(radians),
        Float::cos(radians),
        T::zero(),
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

/// Applies an affine transform to paths and single coordinates.
pub trait TransformPath {
    fn xform_coord(xy: &Coord<f64>, affine: &Affine2<f64>) -> Coord<f64> {
        let out = affine * NPoint2::new(xy.x, xy.y);
        coord!(x: out.x, y: out.y)
    }

    fn transformed(&self, affine: &Affine2<f64>) -> Self;
}

impl TransformPath for LineString<f64> {
    fn transformed(&self, affine: &Affine2<f64>) -> LineString<f64> {
        self.map_coords(|xy| Self::xform_coord(&xy, affine))
    }
}

impl TransformPath for Coord<f64> {
    fn transformed(&self, affine: &Affine2<f64>) -> Coord<f64> {
        Self::xform_coord(self, affine)
    }
}
