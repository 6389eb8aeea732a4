use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoordinateError {
    #[error("Coordinate set is empty")]
    Empty,

    #[error("Coordinate at index {index} is not finite")]
    NonFinite { index: usize },
}

/// A source of particle positions, typically the C-alpha trace of a parsed
/// structure.
///
/// Anything that can hand over an ordered, validated list of 3D points
/// qualifies; slices and vectors of points are accepted directly, and richer
/// structure types implement this to expose their coordinate accessor.
pub trait CoordinateSource {
    /// Returns a validated copy of the coordinates.
    fn coordinates(&self) -> Result<Vec<Point3<f64>>, CoordinateError>;
}

impl CoordinateSource for [Point3<f64>] {
    fn coordinates(&self) -> Result<Vec<Point3<f64>>, CoordinateError> {
        check_coordinates(self)?;
        Ok(self.to_vec())
    }
}

impl CoordinateSource for Vec<Point3<f64>> {
    fn coordinates(&self) -> Result<Vec<Point3<f64>>, CoordinateError> {
        self.as_slice().coordinates()
    }
}

/// Validates that a coordinate set is non-empty and fully finite.
pub fn check_coordinates(coords: &[Point3<f64>]) -> Result<(), CoordinateError> {
    if coords.is_empty() {
        return Err(CoordinateError::Empty);
    }
    for (index, p) in coords.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            return Err(CoordinateError::NonFinite { index });
        }
    }
    Ok(())
}
