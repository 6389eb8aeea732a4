use nalgebra::Point3;

/// Tests whether a candidate point keeps a minimum separation from every
/// existing point.
///
/// A candidate closer than `radius` (strictly) to any existing point is a
/// clash and the scan stops at the first offender. Returns `true` only when
/// the candidate clears the whole set.
pub fn is_clear(candidate: &Point3<f64>, existing: &[Point3<f64>], radius: f64) -> bool {
    let radius2 = radius * radius;
    existing.iter().all(|p| (candidate - p).norm_squared() >= radius2)
}
