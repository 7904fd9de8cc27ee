use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Coordinate shape mismatch: target has {target} atoms, candidate has {candidate}")]
    ShapeMismatch { target: usize, candidate: usize },
    #[error("Cannot compute RMSD of empty coordinate sets")]
    EmptyCoordinates,
    #[error("RMSD evaluated to a non-finite value ({0})")]
    NonFinite(f64),
}

/// Root-mean-square deviation between two index-aligned coordinate sets.
///
/// The squared differences of every x, y and z component are pooled and
/// divided by the atom count `K` (not `3K`) before taking the square root,
/// i.e. this is the mean squared per-atom displacement.
///
/// # Errors
///
/// Fails with [`GeometryError::ShapeMismatch`] if the lengths differ,
/// [`GeometryError::EmptyCoordinates`] if both are empty, and
/// [`GeometryError::NonFinite`] if the result is NaN or infinite.
pub fn calculate_rmsd(target: &[Point3<f64>], candidate: &[Point3<f64>]) -> Result<f64, GeometryError> {
    translated_rmsd(target, candidate, &Vector3::zeros())
}

/// RMSD between `target` and `mobile` shifted by `shift`, without allocating
/// the shifted coordinates.
pub fn translated_rmsd(
    target: &[Point3<f64>],
    mobile: &[Point3<f64>],
    shift: &Vector3<f64>,
) -> Result<f64, GeometryError> {
    if target.len() != mobile.len() {
        return Err(GeometryError::ShapeMismatch {
            target: target.len(),
            candidate: mobile.len(),
        });
    }
    if target.is_empty() {
        return Err(GeometryError::EmptyCoordinates);
    }

    let squared_sum: f64 = target
        .iter()
        .zip(mobile)
        .map(|(t, m)| (t - (m + shift)).norm_squared())
        .sum();
    let rmsd = (squared_sum / target.len() as f64).sqrt();

    if rmsd.is_finite() {
        Ok(rmsd)
    } else {
        Err(GeometryError::NonFinite(rmsd))
    }
}

/// Arithmetic mean of a coordinate set, or `None` if it is empty.
pub fn centroid(coords: &[Point3<f64>]) -> Option<Point3<f64>> {
    if coords.is_empty() {
        return None;
    }
    let sum = coords
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / coords.len() as f64))
}

pub fn translate_all(coords: &mut [Point3<f64>], shift: &Vector3<f64>) {
    for p in coords {
        *p += shift;
    }
}
