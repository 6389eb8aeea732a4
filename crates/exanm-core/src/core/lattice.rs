use nalgebra::Matrix3;
use tracing::warn;

/// Returns the three primitive lattice vectors for a crystal family, one per row.
///
/// Supported families are `"FCC"` (face-centered cubic, the close-packed
/// default), `"SC"` (simple cubic), and `"SH"` (simple hexagonal, a hexagonal
/// xy-basis with a unit z-axis). Each basis is normalized so that every row has
/// unit length; scaling to a physical spacing is the caller's job.
///
/// An unrecognized family yields the zero matrix rather than an error. Callers
/// that want to reject bad input should validate the name up front; this
/// function only emits a diagnostic.
/// Whether `family` names one of the supported crystal families.
pub fn is_known_family(family: &str) -> bool {
    matches!(family, "FCC" | "SC" | "SH")
}

pub fn lattice_vectors(family: &str) -> Matrix3<f64> {
    let a = 1.0 / 2.0f64.sqrt();
    let h = 3.0f64.sqrt() / 2.0;
    match family {
        "FCC" => Matrix3::new(
            0.0, a, a, //
            a, 0.0, a, //
            a, a, 0.0,
        ),
        "SC" => Matrix3::identity(),
        "SH" => Matrix3::new(
            0.5, -h, 0.0, //
            0.5, h, 0.0, //
            0.0, 0.0, 1.0,
        ),
        other => {
            warn!(family = other, "Unrecognized lattice family; using zero vectors.");
            Matrix3::zeros()
        }
    }
}
