use nalgebra::{DMatrix, Matrix3, Point3};

/// A spring stiffness law for pairwise interactions.
///
/// The stiffness may depend on the squared separation of the pair and on the
/// particle indices, which allows distance-dependent or pair-specific laws.
/// Any `Fn(f64, usize, usize) -> f64` closure qualifies.
pub trait SpringFunction {
    /// Returns the stiffness for the pair `(i, j)` at squared distance `dist2`.
    fn stiffness(&self, dist2: f64, i: usize, j: usize) -> f64;
}

/// The classical ANM spring: one uniform stiffness for every interacting pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSpring(pub f64);

impl SpringFunction for UniformSpring {
    fn stiffness(&self, _dist2: f64, _i: usize, _j: usize) -> f64 {
        self.0
    }
}

impl<F> SpringFunction for F
where
    F: Fn(f64, usize, usize) -> f64,
{
    fn stiffness(&self, dist2: f64, i: usize, j: usize) -> f64 {
        self(dist2, i, j)
    }
}

/// Assembles the full Hessian of the harmonic network over all particles.
///
/// Every unordered pair within the cutoff contributes a 3×3 super-element
/// `outer(Δ, Δ) · (−g / d²)` written symmetrically to the two off-diagonal
/// blocks and subtracted from both diagonal blocks, so each block row of the
/// result sums to the zero 3×3 matrix (rigid-body translation invariance).
///
/// Coincident particles carry no interaction direction and are skipped.
pub fn build_full_hessian(
    coords: &[Point3<f64>],
    cutoff: f64,
    spring: &dyn SpringFunction,
) -> DMatrix<f64> {
    let total = coords.len();
    let mut hessian = DMatrix::zeros(3 * total, 3 * total);
    let cutoff2 = cutoff * cutoff;

    for i in 0..total {
        for j in (i + 1)..total {
            let delta = coords[j] - coords[i];
            let dist2 = delta.norm_squared();
            if dist2 > cutoff2 || dist2 <= f64::EPSILON {
                continue;
            }
            let g = spring.stiffness(dist2, i, j);
            let element: Matrix3<f64> = delta * delta.transpose() * (-g / dist2);

            let (bi, bj) = (3 * i, 3 * j);
            hessian.fixed_view_mut::<3, 3>(bi, bj).copy_from(&element);
            hessian.fixed_view_mut::<3, 3>(bj, bi).copy_from(&element);
            let mut diag_i = hessian.fixed_view_mut::<3, 3>(bi, bi);
            diag_i -= element;
            let mut diag_j = hessian.fixed_view_mut::<3, 3>(bj, bj);
            diag_j -= element;
        }
    }
    hessian
}
