use nalgebra::DMatrix;
use nalgebra::linalg::SymmetricEigen;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ReductionError {
    #[error("No eliminated degrees of freedom: the full Hessian has no membrane block")]
    NothingToEliminate,

    #[error("Membrane block of size {size}x{size} is degenerate and cannot be eliminated")]
    SingularMembraneBlock { size: usize },
}

/// Where the real/membrane partition boundary is drawn during reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReductionBoundary {
    /// Partition exactly at `3n`, keeping every membrane degree of freedom in
    /// the eliminated block.
    #[default]
    Exact,
    /// Partition one row and column past `3n`, reproducing historical results
    /// in which the first membrane degree of freedom is dropped from the
    /// elimination instead of condensed out.
    Legacy,
}

/// Condenses the membrane degrees of freedom out of a full Hessian.
///
/// With `ss`, `so`, `os`, `oo` the blocks of the partition at `3 * n_real`,
/// the reduced Hessian is the Schur complement `ss − so · oo⁻¹ · os`: the
/// membrane particles are assumed force-free, their equilibrium displacement
/// is the static response to the real particles, and substituting it out
/// leaves an effective network on the real particles alone.
///
/// The membrane block is condensed through its eigendecomposition rather than
/// a plain inverse. A grown membrane can carry exact mechanisms, directions in
/// which every spring length is stationary: a ring of lattice particles around
/// a straight stretch of anchors is free to spin about that axis, for example.
/// For a spring-network Hessian the real particles exert no force along such a
/// mechanism, so those eigendirections have no static response and are dropped
/// from the elimination. A zero or indefinite membrane block, or a mechanism
/// the real particles do couple into, has no well-defined response at all and
/// is reported as [`ReductionError::SingularMembraneBlock`] instead of being
/// inverted into garbage.
///
/// The result always has shape `3n × 3n`. Fails when there is nothing to
/// eliminate, which is what happens when membrane generation produced no
/// particles.
pub fn reduce(
    full: &DMatrix<f64>,
    n_real: usize,
    boundary: ReductionBoundary,
) -> Result<DMatrix<f64>, ReductionError> {
    let dim = full.nrows();
    let split = 3 * n_real;
    debug_assert!(split <= dim);

    let other_start = match boundary {
        ReductionBoundary::Exact => split,
        ReductionBoundary::Legacy => (split + 1).min(dim),
    };
    let n_other = dim - other_start;
    if n_other == 0 {
        return Err(ReductionError::NothingToEliminate);
    }

    let ss = full.view((0, 0), (split, split)).into_owned();
    let so = full.view((0, other_start), (split, n_other)).into_owned();
    let os = full.view((other_start, 0), (n_other, split)).into_owned();
    let oo = full.view((other_start, other_start), (n_other, n_other)).into_owned();

    let eigen = SymmetricEigen::try_new(oo, f64::EPSILON, 0)
        .ok_or(ReductionError::SingularMembraneBlock { size: n_other })?;
    let lambda_max = eigen.eigenvalues.iter().fold(0.0f64, |acc, &l| acc.max(l));
    if lambda_max <= 0.0 {
        return Err(ReductionError::SingularMembraneBlock { size: n_other });
    }

    // Eigenvalues at or below this are the block's numerical null space; a
    // negative one past it means the block is not a valid spring-network
    // Hessian at all.
    let null_tol = lambda_max * n_other as f64 * f64::EPSILON;
    if eigen.eigenvalues.iter().any(|&l| l < -null_tol) {
        return Err(ReductionError::SingularMembraneBlock { size: n_other });
    }

    let coupling_tol = 1e-8 * os.norm();
    let mut response = eigen.eigenvectors.transpose() * os;
    for (k, &lambda) in eigen.eigenvalues.iter().enumerate() {
        if lambda > null_tol {
            let mut row = response.row_mut(k);
            row /= lambda;
        } else {
            // A mechanism with a static load on it cannot be condensed out.
            if response.row(k).norm() > coupling_tol {
                return Err(ReductionError::SingularMembraneBlock { size: n_other });
            }
            response.row_mut(k).fill(0.0);
        }
    }

    Ok(ss - so * (eigen.eigenvectors * response))
}
