use nalgebra::{DMatrix, DVector};
use nalgebra::linalg::SymmetricEigen;

use super::error::ModelError;

// Eigenvalues below this magnitude are treated as rigid-body zero modes.
const ZERO_EIGVAL_TOL: f64 = 1e-6;

/// What a caller wants out of a mode extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeRequest {
    /// Number of modes to return; `None` returns all of them.
    pub n_modes: Option<usize>,
    /// Keep modes with (near-)zero eigenvalues instead of filtering them.
    pub keep_zeros: bool,
    /// Allow the solver to trade memory for speed.
    pub turbo: bool,
}

impl Default for ModeRequest {
    fn default() -> Self {
        Self {
            n_modes: Some(20),
            keep_zeros: false,
            turbo: true,
        }
    }
}

/// Eigenvalues and matching eigenvectors, ascending by eigenvalue. Column `k`
/// of `eigenvectors` belongs to `eigenvalues[k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSet {
    pub eigenvalues: DVector<f64>,
    pub eigenvectors: DMatrix<f64>,
}

/// The seam to an external eigensolver. The model only prepares a symmetric
/// reduced Hessian; the decomposition itself is a collaborator's job.
pub trait ModeSolver {
    fn solve(&self, hessian: &DMatrix<f64>, request: &ModeRequest) -> Result<ModeSet, ModelError>;
}

/// A dense eigensolver backed by nalgebra's symmetric decomposition.
///
/// The `turbo` flag has no effect here: the dense factorization always
/// materializes the full decomposition.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseSolver;

impl ModeSolver for DenseSolver {
    fn solve(&self, hessian: &DMatrix<f64>, request: &ModeRequest) -> Result<ModeSet, ModelError> {
        let eig = SymmetricEigen::try_new(hessian.clone(), f64::EPSILON, 0).ok_or_else(|| {
            ModelError::ModeSolver {
                message: "symmetric eigendecomposition did not converge".to_string(),
            }
        })?;

        let mut order: Vec<usize> = (0..eig.eigenvalues.len()).collect();
        order.sort_by(|&a, &b| {
            eig.eigenvalues[a]
                .partial_cmp(&eig.eigenvalues[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if !request.keep_zeros {
            order.retain(|&idx| eig.eigenvalues[idx].abs() > ZERO_EIGVAL_TOL);
        }
        if let Some(n) = request.n_modes {
            order.truncate(n);
        }

        let dim = hessian.nrows();
        let eigenvalues =
            DVector::from_iterator(order.len(), order.iter().map(|&idx| eig.eigenvalues[idx]));
        let eigenvectors =
            DMatrix::from_fn(dim, order.len(), |r, c| eig.eigenvectors[(r, order[c])]);
        Ok(ModeSet {
            eigenvalues,
            eigenvectors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal(values: &[f64]) -> DMatrix<f64> {
        DMatrix::from_diagonal(&DVector::from_row_slice(values))
    }

    #[test]
    fn modes_come_back_in_ascending_eigenvalue_order() {
        let h = diagonal(&[3.0, 1.0, 2.0]);
        let modes = DenseSolver
            .solve(&h, &ModeRequest { n_modes: None, keep_zeros: true, turbo: true })
            .unwrap();
        let expected = [1.0, 2.0, 3.0];
        for (got, want) in modes.eigenvalues.iter().zip(expected) {
            assert!((got - want).abs() < 1e-10);
        }
        assert_eq!(modes.eigenvectors.shape(), (3, 3));
    }

    #[test]
    fn zero_modes_are_filtered_unless_requested() {
        let h = diagonal(&[0.0, 0.0, 4.0, 9.0]);
        let filtered = DenseSolver.solve(&h, &ModeRequest::default()).unwrap();
        assert_eq!(filtered.eigenvalues.len(), 2);
        assert!((filtered.eigenvalues[0] - 4.0).abs() < 1e-10);
        assert!((filtered.eigenvalues[1] - 9.0).abs() < 1e-10);

        let kept = DenseSolver
            .solve(&h, &ModeRequest { keep_zeros: true, ..ModeRequest::default() })
            .unwrap();
        assert_eq!(kept.eigenvalues.len(), 4);
        assert!(kept.eigenvalues[0].abs() < 1e-10);
    }

    #[test]
    fn mode_count_is_honored() {
        let h = diagonal(&[5.0, 1.0, 3.0, 2.0]);
        let modes = DenseSolver
            .solve(&h, &ModeRequest { n_modes: Some(2), keep_zeros: true, turbo: false })
            .unwrap();
        assert_eq!(modes.eigenvalues.len(), 2);
        assert!((modes.eigenvalues[0] - 1.0).abs() < 1e-10);
        assert!((modes.eigenvalues[1] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn eigenvector_columns_match_their_eigenvalues() {
        let h = diagonal(&[2.0, 7.0]);
        let modes = DenseSolver
            .solve(&h, &ModeRequest { n_modes: None, keep_zeros: true, turbo: true })
            .unwrap();
        for k in 0..2 {
            let v = modes.eigenvectors.column(k).into_owned();
            let hv = &h * &v;
            assert!((hv - &v * modes.eigenvalues[k]).norm() < 1e-10);
        }
    }
}
