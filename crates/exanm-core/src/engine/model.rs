use std::time::Instant;

use nalgebra::DMatrix;
use tracing::info;

use super::config::ExanmConfig;
use super::error::ModelError;
use super::modes::{ModeRequest, ModeSet, ModeSolver};
use super::progress::{Progress, ProgressReporter};
use crate::core::coords::CoordinateSource;
use crate::core::hessian::{SpringFunction, build_full_hessian};
use crate::core::lattice;
use crate::core::membrane::{MembraneRegion, build_membrane};
use crate::core::reduction::reduce;

/// An explicit-membrane anisotropic network model.
///
/// The model owns the reduced Hessian produced by [`ExAnm::build_hessian`]:
/// the protein is embedded in a synthetic membrane
/// lattice, the full spring network over protein and membrane particles is
/// assembled, and the membrane degrees of freedom are condensed out so that
/// the stored matrix acts on the protein particles alone.
#[derive(Debug, Clone)]
pub struct ExAnm {
    name: String,
    n_real: usize,
    n_membrane: usize,
    hessian: Option<DMatrix<f64>>,
}

impl ExAnm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            n_real: 0,
            n_membrane: 0,
            hessian: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of real (protein) particles from the last build.
    pub fn n_real(&self) -> usize {
        self.n_real
    }

    /// Number of membrane particles generated by the last build.
    pub fn n_membrane(&self) -> usize {
        self.n_membrane
    }

    /// The reduced Hessian, once built. Shape `3n × 3n` for `n` real particles.
    pub fn hessian(&self) -> Option<&DMatrix<f64>> {
        self.hessian.as_ref()
    }

    /// Builds the reduced Hessian for the given coordinates.
    ///
    /// Membrane growth and Hessian assembly are recomputed from scratch on
    /// every call; the membrane extension itself is never persisted, only its
    /// condensed effect on the real particles.
    pub fn build_hessian<S>(
        &mut self,
        source: &S,
        spring: &dyn SpringFunction,
        config: &ExanmConfig,
        reporter: &ProgressReporter,
    ) -> Result<(), ModelError>
    where
        S: CoordinateSource + ?Sized,
    {
        config.validate()?;
        let mut coords = source.coordinates()?;
        self.n_real = coords.len();
        self.hessian = None;

        if !lattice::is_known_family(&config.lattice) {
            reporter.report(Progress::Message(format!(
                "Unknown lattice family `{}`; membrane growth will place no particles.",
                config.lattice
            )));
        }

        reporter.report(Progress::PhaseStart { name: "Membrane" });
        let started = Instant::now();
        let region = MembraneRegion {
            z_lo: config.membrane_lo,
            z_hi: config.membrane_hi,
            disk_radius: config.disk_radius,
            particle_radius: config.particle_radius,
        };
        self.n_membrane = build_membrane(&mut coords, &region, &config.lattice, config.extent);
        reporter.report(Progress::MembraneGrown {
            particles: self.n_membrane,
        });
        reporter.report(Progress::PhaseFinish {
            elapsed: started.elapsed(),
        });
        info!(
            model = %self.name,
            particles = self.n_membrane,
            "Membrane lattice built."
        );

        if self.n_membrane == 0 {
            return Err(ModelError::EmptyMembrane);
        }

        reporter.report(Progress::PhaseStart { name: "Hessian" });
        let started = Instant::now();
        let full = build_full_hessian(&coords, config.cutoff, spring);
        let reduced = reduce(&full, self.n_real, config.boundary)?;
        reporter.report(Progress::PhaseFinish {
            elapsed: started.elapsed(),
        });
        info!(
            model = %self.name,
            total = coords.len(),
            "Hessian assembled and reduced."
        );

        self.hessian = Some(reduced);
        Ok(())
    }

    /// Extracts normal modes from the reduced Hessian through an injected
    /// eigensolver.
    pub fn calc_modes(
        &self,
        solver: &dyn ModeSolver,
        request: &ModeRequest,
    ) -> Result<ModeSet, ModelError> {
        let hessian = self.hessian.as_ref().ok_or(ModelError::HessianNotBuilt)?;
        solver.solve(hessian, request)
    }
}
