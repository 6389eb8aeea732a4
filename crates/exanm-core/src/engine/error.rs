use thiserror::Error;

use super::config::ConfigError;
use crate::core::coords::CoordinateError;
use crate::core::reduction::ReductionError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid coordinate input: {source}")]
    Coordinates {
        #[from]
        source: CoordinateError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Degrees-of-freedom reduction failed: {source}")]
    Reduction {
        #[from]
        source: ReductionError,
    },

    #[error(
        "Membrane generation produced no particles; the disk radius may be smaller than the \
         protein's own extent"
    )]
    EmptyMembrane,

    #[error("Hessian has not been built yet; call `build_hessian` first")]
    HessianNotBuilt,

    #[error("Mode solver failed: {message}")]
    ModeSolver { message: String },
}
