use tracing::{info, instrument};

use crate::core::coords::CoordinateSource;
use crate::core::hessian::UniformSpring;
use crate::engine::config::ExanmConfig;
use crate::engine::error::ModelError;
use crate::engine::model::ExAnm;
use crate::engine::progress::ProgressReporter;

/// Builds an explicit-membrane model with a uniform spring constant taken from
/// the configuration's `gamma`.
///
/// This is the one-call entry point for the standard calculation; callers that
/// need a distance- or pair-dependent spring law drive
/// [`ExAnm::build_hessian`] directly.
#[instrument(skip_all, name = "membrane_anm_workflow")]
pub fn run<S>(
    source: &S,
    config: &ExanmConfig,
    reporter: &ProgressReporter,
) -> Result<ExAnm, ModelError>
where
    S: CoordinateSource + ?Sized,
{
    let mut model = ExAnm::new("exanm");
    let spring = UniformSpring(config.gamma);
    model.build_hessian(source, &spring, config, reporter)?;
    info!(
        n_real = model.n_real(),
        n_membrane = model.n_membrane(),
        "Explicit-membrane model built."
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn workflow_builds_a_model_with_the_configured_gamma() {
        let step = 5.0 / 3.0f64.sqrt();
        let coords: Vec<Point3<f64>> = (0..10)
            .map(|k| {
                let s = k as f64 * step;
                Point3::new(s, s, s)
            })
            .collect();

        let unit = run(&coords, &ExanmConfig::default(), &ProgressReporter::new()).unwrap();
        let config = ExanmConfig::builder().gamma(2.0).build().unwrap();
        let doubled = run(&coords, &config, &ProgressReporter::new()).unwrap();

        // A uniform spring constant scales the whole Hessian linearly.
        let h1 = unit.hessian().unwrap();
        let h2 = doubled.hessian().unwrap();
        assert!((h2 - h1 * 2.0).abs().max() < 1e-9);
    }
}
