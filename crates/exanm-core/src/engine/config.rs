use crate::core::membrane::MembraneExtent;
use crate::core::reduction::ReductionBoundary;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Parameter `{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("`membrane_hi` ({hi}) must be greater than `membrane_lo` ({lo})")]
    InvertedSlab { hi: f64, lo: f64 },
}

fn default_cutoff() -> f64 {
    15.0
}
fn default_gamma() -> f64 {
    1.0
}
fn default_membrane_hi() -> f64 {
    13.0
}
fn default_membrane_lo() -> f64 {
    -13.0
}
fn default_disk_radius() -> f64 {
    80.0
}
fn default_particle_radius() -> f64 {
    2.5
}
fn default_lattice() -> String {
    "FCC".to_string()
}

/// The flat option set for a model build. Every field has a default, so a
/// plain `ExanmConfig::default()` reproduces the standard calculation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExanmConfig {
    /// Pairwise interaction cutoff (Å).
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,
    /// Uniform spring constant used when no custom spring law is supplied.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Upper z bound of the membrane slab (Å).
    #[serde(default = "default_membrane_hi")]
    pub membrane_hi: f64,
    /// Lower z bound of the membrane slab (Å).
    #[serde(default = "default_membrane_lo")]
    pub membrane_lo: f64,
    /// Radius of the membrane disk in the xy-plane (Å).
    #[serde(default = "default_disk_radius", alias = "R")]
    pub disk_radius: f64,
    /// Radius of an individual membrane particle (Å).
    #[serde(default = "default_particle_radius", alias = "r")]
    pub particle_radius: f64,
    /// Lattice family name: `FCC`, `SC`, or `SH`.
    #[serde(default = "default_lattice", alias = "lat")]
    pub lattice: String,
    /// Lateral extent policy for membrane growth.
    #[serde(default)]
    pub extent: MembraneExtent,
    /// Partition boundary used by the reduction step.
    #[serde(default)]
    pub boundary: ReductionBoundary,
}

impl Default for ExanmConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
            gamma: default_gamma(),
            membrane_hi: default_membrane_hi(),
            membrane_lo: default_membrane_lo(),
            disk_radius: default_disk_radius(),
            particle_radius: default_particle_radius(),
            lattice: default_lattice(),
            extent: MembraneExtent::default(),
            boundary: ReductionBoundary::default(),
        }
    }
}

impl ExanmConfig {
    pub fn builder() -> ExanmConfigBuilder {
        ExanmConfigBuilder::default()
    }

    /// Loads a configuration from a TOML file and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("cutoff", self.cutoff),
            ("gamma", self.gamma),
            ("disk_radius", self.disk_radius),
            ("particle_radius", self.particle_radius),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.membrane_hi <= self.membrane_lo {
            return Err(ConfigError::InvertedSlab {
                hi: self.membrane_hi,
                lo: self.membrane_lo,
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ExanmConfigBuilder {
    cutoff: Option<f64>,
    gamma: Option<f64>,
    membrane_hi: Option<f64>,
    membrane_lo: Option<f64>,
    disk_radius: Option<f64>,
    particle_radius: Option<f64>,
    lattice: Option<String>,
    extent: Option<MembraneExtent>,
    boundary: Option<ReductionBoundary>,
}

impl ExanmConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }
    pub fn membrane_hi(mut self, hi: f64) -> Self {
        self.membrane_hi = Some(hi);
        self
    }
    pub fn membrane_lo(mut self, lo: f64) -> Self {
        self.membrane_lo = Some(lo);
        self
    }
    pub fn disk_radius(mut self, radius: f64) -> Self {
        self.disk_radius = Some(radius);
        self
    }
    pub fn particle_radius(mut self, radius: f64) -> Self {
        self.particle_radius = Some(radius);
        self
    }
    pub fn lattice(mut self, lattice: impl Into<String>) -> Self {
        self.lattice = Some(lattice.into());
        self
    }
    pub fn extent(mut self, extent: MembraneExtent) -> Self {
        self.extent = Some(extent);
        self
    }
    pub fn boundary(mut self, boundary: ReductionBoundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn build(self) -> Result<ExanmConfig, ConfigError> {
        let defaults = ExanmConfig::default();
        let config = ExanmConfig {
            cutoff: self.cutoff.unwrap_or(defaults.cutoff),
            gamma: self.gamma.unwrap_or(defaults.gamma),
            membrane_hi: self.membrane_hi.unwrap_or(defaults.membrane_hi),
            membrane_lo: self.membrane_lo.unwrap_or(defaults.membrane_lo),
            disk_radius: self.disk_radius.unwrap_or(defaults.disk_radius),
            particle_radius: self.particle_radius.unwrap_or(defaults.particle_radius),
            lattice: self.lattice.unwrap_or(defaults.lattice),
            extent: self.extent.unwrap_or(defaults.extent),
            boundary: self.boundary.unwrap_or(defaults.boundary),
        };
        config.validate()?;
        Ok(config)
    }
}
