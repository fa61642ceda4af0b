//! Experiment configuration
//!
//! An [`ExperimentConfig`] fully describes a bias-variance experiment. Every field has a
//! default, so a configuration file only needs the values it changes:
//!
//! ```toml
//! trials = 500
//! degrees = [1, 3, 9]
//! seed = 7
//!
//! [noise]
//! kind = "gaussian"
//! std_dev = 0.1
//! ```
//!
//! Files are read with [`ExperimentConfig::from_file`]; TOML and JSON are supported.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    basis::BasisKind,
    error::{Error, Result},
    sample::{Domain, NoiseModel},
    target::TargetKind,
};

/// Parameters of a bias-variance experiment.
///
/// The defaults reproduce the classic setup: `sin(2πx)` on `[0, 1]`, Gaussian noise with
/// σ = 0.3, 20 points per training set, 200 training sets, degrees 0 through 9, evaluated
/// on a grid of 100 points, fitted in the monomial basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Ground truth function
    pub target: TargetKind,

    /// Interval inputs are drawn from
    pub domain: Domain<f64>,

    /// Observation noise
    pub noise: NoiseModel,

    /// Points per training set
    pub sample_size: usize,

    /// Number of independent training sets
    pub trials: usize,

    /// Polynomial degrees to evaluate
    pub degrees: Vec<usize>,

    /// Size of the evaluation grid spanning the domain
    pub test_points: usize,

    /// Feature basis used for fitting
    pub basis: BasisKind,

    /// Base seed. Without one, every run draws fresh data.
    pub seed: Option<u64>,
}
impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            target: TargetKind::default(),
            domain: Domain::default(),
            noise: NoiseModel::default(),
            sample_size: 20,
            trials: 200,
            degrees: (0..=9).collect(),
            test_points: 100,
            basis: BasisKind::default(),
            seed: None,
        }
    }
}
impl ExperimentConfig {
    /// Loads a configuration from a `.toml` or `.json` file.
    ///
    /// The result is validated before it is returned.
    ///
    /// # Errors
    /// - [`Error::Io`] if the file cannot be read.
    /// - [`Error::Parse`] if the contents are malformed.
    /// - [`Error::InvalidConfig`] for other extensions, or if validation fails.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let content = std::fs::read_to_string(path)?;
        let config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "unsupported configuration file `{}`; expected .toml or .json",
                    path.display()
                )))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from TOML. The result is not validated.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Parse {
            format: "toml",
            message: e.to_string(),
        })
    }

    /// Parses a configuration from JSON. The result is not validated.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if the JSON is malformed.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Parse {
            format: "json",
            message: e.to_string(),
        })
    }

    /// Checks that an experiment can run with this configuration.
    ///
    /// # Errors
    /// - [`Error::InvalidConfig`] for zero trials, sample size or test points, an empty
    ///   degree list, or a degree that is not below the sample size.
    /// - [`Error::InvalidDomain`], [`Error::InvalidNoise`] for bad sampling parameters.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::InvalidConfig("trials must be at least 1".into()));
        }
        if self.sample_size == 0 {
            return Err(Error::InvalidConfig("sample_size must be at least 1".into()));
        }
        if self.test_points == 0 {
            return Err(Error::InvalidConfig("test_points must be at least 1".into()));
        }
        if self.degrees.is_empty() {
            return Err(Error::InvalidConfig("no degrees to evaluate".into()));
        }
        if let Some(&degree) = self.degrees.iter().find(|&&d| d >= self.sample_size) {
            return Err(Error::InvalidConfig(format!(
                "degree {degree} needs more than {} points per training set",
                self.sample_size
            )));
        }
        if let TargetKind::Polynomial { coefficients } = &self.target {
            if coefficients.is_empty() {
                return Err(Error::InvalidConfig(
                    "polynomial target has no coefficients".into(),
                ));
            }
        }

        self.domain.validate()?;
        self.noise.validate()
    }
}
