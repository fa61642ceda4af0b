//! Error types for sampling, fitting and running experiments
//!
//! This module defines the failure modes of the crate, along with a convenient `Result` alias.

/// Errors that can occur while generating data, fitting polynomials, or running an experiment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cannot fit or evaluate because there is no data.
    #[error("No data available")]
    NoData,

    /// The requested polynomial degree is too high for the dataset.
    ///
    /// The degree must be less than the number of data points.
    #[error("Polynomial degree `{0}` is too high for the dataset")]
    DegreeTooHigh(usize),

    /// The sampling domain is empty, inverted, or not finite.
    #[error("Invalid domain {low}..{high}; expected finite bounds with low < high")]
    InvalidDomain {
        /// Lower bound as given
        low: String,
        /// Upper bound as given
        high: String,
    },

    /// A noise model parameter is negative or not finite.
    #[error("Invalid noise model: {0}")]
    InvalidNoise(String),

    /// Two series that must be paired up have different lengths.
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Length of the reference series
        expected: usize,
        /// Length of the offending series
        actual: usize,
    },

    /// An experiment configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A numeric value could not be cast to the target type.
    #[error("Failed to cast value to target type")]
    CastFailed,

    /// Failed to solve the least squares system.
    ///
    /// Contains a static string describing the solver error.
    #[error("Failed to solve: {0}")]
    Algebra(&'static str),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("Failed to parse {format} configuration: {message}")]
    Parse {
        /// `toml` or `json`
        format: &'static str,
        /// Parser message
        message: String,
    },
}

/// Result type for this crate
pub type Result<T> = std::result::Result<T, Error>;
