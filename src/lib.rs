//! # Biasvar
//! ## Watching overfitting happen, one thousand fits at a time
//!
//! Every statistics course draws the same picture: as a model gets more flexible, its error on
//! the training data keeps falling while its error on new data falls, bottoms out, and climbs
//! again. The textbook explanation splits the expected error into three parts:
//!
//! ```math
//! E[(y - ŷ(x))²] = bias² + variance + noise
//! ```
//!
//! This crate measures all three directly. It draws many noisy training sets from a known
//! function, fits polynomials of several degrees to each, and compares the resulting family of
//! curves with the truth.
//!
//! ```rust
//! use biasvar::experiment::{BiasVarianceExperiment, ExperimentConfig};
//!
//! // sin(2πx) on [0, 1], 20 noisy points per set, degrees 0 to 9
//! let config = ExperimentConfig { trials: 100, seed: Some(42), ..Default::default() };
//! let report = BiasVarianceExperiment::new(config).run().unwrap();
//!
//! println!("{report}");
//! let best = report.best_degree().unwrap();
//! assert!((2..=6).contains(&best.degree));
//! ```
//!
//! # Core Concepts
//! - A [`target::TargetFunction`] is the noise-free truth `f(x)` samples are drawn around.
//!     - The default, `sin(2πx)`, is not a polynomial, so every degree is biased to some extent.
//! - [`sample::generate_sample`] draws `n` inputs uniformly from a [`sample::Domain`] and adds
//!   noise from a [`sample::NoiseModel`].
//! - [`basis::polynomial_features`] expands inputs into a design matrix, and a [`PolynomialFit`]
//!   solves ordinary least squares on it.
//!     - [`MonomialFit`] uses the plain features `1, x, x², …`.
//!     - [`ChebyshevFit`] spans the same polynomials with better numerical conditioning.
//! - [`statistics::estimate_expected_error`] is the mean squared error between predictions and targets.
//! - A [`experiment::BiasVarianceExperiment`] repeats all of the above and reports, per degree:
//!     - **bias²**: how far the average fitted curve is from the truth,
//!     - **variance**: how much individual curves scatter around their average,
//!     - **noise**: the variance of the observation noise, which no model can remove.
//!
//! # Logging
//! The library reports progress through [`tracing`] and never installs a subscriber itself.
//!
//! # Testing utilities
//! Assertion macros for approximate comparisons and for checking a decomposition live in [`test`].
//!
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod test;

pub mod basis;
pub mod config;
pub mod display;
pub mod error;
pub mod experiment;
pub mod fit;
pub mod sample;
pub mod statistics;
pub mod target;
pub mod value;

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod logger;

pub use fit::{fit_polynomial, ChebyshevFit, MonomialFit, PolynomialFit};

pub use nalgebra;
