//! Monte Carlo estimation of bias and variance.
//!
//! The expected squared error of a model trained on a random sample splits into three parts:
//!
//! ```math
//! E[(y - ŷ(x))²] = (f(x) - E[ŷ(x)])² + Var[ŷ(x)] + σ²
//!                =        bias²       + variance  + noise
//! ```
//!
//! None of these can be computed from a single dataset. [`BiasVarianceExperiment`] estimates
//! them the direct way: draw many independent training sets from the same distribution, fit
//! one polynomial per set, and look at how the resulting predictions spread on a fixed grid.
//!
//! - Low degrees barely react to the data: small variance, large bias.
//! - High degrees chase the noise: small bias, large variance.
//! - The best degree balances the two; [`ExperimentReport::best_degree`] finds it.
//!
//! # Example
//! ```
//! use biasvar::experiment::{BiasVarianceExperiment, ExperimentConfig};
//!
//! let config = ExperimentConfig { trials: 50, degrees: vec![1, 3, 9], seed: Some(1), ..Default::default() };
//! let report = BiasVarianceExperiment::new(config).run().unwrap();
//!
//! let (underfit, balanced, overfit) = (report.get(1).unwrap(), report.get(3).unwrap(), report.get(9).unwrap());
//! assert!(underfit.bias_squared > balanced.bias_squared);
//! assert!(overfit.variance > balanced.variance);
//! ```
use serde::Serialize;

use crate::{
    basis::{Basis, BasisKind, ChebyshevBasis, MonomialBasis},
    error::{Error, Result},
    fit::PolynomialFit,
    sample::{generate_sample, noisy_targets, rng_from_seed, Sample},
    statistics,
    target::TargetFunction,
    value::Value,
};

pub use crate::config::ExperimentConfig;

/// Predictions of many independently trained models at a fixed set of inputs.
///
/// Row `t` holds the predictions of the model from trial `t` at every evaluation point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ensemble<T: Value = f64> {
    xs: Vec<T>,
    curves: Vec<Vec<T>>,
}
impl<T: Value> Ensemble<T> {
    /// Creates an empty ensemble evaluated at `xs`.
    pub fn new(xs: Vec<T>) -> Self {
        Self { xs, curves: vec![] }
    }

    /// Adds the predictions of one model.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if there is not one prediction per evaluation point.
    pub fn push(&mut self, predictions: Vec<T>) -> Result<()> {
        if predictions.len() != self.xs.len() {
            return Err(Error::LengthMismatch {
                expected: self.xs.len(),
                actual: predictions.len(),
            });
        }
        self.curves.push(predictions);
        Ok(())
    }

    /// The evaluation points
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Per-model prediction curves
    pub fn curves(&self) -> &[Vec<T>] {
        &self.curves
    }

    /// Number of models
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// True if no models were added
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    fn column(&self, i: usize) -> impl Iterator<Item = T> + '_ {
        self.curves.iter().map(move |curve| curve[i])
    }

    /// Average prediction `E[ŷ(x)]` at every evaluation point.
    pub fn mean_prediction(&self) -> Vec<T> {
        (0..self.xs.len())
            .map(|i| statistics::mean(self.column(i)))
            .collect()
    }

    /// Squared bias `(E[ŷ(x)] - f(x))²` at every evaluation point.
    pub fn bias_squared<F: TargetFunction<T> + ?Sized>(&self, target: &F) -> Vec<T> {
        self.mean_prediction()
            .into_iter()
            .zip(&self.xs)
            .map(|(mean, &x)| Value::powi(mean - target.y(x), 2))
            .collect()
    }

    /// Variance `Var[ŷ(x)]` across models at every evaluation point.
    ///
    /// Uses the population formula, so that `bias² + variance` equals the mean squared
    /// distance of the models from `f(x)` exactly.
    pub fn variance(&self) -> Vec<T> {
        (0..self.xs.len())
            .map(|i| statistics::variance(self.column(i)))
            .collect()
    }

    /// Full decomposition at every evaluation point.
    pub fn decompose<F: TargetFunction<T> + ?Sized>(&self, target: &F) -> Vec<PointDecomposition<T>> {
        let mean = self.mean_prediction();
        let variance = self.variance();
        self.xs
            .iter()
            .zip(mean)
            .zip(variance)
            .map(|((&x, mean_prediction), variance)| {
                let y_true = target.y(x);
                PointDecomposition {
                    x,
                    y_true,
                    mean_prediction,
                    bias_squared: Value::powi(mean_prediction - y_true, 2),
                    variance,
                }
            })
            .collect()
    }
}

/// Bias and variance of an ensemble at one evaluation point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointDecomposition<T: Value = f64> {
    /// Evaluation point
    pub x: T,

    /// Noise-free target value `f(x)`
    pub y_true: T,

    /// Average prediction across trials
    pub mean_prediction: T,

    /// `(mean_prediction - y_true)²`
    pub bias_squared: T,

    /// Spread of the predictions across trials
    pub variance: T,
}

/// Results for one polynomial degree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeReport {
    /// Polynomial degree
    pub degree: usize,

    /// Trials that produced a fit
    pub trials: usize,

    /// Trials whose fit failed and were left out
    pub failed_trials: usize,

    /// Squared bias averaged over the evaluation grid
    pub bias_squared: f64,

    /// Variance averaged over the evaluation grid
    pub variance: f64,

    /// Irreducible error, the noise model's variance
    pub noise: f64,

    /// Measured error of the trial models on fresh noisy test data, averaged over trials
    pub expected_error: f64,

    /// `bias² + variance + noise`
    pub decomposed_error: f64,

    /// Average error of the trial models on their own training data
    pub train_error: f64,

    /// Average error on fresh test data; the same quantity as `expected_error`
    pub test_error: f64,

    /// Decomposition at each evaluation point
    pub points: Vec<PointDecomposition<f64>>,

    /// Every trial's prediction curve
    #[serde(skip)]
    pub ensemble: Ensemble<f64>,
}
impl DegreeReport {
    /// Mean prediction curve as `(x, E[ŷ(x)])` points
    pub fn mean_curve(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.x, p.mean_prediction))
            .collect()
    }
}

/// Results of a full experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentReport {
    /// Description of the target function
    pub target: String,

    /// Seed the trial seeds were derived from
    pub seed: u64,

    /// The configuration that produced this report
    pub config: ExperimentConfig,

    /// One report per evaluated degree, in configuration order
    pub degrees: Vec<DegreeReport>,
}
impl ExperimentReport {
    /// The degree with the lowest expected error. Ties go to the lower degree.
    pub fn best_degree(&self) -> Option<&DegreeReport> {
        self.degrees.iter().min_by(|a, b| {
            a.expected_error
                .total_cmp(&b.expected_error)
                .then(a.degree.cmp(&b.degree))
        })
    }

    /// The report for a given degree, if it was evaluated.
    pub fn get(&self, degree: usize) -> Option<&DegreeReport> {
        self.degrees.iter().find(|d| d.degree == degree)
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Parse {
            format: "json",
            message: e.to_string(),
        })
    }
}
impl std::fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "target {}, {} trials of {} points, noise {}, {} basis",
            self.target, self.config.trials, self.config.sample_size, self.config.noise, self.config.basis
        )?;
        writeln!(
            f,
            "{:>6} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "degree", "bias²", "variance", "noise", "b²+v+n", "test error", "train error"
        )?;
        for d in &self.degrees {
            writeln!(
                f,
                "{:>6} {:>12.5} {:>12.5} {:>12.5} {:>12.5} {:>12.5} {:>12.5}",
                d.degree,
                d.bias_squared,
                d.variance,
                d.noise,
                d.decomposed_error,
                d.expected_error,
                d.train_error
            )?;
        }
        if let Some(best) = self.best_degree() {
            write!(
                f,
                "best degree: {} (expected error {:.5})",
                best.degree, best.expected_error
            )?;
        }
        Ok(())
    }
}

/// One training set and the matching fresh test targets on the evaluation grid.
struct Trial {
    sample: Sample<f64>,
    test_targets: Vec<f64>,
}

/// Outcome of fitting one trial.
struct TrialFit {
    predictions: Vec<f64>,
    train_error: f64,
    test_error: f64,
}

/// Runs a bias-variance experiment.
pub struct BiasVarianceExperiment {
    config: ExperimentConfig,
    target: Option<Box<dyn TargetFunction<f64>>>,
    parallel: bool,
}
impl BiasVarianceExperiment {
    /// Creates an experiment using the target described by the configuration.
    pub fn new(config: ExperimentConfig) -> Self {
        Self {
            config,
            target: None,
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Creates an experiment with a custom target function, overriding `config.target`.
    ///
    /// ```
    /// # use biasvar::{experiment::{BiasVarianceExperiment, ExperimentConfig}, target::FnTarget};
    /// let config = ExperimentConfig { trials: 20, degrees: vec![2], seed: Some(3), ..Default::default() };
    /// let target = FnTarget::new("exp(x)", |x: f64| x.exp());
    /// let report = BiasVarianceExperiment::with_target(config, target).run().unwrap();
    /// assert_eq!(report.target, "exp(x)");
    /// ```
    pub fn with_target(config: ExperimentConfig, target: impl TargetFunction<f64> + 'static) -> Self {
        Self {
            config,
            target: Some(Box::new(target)),
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Runs every trial on the calling thread, even with the `parallel` feature enabled.
    ///
    /// Reports are identical either way.
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// The experiment's configuration
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs every trial for every configured degree.
    ///
    /// Each trial draws its training set and test noise from its own RNG, seeded from the
    /// base seed and the trial index. Every degree therefore sees the same training sets,
    /// and results do not depend on the degree order or on whether trials ran in parallel.
    ///
    /// # Errors
    /// - Any error from [`ExperimentConfig::validate`].
    /// - The fit error of the first trial, if every trial of some degree failed to fit.
    pub fn run(&self) -> Result<ExperimentReport> {
        self.config.validate()?;
        match self.config.basis {
            BasisKind::Monomial => self.run_with(&MonomialBasis::new()),
            BasisKind::Chebyshev => self.run_with(&ChebyshevBasis::new(
                self.config.domain.low,
                self.config.domain.high,
            )),
        }
    }

    fn run_with<B: Basis<f64>>(&self, basis: &B) -> Result<ExperimentReport> {
        let built;
        let target: &dyn TargetFunction<f64> = match &self.target {
            Some(target) => target.as_ref(),
            None => {
                built = self.config.target.build::<f64>()?;
                built.as_ref()
            }
        };

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let xs = self.config.domain.linspace(self.config.test_points);

        tracing::info!(
            function = %target.name(),
            trials = self.config.trials,
            sample_size = self.config.sample_size,
            basis = basis.name(),
            seed,
            "running bias-variance experiment"
        );

        let trials = map_trials(self.config.trials, self.parallel, |t| {
            let mut rng = rng_from_seed(Some(trial_seed(seed, t)));
            let sample = generate_sample(
                target,
                self.config.sample_size,
                &self.config.domain,
                &self.config.noise,
                &mut rng,
            )?;
            let test_targets = noisy_targets(target, &xs, &self.config.noise, &mut rng)?;
            Ok(Trial {
                sample,
                test_targets,
            })
        })
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

        let degrees = self
            .config
            .degrees
            .iter()
            .map(|&degree| self.evaluate_degree(degree, basis, target, &xs, &trials))
            .collect::<Result<Vec<_>>>()?;

        let report = ExperimentReport {
            target: target.name(),
            seed,
            config: self.config.clone(),
            degrees,
        };

        if let Some(best) = report.best_degree() {
            tracing::info!(
                degree = best.degree,
                expected_error = best.expected_error,
                "experiment finished"
            );
        }
        Ok(report)
    }

    fn evaluate_degree<B: Basis<f64>>(
        &self,
        degree: usize,
        basis: &B,
        target: &dyn TargetFunction<f64>,
        xs: &[f64],
        trials: &[Trial],
    ) -> Result<DegreeReport> {
        let fits = map_trials(trials.len(), self.parallel, |t| {
            let trial = &trials[t];
            let fit = PolynomialFit::with_basis(trial.sample.points(), degree, basis.clone())?;
            let predictions = fit.predict(xs);
            let test_error = statistics::estimate_expected_error(&predictions, &trial.test_targets)?;
            Ok(TrialFit {
                predictions,
                train_error: fit.training_error(),
                test_error,
            })
        });

        let mut ensemble = Ensemble::new(xs.to_vec());
        let mut train_errors = Vec::with_capacity(fits.len());
        let mut test_errors = Vec::with_capacity(fits.len());
        let mut first_error = None;
        let mut failed_trials = 0;
        for (t, fit) in fits.into_iter().enumerate() {
            match fit {
                Ok(fit) => {
                    ensemble.push(fit.predictions)?;
                    train_errors.push(fit.train_error);
                    test_errors.push(fit.test_error);
                }
                Err(e) => {
                    tracing::debug!(degree, trial = t, error = %e, "trial fit failed");
                    failed_trials += 1;
                    first_error.get_or_insert(e);
                }
            }
        }

        if ensemble.is_empty() {
            return Err(first_error.unwrap_or(Error::NoData));
        }

        let points = ensemble.decompose(target);
        let bias_squared = statistics::mean(points.iter().map(|p| p.bias_squared));
        let variance = statistics::mean(points.iter().map(|p| p.variance));
        let noise = self.config.noise.variance();
        let expected_error = statistics::mean(test_errors.into_iter());
        let train_error = statistics::mean(train_errors.into_iter());

        tracing::debug!(
            degree,
            bias_squared,
            variance,
            expected_error,
            failed_trials,
            "degree evaluated"
        );

        Ok(DegreeReport {
            degree,
            trials: ensemble.len(),
            failed_trials,
            bias_squared,
            variance,
            noise,
            expected_error,
            decomposed_error: bias_squared + variance + noise,
            train_error,
            test_error: expected_error,
            points,
            ensemble,
        })
    }
}

/// Derives an independent seed for one trial (`SplitMix64` finalizer).
fn trial_seed(base: u64, trial: usize) -> u64 {
    let mut z = base ^ (trial as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Maps every trial index, on the rayon pool when `parallel` is set and the `parallel`
/// feature is enabled.
///
/// Results are always returned in trial order.
fn map_trials<R, F>(n: usize, parallel: bool, f: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize) -> R + Send + Sync,
{
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return (0..n).into_par_iter().map(f).collect();
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    (0..n).map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_all_close, assert_close, assert_decomposes,
        sample::{Domain, NoiseModel},
        target::{FnTarget, Sinusoid, TargetKind},
    };

    fn quick(degrees: Vec<usize>) -> ExperimentConfig {
        ExperimentConfig {
            trials: 100,
            degrees,
            test_points: 50,
            seed: Some(2024),
            ..Default::default()
        }
    }

    #[test]
    fn test_ensemble_statistics() {
        let mut ensemble = Ensemble::new(vec![0.0, 0.25]);
        ensemble.push(vec![1.0, 2.0]).unwrap();
        ensemble.push(vec![3.0, 2.0]).unwrap();
        assert!(matches!(
            ensemble.push(vec![1.0]),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 1
            })
        ));

        assert_eq!(ensemble.len(), 2);
        assert_all_close!(ensemble.mean_prediction(), [2.0, 2.0]);
        assert_all_close!(ensemble.variance(), [1.0, 0.0]);

        let target = Sinusoid::default();
        let bias = ensemble.bias_squared(&target);
        assert_close!(bias[0], 4.0);
        assert_close!(bias[1], 1.0, 1e-15);

        let points = ensemble.decompose(&target);
        assert_eq!(points.len(), 2);
        assert_close!(points[1].y_true, 1.0);
        assert_close!(points[0].variance, 1.0);
    }

    #[test]
    fn test_decomposition_matches_measured_error() {
        let config = ExperimentConfig {
            trials: 400,
            degrees: vec![0, 1, 3, 6],
            seed: Some(17),
            ..Default::default()
        };
        let report = BiasVarianceExperiment::new(config).run().unwrap();
        for degree in &report.degrees {
            assert_decomposes!(degree, 0.1);
            assert!(degree.bias_squared >= 0.0 && degree.variance >= 0.0);
            assert_close!(degree.noise, 0.09, 1e-15);
            assert_eq!(degree.test_error, degree.expected_error);
        }
    }

    #[test]
    fn test_tradeoff_shape() {
        let report = BiasVarianceExperiment::new(quick(vec![0, 1, 3, 9])).run().unwrap();

        let bias: Vec<f64> = report.degrees.iter().map(|d| d.bias_squared).collect();
        assert!(bias[0] > bias[1] && bias[1] > bias[2], "{bias:?}");

        let variance: Vec<f64> = report.degrees.iter().map(|d| d.variance).collect();
        assert!(variance[3] > variance[2] && variance[3] > variance[0], "{variance:?}");

        let train: Vec<f64> = report.degrees.iter().map(|d| d.train_error).collect();
        assert!(train.windows(2).all(|w| w[1] <= w[0]), "{train:?}");

        assert_eq!(report.best_degree().map(|d| d.degree), Some(3));
    }

    #[test]
    fn test_noise_free_polynomial_is_unbiased() {
        let config = ExperimentConfig {
            target: TargetKind::Polynomial {
                coefficients: vec![1.0, -2.0, 3.0],
            },
            noise: NoiseModel::None,
            domain: Domain { low: -1.0, high: 1.0 },
            degrees: vec![2, 4],
            basis: BasisKind::Chebyshev,
            ..quick(vec![])
        };
        let report = BiasVarianceExperiment::new(config).run().unwrap();
        for degree in &report.degrees {
            assert_close!(degree.bias_squared, 0.0, 1e-18);
            assert_close!(degree.variance, 0.0, 1e-18);
            assert_close!(degree.expected_error, 0.0, 1e-18);
            assert_eq!(degree.noise, 0.0);
        }
    }

    #[test]
    fn test_chebyshev_unbiased_on_shifted_domain() {
        let config = ExperimentConfig {
            target: TargetKind::Polynomial {
                coefficients: vec![1.0, -2.0, 0.5],
            },
            noise: NoiseModel::None,
            domain: Domain { low: 100.0, high: 101.0 },
            degrees: vec![2, 3],
            basis: BasisKind::Chebyshev,
            ..quick(vec![])
        };
        let report = BiasVarianceExperiment::new(config).run().unwrap();
        for degree in &report.degrees {
            assert_close!(degree.bias_squared, 0.0, 1e-12);
            assert_close!(degree.variance, 0.0, 1e-12);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = BiasVarianceExperiment::new(quick(vec![2, 5])).run().unwrap();
        let b = BiasVarianceExperiment::new(quick(vec![5, 2])).run().unwrap();
        assert_eq!(a.seed, 2024);
        assert_eq!(a.get(2), b.get(2));
        assert_eq!(a.get(5), b.get(5));

        let c = BiasVarianceExperiment::new(ExperimentConfig {
            seed: Some(2025),
            ..quick(vec![2, 5])
        })
        .run()
        .unwrap();
        assert_ne!(a.get(2), c.get(2));
    }

    #[test]
    fn test_sequential_matches_default() {
        let default = BiasVarianceExperiment::new(quick(vec![1, 4])).run().unwrap();
        let sequential = BiasVarianceExperiment::new(quick(vec![1, 4]))
            .sequential()
            .run()
            .unwrap();
        assert_eq!(default, sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let config = ExperimentConfig {
            trials: 300,
            basis: BasisKind::Chebyshev,
            ..quick(vec![0, 3, 9])
        };
        let parallel = BiasVarianceExperiment::new(config.clone());
        assert!(parallel.parallel);

        let parallel = parallel.run().unwrap();
        let sequential = BiasVarianceExperiment::new(config).sequential().run().unwrap();
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.to_json().unwrap(), sequential.to_json().unwrap());
        for (a, b) in parallel.degrees.iter().zip(&sequential.degrees) {
            assert_eq!(a.ensemble, b.ensemble);
        }
    }

    #[test]
    fn test_bases_agree() {
        let monomial = BiasVarianceExperiment::new(quick(vec![1, 4])).run().unwrap();
        let chebyshev = BiasVarianceExperiment::new(ExperimentConfig {
            basis: BasisKind::Chebyshev,
            ..quick(vec![1, 4])
        })
        .run()
        .unwrap();

        for (m, c) in monomial.degrees.iter().zip(&chebyshev.degrees) {
            assert_close!(m.bias_squared, c.bias_squared, 1e-9);
            assert_close!(m.variance, c.variance, 1e-9);
            assert_close!(m.expected_error, c.expected_error, 1e-9);
        }
    }

    #[test]
    fn test_every_trial_failing_is_an_error() {
        let config = quick(vec![1]);
        let target = FnTarget::new("nan", |_: f64| f64::NAN);
        let result = BiasVarianceExperiment::with_target(config, target).run();
        assert!(matches!(result, Err(Error::Algebra(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = BiasVarianceExperiment::new(quick(vec![20])).run();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_report_output() {
        let report = BiasVarianceExperiment::new(ExperimentConfig {
            trials: 10,
            test_points: 5,
            ..quick(vec![0, 2])
        })
        .run()
        .unwrap();

        let degree = report.get(2).unwrap();
        assert_eq!(degree.points.len(), 5);
        assert_eq!(degree.ensemble.curves().len(), 10);
        assert_eq!(degree.mean_curve().len(), 5);
        assert!(report.get(7).is_none());

        let table = report.to_string();
        assert!(table.contains("best degree"));

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["degrees"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["seed"], 2024);
        assert!(value["degrees"][0].get("ensemble").is_none());
    }

    #[test]
    fn test_best_degree_ties_go_low() {
        let make = |degree, expected_error| DegreeReport {
            degree,
            trials: 1,
            failed_trials: 0,
            bias_squared: 0.0,
            variance: 0.0,
            noise: 0.0,
            expected_error,
            decomposed_error: 0.0,
            train_error: 0.0,
            test_error: expected_error,
            points: vec![],
            ensemble: Ensemble::default(),
        };
        let report = ExperimentReport {
            target: String::new(),
            seed: 0,
            config: ExperimentConfig::default(),
            degrees: vec![make(5, 0.2), make(3, 0.1), make(4, 0.1)],
        };
        assert_eq!(report.best_degree().map(|d| d.degree), Some(3));
    }
}
