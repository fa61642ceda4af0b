use std::path::PathBuf;

use anyhow::Context;
use biasvar::{
    basis::{BasisKind, ChebyshevBasis, MonomialBasis},
    experiment::{BiasVarianceExperiment, ExperimentConfig},
    logger,
    sample::{generate_sample, noisy_targets, rng_from_seed, Domain, NoiseModel},
    target::{TargetFunction, TargetKind},
    PolynomialFit,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "biasvar")]
#[command(about = "Measure the bias-variance trade-off of polynomial regression")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a bias-variance experiment and print the decomposition per degree
    Run {
        /// TOML or JSON experiment configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of independent training sets
        #[arg(long)]
        trials: Option<usize>,

        /// Points per training set
        #[arg(long)]
        samples: Option<usize>,

        /// Standard deviation of the Gaussian noise
        #[arg(long)]
        noise: Option<f64>,

        /// Evaluate degrees 0 through this value
        #[arg(long)]
        max_degree: Option<usize>,

        /// Feature basis: monomial or chebyshev
        #[arg(long)]
        basis: Option<BasisKind>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw one training set, fit it, and print the polynomial
    Fit {
        /// Polynomial degree
        #[arg(short, long)]
        degree: usize,

        /// Points in the training set
        #[arg(long, default_value_t = 20)]
        samples: usize,

        /// Standard deviation of the Gaussian noise
        #[arg(long, default_value_t = 0.3)]
        noise: f64,

        /// Feature basis: monomial or chebyshev
        #[arg(long, default_value_t = BasisKind::Monomial)]
        basis: BasisKind,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    match args.command {
        Command::Run {
            config,
            trials,
            samples,
            noise,
            max_degree,
            basis,
            seed,
            json,
        } => {
            let mut config = match config {
                Some(path) => ExperimentConfig::from_file(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => ExperimentConfig::default(),
            };

            if let Some(trials) = trials {
                config.trials = trials;
            }
            if let Some(samples) = samples {
                config.sample_size = samples;
            }
            if let Some(std_dev) = noise {
                config.noise = NoiseModel::gaussian(std_dev)?;
            }
            if let Some(max_degree) = max_degree {
                config.degrees = (0..=max_degree).collect();
            }
            if let Some(basis) = basis {
                config.basis = basis;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            tracing::debug!(?config, "experiment configuration");

            let report = BiasVarianceExperiment::new(config)
                .run()
                .context("experiment failed")?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                println!("{report}");
            }
        }

        Command::Fit {
            degree,
            samples,
            noise,
            basis,
            seed,
        } => {
            let noise = NoiseModel::gaussian(noise)?;
            let domain = Domain::default();
            let target = TargetKind::default().build::<f64>()?;
            let mut rng = rng_from_seed(seed);

            let sample = generate_sample(target.as_ref(), samples, &domain, &noise, &mut rng)?;
            let grid = domain.linspace(100);
            let test: Vec<(f64, f64)> = grid
                .iter()
                .copied()
                .zip(noisy_targets(target.as_ref(), &grid, &noise, &mut rng)?)
                .collect();

            let (equation, train_error, test_error) = match basis {
                BasisKind::Monomial => {
                    let fit = PolynomialFit::with_basis(sample.points(), degree, MonomialBasis::new())?;
                    (fit.to_string(), fit.training_error(), fit.mean_squared_error(&test))
                }
                BasisKind::Chebyshev => {
                    let basis = ChebyshevBasis::new(domain.low, domain.high);
                    let fit = PolynomialFit::with_basis(sample.points(), degree, basis)?;
                    (fit.to_string(), fit.training_error(), fit.mean_squared_error(&test))
                }
            };

            println!("target:      {}", target.name());
            println!("fit:         {equation}");
            println!("train error: {train_error:.5}");
            println!("test error:  {test_error:.5}");
        }
    }

    Ok(())
}
