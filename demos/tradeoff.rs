//!
//! The bias-variance trade-off, start to finish.
//!
//! First a single training set: as the degree goes up the training error only ever falls,
//! while the error on fresh data falls and then climbs back up. One sample is not enough
//! to say why, so then we repeat the whole thing a few hundred times and split the
//! error into bias², variance and noise.
//!
use biasvar::{
    error::Error,
    experiment::{BiasVarianceExperiment, ExperimentConfig},
    fit_polynomial,
    sample::{generate_sample, noisy_targets, rng_from_seed, Domain, NoiseModel},
    target::{Sinusoid, TargetFunction},
};

fn main() -> Result<(), Error> {
    //
    // The classic setup: sin(2πx) on [0, 1], observed through Gaussian noise
    let target = Sinusoid::default();
    let domain = Domain::new(0.0, 1.0)?;
    let noise = NoiseModel::gaussian(0.3)?;
    let mut rng = rng_from_seed(Some(7));
    println!("Target: {}", target.name());

    //
    // One training set of 20 points, and a large test set to judge each fit on
    let sample = generate_sample(&target, 20, &domain, &noise, &mut rng)?;
    let grid = domain.linspace(200);
    let test: Vec<_> = grid
        .iter()
        .copied()
        .zip(noisy_targets(&target, &grid, &noise, &mut rng)?)
        .collect();

    println!("\nOne sample of {} points:", sample.len());
    println!("{:>6} {:>12} {:>12}", "degree", "train error", "test error");
    for degree in [0, 1, 3, 5, 9, 15] {
        let fit = fit_polynomial(sample.points(), degree)?;
        println!(
            "{degree:>6} {:>12.5} {:>12.5}",
            fit.training_error(),
            fit.mean_squared_error(&test)
        );
    }

    //
    // Now the same question averaged over 500 independent training sets
    let config = ExperimentConfig {
        trials: 500,
        seed: Some(7),
        ..Default::default()
    };
    let report = BiasVarianceExperiment::new(config).run()?;
    println!("\n{report}");

    //
    // The mean curves show where the bias comes from: the average degree 1 fit is a
    // straight line through a sine wave, the average degree 9 fit is almost the sine itself
    for degree in [1, 9] {
        if let Some(d) = report.get(degree) {
            let curve = d.mean_curve();
            let worst = curve
                .iter()
                .map(|&(x, y)| (y - target.y(x)).abs())
                .fold(0.0, f64::max);
            println!("degree {degree}: mean curve is at most {worst:.3} from the target");
        }
    }

    Ok(())
}
