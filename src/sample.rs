//! Drawing noisy samples from a known function.
//!
//! Every trial of a bias-variance experiment starts the same way: pick `n` inputs
//! uniformly at random from a [`Domain`], evaluate the [`TargetFunction`] there, and add
//! independent noise from a [`NoiseModel`]:
//!
//! ```math
//! xᵢ ~ U[low, high)
//! yᵢ = f(xᵢ) + εᵢ
//! where
//!   εᵢ ~ noise model, independent of xᵢ
//! ```
//!
//! Randomness comes from a caller supplied [`rand::Rng`], so experiments can be made
//! reproducible with [`rng_from_seed`].
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    target::TargetFunction,
    value::{CoordExt, Value},
};

/// Random number generator used throughout the crate
pub type SampleRng = rand::rngs::SmallRng;

/// Creates the sampling RNG.
///
/// With a seed the generator is deterministic. Without one it is seeded from the thread RNG.
pub fn rng_from_seed(seed: Option<u64>) -> SampleRng {
    match seed {
        Some(s) => SampleRng::seed_from_u64(s),
        None => SampleRng::from_rng(&mut rand::rng()),
    }
}

/// A half-open interval `[low, high)` that sample inputs are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain<T: Value = f64> {
    /// Inclusive lower bound
    pub low: T,

    /// Exclusive upper bound for sampling, inclusive for evaluation grids
    pub high: T,
}
impl<T: Value> Domain<T> {
    /// Creates a new domain.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDomain`] unless both bounds are finite and `low < high`.
    ///
    /// # Example
    /// ```
    /// # use biasvar::sample::Domain;
    /// let domain = Domain::new(0.0, 2.0).unwrap();
    /// assert_eq!(domain.linspace(3), vec![0.0, 1.0, 2.0]);
    /// assert!(Domain::new(1.0, 1.0).is_err());
    /// ```
    pub fn new(low: T, high: T) -> Result<Self> {
        let finite = num_traits::float::FloatCore::is_finite(low)
            && num_traits::float::FloatCore::is_finite(high);
        if !finite || low >= high {
            return Err(Error::InvalidDomain {
                low: low.to_string(),
                high: high.to_string(),
            });
        }
        Ok(Self { low, high })
    }

    /// Re-checks the bounds of a domain that was built without [`Domain::new`], such as a deserialized one.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDomain`] if the bounds are unusable.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.low, self.high).map(|_| ())
    }

    /// Checks whether `x` lies in `[low, high]`
    pub fn contains(&self, x: T) -> bool {
        x >= self.low && x <= self.high
    }

    /// `high - low`
    pub fn width(&self) -> T {
        self.high - self.low
    }

    /// `n` evenly spaced points from `low` to `high`, both ends included.
    ///
    /// A single point is placed at the midpoint. `n = 0` gives an empty grid.
    pub fn linspace(&self, n: usize) -> Vec<T> {
        match n {
            0 => vec![],
            1 => vec![self.low + self.width() / T::two()],
            _ => {
                let step = self.width() / T::from_positive_int(n - 1);
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.high
                        } else {
                            self.low + step * T::from_positive_int(i)
                        }
                    })
                    .collect()
            }
        }
    }

    /// The domain as an inclusive range, for building a basis.
    pub fn range(&self) -> std::ops::RangeInclusive<T> {
        self.low..=self.high
    }
}
impl Default for Domain<f64> {
    /// `[0, 1)`
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }
}

/// Distribution of the observation noise `ε` added to each target value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NoiseModel {
    /// Noise-free observations
    None,

    /// Gaussian noise.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// ```math
    /// ε ~ N(0, std_dev²)
    /// Var(ε) = std_dev²
    /// ```
    /// </div>
    Gaussian {
        /// Standard deviation of the noise
        std_dev: f64,
    },

    /// Uniform noise.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// ```math
    /// ε ~ U(−half_width, +half_width)
    /// Var(ε) = half_width² / 3
    /// ```
    /// </div>
    Uniform {
        /// Largest possible deviation from the true value
        half_width: f64,
    },
}
impl Default for NoiseModel {
    /// Gaussian with a standard deviation of 0.3
    fn default() -> Self {
        NoiseModel::Gaussian { std_dev: 0.3 }
    }
}
impl NoiseModel {
    /// Gaussian noise with the given standard deviation.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNoise`] if `std_dev` is negative or not finite.
    pub fn gaussian(std_dev: f64) -> Result<Self> {
        let model = NoiseModel::Gaussian { std_dev };
        model.validate()?;
        Ok(model)
    }

    /// Uniform noise on `[-half_width, half_width]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNoise`] if `half_width` is negative or not finite.
    pub fn uniform(half_width: f64) -> Result<Self> {
        let model = NoiseModel::Uniform { half_width };
        model.validate()?;
        Ok(model)
    }

    /// Checks that the noise parameters are usable.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNoise`] for negative or non-finite parameters.
    pub fn validate(&self) -> Result<()> {
        let (name, value) = match self {
            NoiseModel::None => return Ok(()),
            NoiseModel::Gaussian { std_dev } => ("std_dev", *std_dev),
            NoiseModel::Uniform { half_width } => ("half_width", *half_width),
        };
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidNoise(format!(
                "{name} must be finite and non-negative, got {value}"
            )))
        }
    }

    /// Variance of the noise: the irreducible error no model can remove.
    pub fn variance(&self) -> f64 {
        match self {
            NoiseModel::None => 0.0,
            NoiseModel::Gaussian { std_dev } => std_dev * std_dev,
            NoiseModel::Uniform { half_width } => half_width * half_width / 3.0,
        }
    }

    fn sampler(&self) -> Result<NoiseSampler> {
        self.validate()?;
        Ok(match *self {
            NoiseModel::Gaussian { std_dev } if std_dev > 0.0 => NoiseSampler::Gaussian(
                Normal::new(0.0, std_dev).map_err(|e| Error::InvalidNoise(e.to_string()))?,
            ),
            NoiseModel::Uniform { half_width } if half_width > 0.0 => NoiseSampler::Uniform(
                Uniform::new_inclusive(-half_width, half_width)
                    .map_err(|e| Error::InvalidNoise(e.to_string()))?,
            ),
            _ => NoiseSampler::Silent,
        })
    }
}
impl std::fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoiseModel::None => write!(f, "none"),
            NoiseModel::Gaussian { std_dev } => write!(f, "N(0, {std_dev}²)"),
            NoiseModel::Uniform { half_width } => write!(f, "U(-{half_width}, {half_width})"),
        }
    }
}

enum NoiseSampler {
    Silent,
    Gaussian(Normal<f64>),
    Uniform(Uniform<f64>),
}
impl NoiseSampler {
    fn draw<T: Value, R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T> {
        match self {
            NoiseSampler::Silent => Ok(T::zero()),
            NoiseSampler::Gaussian(d) => T::try_cast(d.sample(rng)),
            NoiseSampler::Uniform(d) => T::try_cast(d.sample(rng)),
        }
    }
}

/// A set of noisy observations, together with the noise-free values they were drawn around.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T: Value = f64> {
    points: Vec<(T, T)>,
    y_true: Vec<T>,
}
impl<T: Value> Sample<T> {
    /// The observed `(x, y)` points
    pub fn points(&self) -> &[(T, T)] {
        &self.points
    }

    /// Consumes the sample, returning the observed points
    pub fn into_points(self) -> Vec<(T, T)> {
        self.points
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The sampled inputs
    pub fn x(&self) -> Vec<T> {
        self.points.x()
    }

    /// The noise-free values `f(xᵢ)`
    pub fn noise_free(&self) -> &[T] {
        &self.y_true
    }

    /// Mean squared deviation of the observations from the noise-free values.
    ///
    /// An estimate of the noise variance from this sample alone.
    pub fn observed_noise_variance(&self) -> T {
        if self.points.is_empty() {
            return T::zero();
        }
        let total = self
            .points
            .iter()
            .zip(&self.y_true)
            .fold(T::zero(), |acc, (&(_, y), &t)| acc + Value::powi(y - t, 2));
        total / T::from_positive_int(self.points.len())
    }
}

/// Draws `n` noisy observations of `target` with inputs uniform over `domain`.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// xᵢ ~ U[low, high)
/// yᵢ = f(xᵢ) + εᵢ, εᵢ ~ noise
/// ```
/// Inputs are drawn in `f64` and cast to `T`. A cast that rounds up onto `high` is redrawn.
/// </div>
///
/// # Errors
/// - [`Error::NoData`] if `n` is zero.
/// - [`Error::InvalidDomain`] or [`Error::InvalidNoise`] for unusable parameters.
///
/// # Example
/// ```
/// # use biasvar::{sample::{generate_sample, rng_from_seed, Domain, NoiseModel}, target::Sinusoid};
/// let mut rng = rng_from_seed(Some(42));
/// let domain = Domain::new(0.0, 1.0).unwrap();
/// let sample = generate_sample(&Sinusoid::default(), 20, &domain, &NoiseModel::default(), &mut rng).unwrap();
/// assert_eq!(sample.len(), 20);
/// assert!(sample.x().iter().all(|&x| (0.0..1.0).contains(&x)));
/// ```
pub fn generate_sample<T, F, R>(
    target: &F,
    n: usize,
    domain: &Domain<T>,
    noise: &NoiseModel,
    rng: &mut R,
) -> Result<Sample<T>>
where
    T: Value,
    F: TargetFunction<T> + ?Sized,
    R: Rng + ?Sized,
{
    if n == 0 {
        return Err(Error::NoData);
    }
    domain.validate()?;
    let sampler = noise.sampler()?;

    let low = domain.low.as_f64().ok_or(Error::CastFailed)?;
    let high = domain.high.as_f64().ok_or(Error::CastFailed)?;
    let inputs = Uniform::new(low, high).map_err(|_| Error::InvalidDomain {
        low: low.to_string(),
        high: high.to_string(),
    })?;

    let mut points = Vec::with_capacity(n);
    let mut y_true = Vec::with_capacity(n);
    for _ in 0..n {
        let x = loop {
            let x = T::try_cast(inputs.sample(rng))?;
            if x < domain.high {
                break x;
            }
        };
        let y = target.y(x);
        points.push((x, y + sampler.draw::<T, R>(rng)?));
        y_true.push(y);
    }

    Ok(Sample { points, y_true })
}

/// Draws fresh noisy observations of `target` at fixed inputs.
///
/// Used to build independent test sets on an evaluation grid.
///
/// # Errors
/// Returns [`Error::InvalidNoise`] for unusable noise parameters.
pub fn noisy_targets<T, F, R>(target: &F, xs: &[T], noise: &NoiseModel, rng: &mut R) -> Result<Vec<T>>
where
    T: Value,
    F: TargetFunction<T> + ?Sized,
    R: Rng + ?Sized,
{
    let sampler = noise.sampler()?;
    xs.iter()
        .map(|&x| Ok(target.y(x) + sampler.draw::<T, R>(rng)?))
        .collect()
}
