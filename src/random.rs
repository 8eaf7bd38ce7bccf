use std::f64::consts::TAU;

use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Exp, StandardNormal, Uniform};

use crate::{config::ConfigError, Float};

/// Random draws needed to build walk steps.
///
/// Seeded once per run, from system entropy unless a seed is given.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: StdRng,
    free_path_distr: Exp<Float>,
    angle_distr: Uniform<Float>,
}

impl RandomSource {
    /// Create a source whose free paths have mean `mean_free_path`.
    pub fn new(mean_free_path: Float, seed: Option<u64>) -> Result<Self, ConfigError> {
        let rng = match seed {
            Some(seed) => {
                debug!("seeding random source with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("seeding random source from entropy");
                StdRng::from_entropy()
            }
        };

        Self::from_rng(mean_free_path, rng)
    }

    pub fn from_rng(mean_free_path: Float, rng: StdRng) -> Result<Self, ConfigError> {
        if mean_free_path.is_nan() || mean_free_path <= 0. {
            return Err(ConfigError::MeanFreePath {
                value: mean_free_path,
            });
        }
        let free_path_distr = Exp::new(1. / mean_free_path)
            .map_err(|err| ConfigError::Distribution(err.to_string()))?;

        Ok(Self {
            rng,
            free_path_distr,
            angle_distr: Uniform::new(0., TAU),
        })
    }

    /// Exponentially distributed step length with rate `1 / mean_free_path`.
    #[inline]
    pub fn sample_free_path(&mut self) -> Float {
        self.free_path_distr.sample(&mut self.rng)
    }

    /// Standard normal variate.
    #[inline]
    pub fn sample_gaussian(&mut self) -> Float {
        StandardNormal.sample(&mut self.rng)
    }

    /// Uniform angle in $[0, 2\pi)$.
    #[inline]
    pub fn sample_angle(&mut self) -> Float {
        self.angle_distr.sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const N: usize = 100_000;

    #[test]
    fn test_deterministic_seed() {
        let mut source1 = RandomSource::new(5., Some(7)).unwrap();
        let mut source2 = RandomSource::new(5., Some(7)).unwrap();

        for _ in 0..100 {
            assert_eq!(source1.sample_free_path(), source2.sample_free_path());
            assert_eq!(source1.sample_gaussian(), source2.sample_gaussian());
        }
    }

    #[test]
    fn test_free_path_mean() {
        let mut source = RandomSource::new(5., Some(1)).unwrap();
        let samples: Vec<_> = (0..N).map(|_| source.sample_free_path()).collect();

        assert!(samples.iter().all(|&l| l >= 0.));
        let mean = samples.iter().sum::<Float>() / N as Float;
        assert_abs_diff_eq!(mean, 5., epsilon = 0.1);
    }

    #[test]
    fn test_gaussian_moments() {
        let mut source = RandomSource::new(1., Some(2)).unwrap();
        let samples: Vec<_> = (0..N).map(|_| source.sample_gaussian()).collect();

        let mean = samples.iter().sum::<Float>() / N as Float;
        let var = samples.iter().map(|g| (g - mean).powi(2)).sum::<Float>() / N as Float;
        assert_abs_diff_eq!(mean, 0., epsilon = 0.02);
        assert_abs_diff_eq!(var, 1., epsilon = 0.02);
    }

    #[test]
    fn test_angle_range() {
        let mut source = RandomSource::new(1., Some(3)).unwrap();
        for _ in 0..1000 {
            let angle = source.sample_angle();
            assert!((0. ..TAU).contains(&angle));
        }
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(RandomSource::new(0., Some(0)).is_err());
        assert!(RandomSource::new(-1., Some(0)).is_err());
    }
}
