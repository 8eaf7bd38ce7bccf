use std::{num::NonZeroUsize, time::Duration};

use log::warn;
use thiserror::Error;

use crate::{statistics::VARIANCE_EPSILON, Float};

/// Number of ticks after which a simulation stops advancing.
pub const MAX_STEPS: usize = 10_000;

pub const DEFAULT_PARTICLE_COUNT: usize = 1000;
pub const DEFAULT_MEAN_FREE_PATH: Float = 5.;
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_micros(1);

/// Bin count of the CDF and PDF plots.
pub const PLOT_BIN_COUNT: usize = 100;
/// Bin count of the histogram drawn over the particle paths.
pub const PATH_OVERLAY_BIN_COUNT: usize = 1500;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1, got {count}")]
    ParticleCount { count: usize },
    #[error("mean free path must be finite with a square of at least {min}, got {value}", min = VARIANCE_EPSILON)]
    MeanFreePath { value: Float },
    #[error("invalid distribution parameter: {0}")]
    Distribution(String),
}

/// How a particle picks its next step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalkStrategy {
    /// Exponentially distributed free path, scaled onto a 2-D Gaussian direction.
    #[default]
    FreePath,
    /// Fixed step length `mean_free_path` in a uniformly random direction.
    UniformAngle,
}

impl WalkStrategy {
    /// RMS displacement radius after `step` ticks.
    ///
    /// The free path walk has $E[r^2] = 2 \lambda^2 s$, the uniform angle walk only
    /// $\lambda^2 s$.
    pub fn expected_rms_radius(&self, mean_free_path: Float, step: usize) -> Float {
        let step = step as Float;
        match self {
            WalkStrategy::FreePath => mean_free_path * (2. * step).sqrt(),
            WalkStrategy::UniformAngle => mean_free_path * step.sqrt(),
        }
    }
}

/// How many past positions a particle remembers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathRetention {
    #[default]
    Unbounded,
    /// Keep only the most recent points.
    Capped(NonZeroUsize),
}

/// Parameters of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub mean_free_path: Float,
    /// Pacing hint for the driver. The core never sleeps.
    pub tick_delay: Duration,
    pub walk: WalkStrategy,
    pub path_retention: PathRetention,
    /// Fixed seed for reproducible runs, entropy if `None`.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            mean_free_path: DEFAULT_MEAN_FREE_PATH,
            tick_delay: DEFAULT_TICK_DELAY,
            walk: WalkStrategy::default(),
            path_retention: PathRetention::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn new(particle_count: usize, mean_free_path: Float) -> Self {
        Self {
            particle_count,
            mean_free_path,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_tick_delay(mut self, tick_delay: Duration) -> Self {
        self.tick_delay = tick_delay;
        self
    }

    #[must_use]
    pub fn with_walk(mut self, walk: WalkStrategy) -> Self {
        self.walk = walk;
        self
    }

    #[must_use]
    pub fn with_path_retention(mut self, path_retention: PathRetention) -> Self {
        self.path_retention = path_retention;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Raise the particle count to at least one, like the settings menu does.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        if self.particle_count < 1 {
            warn!("particle count {} clamped to 1", self.particle_count);
            self.particle_count = 1;
        }
        self
    }

    /// The squared mean free path must reach the Rayleigh variance floor, otherwise the
    /// floor would replace the true variance of the first ticks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count < 1 {
            return Err(ConfigError::ParticleCount {
                count: self.particle_count,
            });
        }
        let lambda = self.mean_free_path;
        if !lambda.is_finite() || lambda <= 0. || lambda * lambda < VARIANCE_EPSILON {
            return Err(ConfigError::MeanFreePath {
                value: self.mean_free_path,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.particle_count, 1000);
        assert_eq!(config.mean_free_path, 5.);
        assert_eq!(config.tick_delay, Duration::from_micros(1));
        assert_eq!(config.walk, WalkStrategy::FreePath);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!(
            SimulationConfig::new(0, 5.).validate(),
            Err(ConfigError::ParticleCount { count: 0 })
        );
        for value in [0., -1., 1e-12, 1e-3, 3e-3, Float::NAN, Float::INFINITY] {
            assert!(matches!(
                SimulationConfig::new(10, value).validate(),
                Err(ConfigError::MeanFreePath { .. })
            ));
        }
    }

    #[test]
    fn test_smallest_mean_free_path() {
        // one tick already reaches the variance floor
        for value in [3.2e-3, 1e-2, 1.] {
            assert!(SimulationConfig::new(10, value).validate().is_ok());
            assert!(value * value >= VARIANCE_EPSILON);
        }
    }

    #[test]
    fn test_clamped() {
        let config = SimulationConfig::new(0, 5.).clamped();
        assert_eq!(config.particle_count, 1);
        assert!(config.validate().is_ok());

        let config = SimulationConfig::new(42, 5.).clamped();
        assert_eq!(config.particle_count, 42);
    }

    #[test]
    fn test_expected_rms_radius() {
        assert_abs_diff_eq!(
            WalkStrategy::FreePath.expected_rms_radius(5., 100),
            5. * 200f64.sqrt(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            WalkStrategy::UniformAngle.expected_rms_radius(5., 100),
            50.,
            epsilon = 1e-12
        );
    }
}
