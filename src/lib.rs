//! Simulation of many independent 2-D random walkers, with the empirical
//! distribution of their displacement radius compared against the Rayleigh
//! distribution.
//!
//! ```
//! use random_walks::{HistogramMode, Simulation, SimulationConfig, PLOT_BIN_COUNT};
//!
//! let mut sim = Simulation::new(SimulationConfig::new(500, 5.).with_seed(1)).unwrap();
//! sim.simulate(50);
//!
//! let sample = sim.compute_histogram(PLOT_BIN_COUNT, HistogramMode::Cdf);
//! assert_eq!(sample.len(), PLOT_BIN_COUNT);
//! ```

pub mod clock;
pub mod config;
pub mod csv;
pub mod particles;
pub mod random;
mod simulation;
pub mod statistics;
pub mod walk;

pub type Float = f64;

pub use clock::ClockState;
pub use config::{
    ConfigError, PathRetention, SimulationConfig, WalkStrategy, MAX_STEPS,
    PATH_OVERLAY_BIN_COUNT, PLOT_BIN_COUNT,
};
pub use particles::Particle;
pub use simulation::Simulation;
pub use statistics::{compute_histogram, HistogramBin, HistogramMode, HistogramSample};
