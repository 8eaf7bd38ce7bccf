use log::{debug, info, trace};
use nalgebra::Vector2;

use crate::{
    clock::{ClockState, SimulationClock},
    config::{ConfigError, SimulationConfig, MAX_STEPS},
    particles::{OriginParticleCreator, Particle, ParticleCreator, ParticleStore, Path},
    random::RandomSource,
    statistics::{compute_histogram, HistogramMode, HistogramSample},
    walk::{walker, Walk},
    Float,
};

/// A population of random walkers together with its clock.
///
/// All commands run synchronously. Readers see the state between ticks only.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    particles: ParticleStore,
    clock: SimulationClock,
    rng: RandomSource,
    walk: Box<dyn Walk>,
}

impl Simulation {
    /// Set up `config.particle_count` particles at the origin.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_max_steps(config, MAX_STEPS)
    }

    /// Like [`Simulation::new`], with a custom step ceiling.
    pub fn with_max_steps(
        config: SimulationConfig,
        max_steps: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            "new simulation: {} particles, mean free path {}, {:?} walk",
            config.particle_count, config.mean_free_path, config.walk
        );

        let rng = RandomSource::new(config.mean_free_path, config.seed)?;
        let walk = walker(config.walk, config.mean_free_path);
        let particles = OriginParticleCreator::new(config.path_retention)
            .create_particles(config.particle_count);

        Ok(Self {
            config,
            particles,
            clock: SimulationClock::new(max_steps),
            rng,
            walk,
        })
    }

    /// Advance every particle by one step, unless paused or finished.
    pub fn tick(&mut self) {
        if !self.clock.is_running() {
            return;
        }

        self.walk.advance_all(&mut self.particles, &mut self.rng);
        self.clock.tick();
        trace!("tick {}", self.clock.current_step());
    }

    /// Run up to `num_ticks` ticks. Returns how many advanced the simulation.
    pub fn simulate(&mut self, num_ticks: usize) -> usize {
        let mut done = 0;
        while done < num_ticks && self.clock.is_running() {
            self.tick();
            done += 1;
        }
        done
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
    }

    /// Bring every particle back to the origin and restart the clock.
    pub fn reset(&mut self) {
        self.particles.reset();
        self.clock.reset();
        info!("simulation reset");
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    /// Position and path of every particle.
    pub fn snapshot_particles(
        &self,
    ) -> impl ExactSizeIterator<Item = (&Vector2<Float>, &Path)> + '_ {
        self.particles.iter().map(|p| (p.position(), p.path()))
    }

    #[must_use]
    pub fn current_step(&self) -> usize {
        self.clock.current_step()
    }

    #[must_use]
    pub fn state(&self) -> ClockState {
        self.clock.state()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    /// Histogram of the current particle distances, see [`compute_histogram`].
    #[must_use]
    pub fn compute_histogram(&self, bin_count: usize, mode: HistogramMode) -> HistogramSample {
        compute_histogram(
            self.particles.positions(),
            self.config.mean_free_path,
            self.clock.current_step(),
            bin_count,
            mode,
        )
    }
}
