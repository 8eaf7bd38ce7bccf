use std::fmt::Debug;

use nalgebra::Vector2;

use crate::{
    config::WalkStrategy,
    particles::{Particle, ParticleStore},
    random::RandomSource,
    Float,
};

/// A rule for drawing the next step of a particle.
pub trait Walk: Debug + Send + Sync {
    /// Draw one displacement.
    fn step(&self, rng: &mut RandomSource) -> Vector2<Float>;

    /// Move `particle` by one step and append the new position to its path.
    fn advance(&self, particle: &mut Particle, rng: &mut RandomSource) {
        let step = self.step(rng);
        particle.displace(step);
    }

    /// Advance every particle exactly once.
    fn advance_all(&self, particles: &mut ParticleStore, rng: &mut RandomSource) {
        for particle in particles.iter_mut() {
            self.advance(particle, rng);
        }
    }
}

/// Exponential free path $\ell$ times a 2-D standard normal, scaled by $1/\sqrt{2}$:
///
/// $$ (dx, dy) = \frac{\ell}{\sqrt{2}} (g_x, g_y) $$
///
/// Each component has variance $\lambda^2$ per step, so after $s$ steps the
/// displacement radius tends to a Rayleigh distribution with $\sigma^2 = \lambda^2 s$.
/// The length is drawn by the [`RandomSource`], which carries $\lambda$.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreePathWalk;

impl Walk for FreePathWalk {
    fn step(&self, rng: &mut RandomSource) -> Vector2<Float> {
        let free_path = rng.sample_free_path();
        let gx = rng.sample_gaussian();
        let gy = rng.sample_gaussian();

        Vector2::new(gx, gy) * free_path / std::f64::consts::SQRT_2
    }
}

/// Fixed step length in a uniformly random direction.
#[derive(Clone, Copy, Debug)]
pub struct UniformAngleWalk {
    step_length: Float,
}

impl UniformAngleWalk {
    #[must_use]
    pub fn new(step_length: Float) -> Self {
        Self { step_length }
    }
}

impl Walk for UniformAngleWalk {
    fn step(&self, rng: &mut RandomSource) -> Vector2<Float> {
        let angle = rng.sample_angle();
        Vector2::new(angle.cos(), angle.sin()) * self.step_length
    }
}

/// Build the walk for `strategy`.
#[must_use]
pub fn walker(strategy: WalkStrategy, mean_free_path: Float) -> Box<dyn Walk> {
    match strategy {
        WalkStrategy::FreePath => Box::new(FreePathWalk),
        WalkStrategy::UniformAngle => Box::new(UniformAngleWalk::new(mean_free_path)),
    }
}
