mod creator;
mod path;

pub use creator::*;
pub use path::*;

use nalgebra::Vector2;

use crate::{config::PathRetention, Float};

/// Colour tag for the renderer, as RGB.
pub type Color = [u8; 3];

/// A single diffusing particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    position: Vector2<Float>,
    path: Path,
    color: Color,
}

impl Particle {
    /// A particle resting at the origin.
    #[must_use]
    pub fn new(color: Color, retention: PathRetention) -> Self {
        let position = Vector2::zeros();
        Self {
            position,
            path: Path::new(position, retention),
            color,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Vector2<Float> {
        &self.position
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Distance from the origin.
    #[must_use]
    pub fn radius(&self) -> Float {
        self.position.norm()
    }

    /// Move by `step` and record the new position.
    pub fn displace(&mut self, step: Vector2<Float>) {
        self.position += step;
        self.path.push(self.position);
    }

    pub fn reset(&mut self) {
        self.position = Vector2::zeros();
        self.path.restart(self.position);
    }
}

/// All particles of a simulation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = &Vector2<Float>> + '_ {
        self.particles.iter().map(Particle::position)
    }

    /// Send every particle back to the origin with a single point path.
    pub fn reset(&mut self) {
        for particle in &mut self.particles {
            particle.reset();
        }
    }
}

impl AsRef<[Particle]> for ParticleStore {
    fn as_ref(&self) -> &[Particle] {
        &self.particles
    }
}

impl FromIterator<Particle> for ParticleStore {
    fn from_iter<T: IntoIterator<Item = Particle>>(iter: T) -> Self {
        Self {
            particles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
