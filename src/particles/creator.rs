use crate::config::PathRetention;

use super::{Color, Particle, ParticleStore};

/// Colours handed out to particles in turn.
pub const PALETTE: [Color; 6] = [
    [255, 100, 100],
    [100, 255, 100],
    [100, 100, 255],
    [255, 100, 255],
    [100, 255, 255],
    [255, 255, 100],
];

pub trait ParticleCreator {
    fn create_particle(&mut self) -> Particle;

    fn create_particles(&mut self, n: usize) -> ParticleStore {
        (0..n).map(|_| self.create_particle()).collect()
    }
}

/// Places every particle at the origin, cycling through [`PALETTE`].
#[derive(Clone, Debug)]
pub struct OriginParticleCreator {
    retention: PathRetention,
    next_color: usize,
}

impl OriginParticleCreator {
    #[must_use]
    pub fn new(retention: PathRetention) -> Self {
        Self {
            retention,
            next_color: 0,
        }
    }
}

impl ParticleCreator for OriginParticleCreator {
    fn create_particle(&mut self) -> Particle {
        let color = PALETTE[self.next_color % PALETTE.len()];
        self.next_color += 1;

        Particle::new(color, self.retention)
    }
}
