// simulation/particles.rs
// Ordered particle collection; owns the charge alternation and id counters.

use crate::body::{ChargeSequence, Particle};
use crate::snapshot::ParticleView;
use ultraviolet::Vec2;

/// Particles in spawn order. Pair iteration and "most recently spawned" both rely on this order.
///
/// The charge sequence and the id counter are never reset by `clear()`: the Nth particle ever
/// spawned gets +q when N is odd and -q when N is even, across clears.
#[derive(Clone, Debug, Default)]
pub struct ParticleCollection {
    particles: Vec<Particle>,
    charges: ChargeSequence,
    spawned: u64,
}

impl ParticleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a particle at rest. No bounds check; the next motion step clamps it.
    pub fn spawn(&mut self, pos: Vec2) -> &Particle {
        self.spawned += 1;
        let charge = self.charges.next_charge();
        self.particles.push(Particle::new(self.spawned, pos, charge));
        &self.particles[self.particles.len() - 1]
    }

    /// Remove every particle and return how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.particles.len();
        self.particles.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Total spawned over the collection's lifetime, including cleared ones.
    pub fn spawned_total(&self) -> u64 {
        self.spawned
    }

    pub fn latest(&self) -> Option<&Particle> {
        self.particles.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn snapshot(&self) -> Vec<ParticleView> {
        self.particles.iter().map(ParticleView::from).collect()
    }
}

impl<'a> IntoIterator for &'a ParticleCollection {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
