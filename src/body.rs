// Defines the particle struct (position, velocity, charge, last field force) and the charge
// alternation sequence new particles draw from.

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Charge {
    Positive,
    Negative,
}

impl Charge {
    /// +1.0 or -1.0
    pub fn sign(self) -> f32 {
        match self {
            Charge::Positive => 1.0,
            Charge::Negative => -1.0,
        }
    }

    /// Signed charge value for a given magnitude q.
    pub fn value(self, magnitude: f32) -> f32 {
        self.sign() * magnitude
    }

    pub fn is_opposite(self, other: Charge) -> bool {
        self != other
    }

    /// Glyph drawn on top of the particle.
    pub fn glyph(self) -> char {
        match self {
            Charge::Positive => '+',
            Charge::Negative => '-',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub charge: Charge,
    /// Field force from the latest motion step; drawn as an arrow, never fed back into velocity.
    pub last_force: Vec2,
}

impl Particle {
    pub fn new(id: u64, pos: Vec2, charge: Charge) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::zero(),
            charge,
            last_force: Vec2::zero(),
        }
    }
}

/// Round-robin over [+q, -q]. Lives as long as whoever spawns particles and is not reset by clearing them.
#[derive(Clone, Debug)]
pub struct ChargeSequence {
    sequence: [Charge; 2],
    index: usize,
}

impl Default for ChargeSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl ChargeSequence {
    pub fn new() -> Self {
        Self {
            sequence: [Charge::Positive, Charge::Negative],
            index: 0,
        }
    }

    /// Charge the next spawned particle gets, without advancing.
    pub fn peek(&self) -> Charge {
        self.sequence[self.index]
    }

    pub fn next_charge(&mut self) -> Charge {
        let charge = self.sequence[self.index];
        self.index = (self.index + 1) % self.sequence.len();
        charge
    }
}
