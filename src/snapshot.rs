// snapshot.rs
// Read-only per-tick view handed to drawing and charting collaborators.

use crate::body::{Charge, Particle};
use crate::field::FieldModel;
use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub charge: Charge,
    /// Force arrow to draw from `pos`
    pub last_force: Vec2,
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            pos: p.pos,
            vel: p.vel,
            charge: p.charge,
            last_force: p.last_force,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldView {
    pub strength: f32,
    pub direction: f32,
    /// Unit vector along `direction`
    pub indicator: Vec2,
}

impl From<&FieldModel> for FieldView {
    fn from(field: &FieldModel) -> Self {
        Self {
            strength: field.strength,
            direction: field.direction,
            indicator: field.indicator(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: usize,
    pub particles: Vec<ParticleView>,
    pub field: FieldView,
    /// Oldest first, at most `history_len` values
    pub lorentz_force: Vec<f32>,
    pub electric_force: Vec<f32>,
}

impl Snapshot {
    /// Most recently spawned particle still alive.
    pub fn latest(&self) -> Option<&ParticleView> {
        self.particles.last()
    }
}
