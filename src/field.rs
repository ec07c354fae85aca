//! Uniform, user-steerable pseudo-magnetic field.
//!
//! The field has a strength (floored at zero) and a direction in radians that is left unbounded;
//! trigonometry wraps it implicitly.

use crate::body::Charge;
use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldModel {
    pub strength: f32,
    pub direction: f32,
}

impl Default for FieldModel {
    fn default() -> Self {
        Self::new(
            crate::config::INITIAL_FIELD_STRENGTH,
            crate::config::INITIAL_FIELD_DIRECTION,
        )
    }
}

impl FieldModel {
    pub fn new(strength: f32, direction: f32) -> Self {
        Self {
            strength: strength.max(0.0),
            direction,
        }
    }

    pub fn increase_strength(&mut self, delta: f32) {
        self.adjust_strength(delta);
    }

    pub fn decrease_strength(&mut self, delta: f32) {
        self.adjust_strength(-delta);
    }

    /// Add a signed delta, flooring the result at zero.
    pub fn adjust_strength(&mut self, delta: f32) {
        self.strength = (self.strength + delta).max(0.0);
    }

    pub fn rotate(&mut self, delta_angle: f32) {
        self.direction += delta_angle;
    }

    /// Force on a particle of the given charge sign.
    ///
    /// This is `strength` along `direction + π/2`, negated for negative charges. The fixed 90°
    /// rotation models a gyrating Lorentz-style deflection rather than a literal v×B computation;
    /// it does not depend on the particle's velocity and defines all observable motion.
    pub fn force_for(&self, charge: Charge) -> Vec2 {
        let angle = self.direction + std::f32::consts::FRAC_PI_2;
        Vec2::new(angle.cos(), angle.sin()) * self.strength * charge.sign()
    }

    /// Unit vector along the field direction, for the on-screen indicator.
    pub fn indicator(&self) -> Vec2 {
        Vec2::new(self.direction.cos(), self.direction.sin())
    }
}
