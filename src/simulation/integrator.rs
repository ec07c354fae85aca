// simulation/integrator.rs
// Per-particle motion step under the field force, with hard clamping to the box.

use crate::body::Particle;
use crate::config::SimConfig;
use crate::field::FieldModel;
use ultraviolet::Vec2;

/// Advance one particle by one tick.
///
/// Velocity is not integrated from acceleration: it is recomputed from scratch as a damped copy
/// of the current field force, so particles carry no inertia between ticks. The force is kept in
/// `last_force` for drawing.
pub fn step(particle: &mut Particle, field: &FieldModel, config: &SimConfig) {
    let force = field.force_for(particle.charge);
    particle.last_force = force;
    particle.vel = force * config.velocity_damping;
    particle.pos += particle.vel;
    clamp_to_bounds(&mut particle.pos, config.min_center(), config.max_center());
}

/// Hard clamp, not a bounce. Velocity is left alone so a particle pinned to a wall still
/// reports the force pushing it there.
pub fn clamp_to_bounds(pos: &mut Vec2, min: Vec2, max: Vec2) {
    for axis in 0..2 {
        let (p, lo, hi) = if axis == 0 {
            (&mut pos.x, min.x, max.x)
        } else {
            (&mut pos.y, min.y, max.y)
        };
        *p = (*p).max(lo).min(hi);
    }
}
