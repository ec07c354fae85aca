//! Short-range electrostatic attraction between particles.
//!
//! Opposite charges closer than the attraction threshold are nudged toward their shared midpoint.
//! There is no inverse-square law and no effect on velocity; the pull is a fixed fraction of the gap
//! per call.

use crate::body::Particle;
use crate::config::SimConfig;

/// Pull an opposite-charge pair a fixed fraction of the way toward their midpoint.
///
/// The distance is floored at one particle diameter before the threshold test. Same-sign or
/// far-apart pairs are left untouched. Callers apply this once as `(a, b)` and once as `(b, a)`
/// per pair; the second call sees the positions the first one produced.
pub fn attract(a: &mut Particle, b: &mut Particle, config: &SimConfig) {
    let min_distance = 2.0 * config.particle_radius;
    let distance = (b.pos - a.pos).mag().max(min_distance);

    if a.charge.is_opposite(b.charge) && distance < config.attraction_threshold {
        let midpoint = (a.pos + b.pos) * 0.5;
        a.pos += (midpoint - a.pos) * config.attraction_rate;
        b.pos += (midpoint - b.pos) * config.attraction_rate;
    }
}
