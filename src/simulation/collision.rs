// simulation/collision.rs
// Pairwise interaction pass: attraction followed by hard-body separation for every unordered pair.

use super::forces;
use crate::body::Particle;
use crate::config::SimConfig;
use crate::profile_scope;
use ultraviolet::Vec2;

/// Visit every pair (i < j) once in collection order.
///
/// Each pair is attracted twice, `(p_i, p_j)` then `(p_j, p_i)`, and then pushed apart if the two
/// discs overlap. The double attraction call is slightly order dependent and is kept as is.
pub fn resolve_pairs(particles: &mut [Particle], config: &SimConfig) {
    profile_scope!("pairs");
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = particles.split_at_mut(j);
            let p1 = &mut head[i];
            let p2 = &mut tail[0];
            forces::attract(p1, p2, config);
            forces::attract(p2, p1, config);
            separate(p1, p2, config.particle_radius);
        }
    }
}

/// Push two overlapping particles apart along the line joining their centers.
///
/// Each moves by half the overlap, so the pair ends exactly one diameter apart with its midpoint
/// unchanged. Coincident centers give `atan2(0, 0) == 0`: `a` goes toward -X and `b` toward +X.
pub fn separate(a: &mut Particle, b: &mut Particle, radius: f32) {
    let d = b.pos - a.pos;
    let distance = d.mag();
    let min_distance = 2.0 * radius;
    if distance >= min_distance {
        return;
    }
    let overlap = min_distance - distance;
    let angle = d.y.atan2(d.x);
    let push = Vec2::new(angle.cos(), angle.sin()) * (overlap / 2.0);
    a.pos -= push;
    b.pos += push;
}
