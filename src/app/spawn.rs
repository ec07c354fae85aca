use crate::commands::{self, SimCommand};
use crate::config::SimConfig;
use crate::init_config::PointConfig;
use crate::simulation::Simulation;
use ultraviolet::Vec2;

/// Uniform positions whose discs fit inside the box.
pub fn random_positions(count: usize, config: &SimConfig, rng: &mut fastrand::Rng) -> Vec<Vec2> {
    let min = config.min_center();
    let span = config.max_center() - min;
    (0..count)
        .map(|_| min + Vec2::new(rng.f32() * span.x, rng.f32() * span.y))
        .collect()
}

/// Spawn through the command path so the reset-button rule still applies.
pub fn add_points(simulation: &mut Simulation, points: &[PointConfig]) {
    for point in points {
        let _ = commands::process_command(SimCommand::SpawnAt { x: point.x, y: point.y }, simulation);
    }
}

pub fn add_random(simulation: &mut Simulation, count: usize, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    for pos in random_positions(count, &simulation.config, &mut rng) {
        let _ = commands::process_command(SimCommand::SpawnAt { x: pos.x, y: pos.y }, simulation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_positions_stay_inside_inset_box() {
        let cfg = SimConfig::default();
        let mut rng = fastrand::Rng::with_seed(42);
        let (min, max) = (cfg.min_center(), cfg.max_center());
        for p in random_positions(500, &cfg, &mut rng) {
            assert!(p.x >= min.x && p.x <= max.x);
            assert!(p.y >= min.y && p.y <= max.y);
        }
    }

    #[test]
    fn seeded_placement_is_reproducible() {
        let mut a = Simulation::new();
        let mut b = Simulation::new();
        add_random(&mut a, 10, Some(3));
        add_random(&mut b, 10, Some(3));
        assert_eq!(a.snapshot().particles, b.snapshot().particles);
        assert_eq!(a.particles.len(), 10);
    }
}
