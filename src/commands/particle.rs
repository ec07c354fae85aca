use crate::simulation::Simulation;
use ultraviolet::Vec2;

pub fn handle_spawn_at(simulation: &mut Simulation, x: f32, y: f32) {
    let pos = Vec2::new(x, y);
    if simulation.config.reset_button.contains(pos) {
        #[cfg(feature = "command_debug")]
        eprintln!("[command] spawn at ({}, {}) hits the reset button, ignored", x, y);
        return;
    }
    let _particle = simulation.particles.spawn(pos);
    #[cfg(feature = "command_debug")]
    eprintln!(
        "[command] spawned particle {} ({:?}) at ({}, {})",
        _particle.id, _particle.charge, x, y
    );
}

pub fn handle_clear_all(simulation: &mut Simulation) {
    let _removed = simulation.particles.clear();
    #[cfg(feature = "command_debug")]
    eprintln!("[command] ClearAll removed {} particles", _removed);
}
