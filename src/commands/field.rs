use crate::simulation::Simulation;

pub fn handle_adjust_strength(simulation: &mut Simulation, delta: f32) {
    simulation.field.adjust_strength(delta);
    #[cfg(feature = "command_debug")]
    eprintln!("[command] field strength now {:.2}", simulation.field.strength);
}

pub fn handle_rotate(simulation: &mut Simulation, delta: f32) {
    simulation.field.rotate(delta);
    #[cfg(feature = "command_debug")]
    eprintln!("[command] field direction now {:.3} rad", simulation.field.direction);
}
