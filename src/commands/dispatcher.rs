use crate::simulation::Simulation;
use std::ops::ControlFlow;

use super::{field, particle, SimCommand};

/// Process a single `SimCommand` by delegating to the appropriate handler.
///
/// Returns `Break` for `Quit`; the caller finishes the current tick before stopping.
pub fn process_command(cmd: SimCommand, simulation: &mut Simulation) -> ControlFlow<()> {
    #[cfg(feature = "command_debug")]
    eprintln!("[command] frame {}: {:?}", simulation.frame, cmd);

    match cmd {
        SimCommand::SpawnAt { x, y } => {
            particle::handle_spawn_at(simulation, x, y);
        }
        SimCommand::ClearAll => {
            particle::handle_clear_all(simulation);
        }
        SimCommand::AdjustFieldStrength { delta } => {
            field::handle_adjust_strength(simulation, delta);
        }
        SimCommand::RotateField { delta } => {
            field::handle_rotate(simulation, delta);
        }
        SimCommand::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}
