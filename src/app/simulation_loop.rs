use crossbeam::channel::Receiver;
use std::time::Duration;

use super::presenter::Presenter;
use super::script::InputSource;
use crate::commands::SimCommand;
use crate::error::SimError;
use crate::profile_scope;
use crate::simulation::{Simulation, TickOutcome};

/// Single-threaded frame loop: poll input, drain commands, tick, present, wait.
///
/// A tick that runs long simply makes the frame longer; there is no catch-up. Returns the number
/// of frames simulated once a quit command has been processed.
pub fn run_simulation_loop(
    rx: Receiver<SimCommand>,
    simulation: &mut Simulation,
    input: &mut dyn InputSource,
    presenter: &mut dyn Presenter,
) -> Result<usize, SimError> {
    let frame_delay = Duration::from_millis(simulation.config.frame_delay_ms);
    loop {
        input.poll(simulation.frame, &simulation.config);

        let commands: Vec<SimCommand> = rx.try_iter().collect();
        let outcome = simulation.tick(commands);

        {
            profile_scope!("present");
            presenter.present(&simulation.snapshot())?;
        }

        #[cfg(feature = "profiling")]
        crate::PROFILER.lock().end_frame();

        if outcome == TickOutcome::Quit {
            break;
        }
        if !frame_delay.is_zero() {
            std::thread::sleep(frame_delay);
        }
    }
    presenter.finish(&simulation.snapshot())?;
    Ok(simulation.frame)
}
