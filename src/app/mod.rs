use crate::error::SimError;
use crate::init_config::{InitConfig, OutputMode};
use crate::simulation::Simulation;

pub mod presenter;
pub mod script;
pub mod simulation_loop;
pub mod spawn;

#[cfg(test)]
mod tests;

use presenter::{ConsoleRenderer, JsonRenderer, Presenter};
use script::ScriptedInput;

/// Load the scenario named on the command line (or `scenario.toml`), then run it to completion.
pub fn run() -> Result<(), SimError> {
    let init = match std::env::args().nth(1) {
        Some(path) => {
            eprintln!("[config] loading scenario {}", path);
            InitConfig::load_from_file(path)?
        }
        None => InitConfig::load_default()?,
    };
    let InitConfig {
        simulation: config,
        run,
        particles,
        events,
    } = init;

    let mut simulation = Simulation::with_config(config);
    spawn::add_points(&mut simulation, &particles.points);
    for random in &particles.random {
        spawn::add_random(&mut simulation, random.count, random.seed);
    }
    eprintln!(
        "[sim] starting with {} particles, field {:.2} @ {:.3} rad",
        simulation.particles.len(),
        simulation.field.strength,
        simulation.field.direction
    );

    let (tx, rx) = crossbeam::channel::unbounded();
    let mut input = ScriptedInput::new(events, run.ticks, tx);
    let mut presenter: Box<dyn Presenter> = match run.output {
        OutputMode::Console => Box::new(ConsoleRenderer::new(run.report_every)),
        OutputMode::Json => Box::new(JsonRenderer::new(std::io::stdout().lock())),
    };

    let frames =
        simulation_loop::run_simulation_loop(rx, &mut simulation, &mut input, presenter.as_mut())?;
    eprintln!("[sim] stopped after {} frames", frames);

    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().print_and_clear();

    Ok(())
}
