// simulation/simulation.rs
// Contains the Simulation struct and the per-tick update (tick, step, snapshot)

use super::collision;
use super::integrator;
use super::particles::ParticleCollection;
use crate::commands::{self, SimCommand};
use crate::config::SimConfig;
use crate::field::FieldModel;
use crate::plotting::ForcePlots;
use crate::profile_scope;
use crate::snapshot::{FieldView, Snapshot};
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// A quit command arrived; the tick still ran to completion.
    Quit,
}

/// The main simulation state and logic for the particle system.
///
/// One tick is one frame. Damping and attraction rate are tuned for the configured frame delay
/// and are not scaled by elapsed time.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub frame: usize,
    pub particles: ParticleCollection,
    pub field: FieldModel,
    pub plots: ForcePlots,
    pub config: SimConfig,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Self {
        Self {
            frame: 0,
            particles: ParticleCollection::new(),
            field: FieldModel::new(config.initial_field_strength, config.initial_field_direction),
            plots: ForcePlots::new(config.history_len),
            config,
        }
    }

    /// Apply queued commands in order, then advance exactly one step.
    pub fn tick<I>(&mut self, queued: I) -> TickOutcome
    where
        I: IntoIterator<Item = SimCommand>,
    {
        let mut outcome = TickOutcome::Continue;
        for cmd in queued {
            if let ControlFlow::Break(()) = commands::process_command(cmd, self) {
                outcome = TickOutcome::Quit;
            }
        }
        self.step();
        outcome
    }

    pub fn step(&mut self) {
        profile_scope!("step");
        {
            profile_scope!("integrate");
            for particle in self.particles.as_mut_slice() {
                integrator::step(particle, &self.field, &self.config);
            }
        }
        collision::resolve_pairs(self.particles.as_mut_slice(), &self.config);
        // Separation can push a wall-pinned particle past the inset box.
        let (min, max) = (self.config.min_center(), self.config.max_center());
        for particle in self.particles.as_mut_slice() {
            integrator::clamp_to_bounds(&mut particle.pos, min, max);
        }
        self.sample_plots();
        self.frame += 1;
    }

    /// Chart samples come from the most recently spawned particle only.
    fn sample_plots(&mut self) {
        if let Some(latest) = self.particles.latest() {
            let lorentz = latest.last_force.mag();
            let electric = latest.charge.value(self.config.charge_magnitude)
                * self.config.electric_signal_scale;
            self.plots.record(lorentz, electric);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            particles: self.particles.snapshot(),
            field: FieldView::from(&self.field),
            lorentz_force: self.plots.lorentz.values(),
            electric_force: self.plots.electric.values(),
        }
    }
}
