// commands.rs
// Commands the input collaborator sends to the simulation, and their handlers

use serde::{Deserialize, Serialize};

pub mod dispatcher;
pub mod field;
pub mod particle;

pub use dispatcher::process_command;

/// One input command, applied at the start of the next tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Spawn a particle, unless the point is inside the reset button.
    SpawnAt { x: f32, y: f32 },
    ClearAll,
    AdjustFieldStrength { delta: f32 },
    RotateField { delta: f32 },
    /// Stop the loop once the current tick has finished.
    Quit,
}
