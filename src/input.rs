// input.rs
// Maps raw mouse/keyboard events from the window layer to simulation commands

use crate::commands::SimCommand;
use crate::config::SimConfig;
use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Weaken the field
    Q,
    /// Strengthen the field
    E,
    Left,
    Right,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    MouseDown { x: f32, y: f32 },
    KeyDown(Key),
    Quit,
}

/// Translate one window event into a command. Unbound keys yield `None`.
///
/// A click on the reset button clears the simulation; any other click spawns a particle there.
pub fn translate(event: InputEvent, config: &SimConfig) -> Option<SimCommand> {
    match event {
        InputEvent::Quit => Some(SimCommand::Quit),
        InputEvent::MouseDown { x, y } => {
            if config.reset_button.contains(Vec2::new(x, y)) {
                Some(SimCommand::ClearAll)
            } else {
                Some(SimCommand::SpawnAt { x, y })
            }
        }
        InputEvent::KeyDown(key) => match key {
            Key::Q => Some(SimCommand::AdjustFieldStrength {
                delta: -config.field_strength_step,
            }),
            Key::E => Some(SimCommand::AdjustFieldStrength {
                delta: config.field_strength_step,
            }),
            Key::Left => Some(SimCommand::RotateField {
                delta: -config.field_rotation_step,
            }),
            Key::Right => Some(SimCommand::RotateField {
                delta: config.field_rotation_step,
            }),
            Key::Other => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn click_on_reset_button_clears() {
        let cfg = SimConfig::default();
        let c = cfg.reset_button.center();
        assert_eq!(
            translate(InputEvent::MouseDown { x: c.x, y: c.y }, &cfg),
            Some(SimCommand::ClearAll)
        );
        assert_eq!(
            translate(InputEvent::MouseDown { x: 120.0, y: 80.0 }, &cfg),
            Some(SimCommand::SpawnAt { x: 120.0, y: 80.0 })
        );
    }

    #[test]
    fn keys_map_to_field_steps() {
        let cfg = SimConfig::default();
        assert_eq!(
            translate(InputEvent::KeyDown(Key::Q), &cfg),
            Some(SimCommand::AdjustFieldStrength { delta: -0.1 })
        );
        assert_eq!(
            translate(InputEvent::KeyDown(Key::E), &cfg),
            Some(SimCommand::AdjustFieldStrength { delta: 0.1 })
        );
        assert_eq!(
            translate(InputEvent::KeyDown(Key::Right), &cfg),
            Some(SimCommand::RotateField { delta: PI / 16.0 })
        );
        assert_eq!(
            translate(InputEvent::KeyDown(Key::Left), &cfg),
            Some(SimCommand::RotateField { delta: -PI / 16.0 })
        );
        assert_eq!(translate(InputEvent::KeyDown(Key::Other), &cfg), None);
        assert_eq!(translate(InputEvent::Quit, &cfg), Some(SimCommand::Quit));
    }
}
