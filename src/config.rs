// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

// ====================
// Window/Layout
// ====================
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
/// Top-left corner and size of the simulation box, in window coordinates.
pub const BOX_X: f32 = 50.0;
pub const BOX_Y: f32 = 50.0;
pub const BOX_WIDTH: f32 = 700.0;
pub const BOX_HEIGHT: f32 = 450.0;
/// Reset button sits centered under the box.
pub const RESET_BUTTON_WIDTH: f32 = 100.0;
pub const RESET_BUTTON_HEIGHT: f32 = 30.0;
pub const RESET_BUTTON_X: f32 = WINDOW_WIDTH / 2.0 - RESET_BUTTON_WIDTH / 2.0;
pub const RESET_BUTTON_Y: f32 = BOX_Y + BOX_HEIGHT + 20.0;

// ====================
// Particle Parameters
// ====================
pub const PARTICLE_RADIUS: f32 = 11.0;
/// Magnitude q of the two charges handed out by the alternation sequence.
pub const CHARGE_MAGNITUDE: f32 = 2.0;

// ====================
// Field Parameters
// ====================
pub const INITIAL_FIELD_STRENGTH: f32 = 3.0;
pub const INITIAL_FIELD_DIRECTION: f32 = 0.0;
pub const FIELD_STRENGTH_STEP: f32 = 0.1; // per keypress
pub const FIELD_ROTATION_STEP: f32 = std::f32::consts::PI / 16.0; // per keypress

// ====================
// Motion/Interaction Parameters
// ====================
// Tuned for one tick per FRAME_DELAY_MS frame; not scaled by elapsed time.
pub const VELOCITY_DAMPING: f32 = 0.8;
pub const ATTRACTION_RATE: f32 = 0.03;
pub const ATTRACTION_THRESHOLD: f32 = 50.0;
/// Scale from charge value to the plotted "electric force" signal.
pub const ELECTRIC_SIGNAL_SCALE: f32 = 0.1;

// ====================
// Loop/History
// ====================
pub const FRAME_DELAY_MS: u64 = 30;
pub const HISTORY_LEN: usize = 100;

/// Axis-aligned rectangle in window coordinates (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open hit test, matching how a button hit-box treats its right/bottom edge.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Simulation box particles are clamped into.
    pub bounds: Rect,
    /// Reserved UI region; spawn commands landing here are ignored.
    pub reset_button: Rect,
    pub particle_radius: f32,
    pub charge_magnitude: f32,
    pub initial_field_strength: f32,
    pub initial_field_direction: f32,
    pub field_strength_step: f32,
    pub field_rotation_step: f32,
    pub velocity_damping: f32,
    pub attraction_rate: f32,
    pub attraction_threshold: f32,
    pub electric_signal_scale: f32,
    /// Capacity of each plotted time series
    pub history_len: usize,
    /// Wall-clock pause between ticks; 0 runs as fast as possible
    pub frame_delay_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounds: Rect::new(BOX_X, BOX_Y, BOX_WIDTH, BOX_HEIGHT),
            reset_button: Rect::new(
                RESET_BUTTON_X,
                RESET_BUTTON_Y,
                RESET_BUTTON_WIDTH,
                RESET_BUTTON_HEIGHT,
            ),
            particle_radius: PARTICLE_RADIUS,
            charge_magnitude: CHARGE_MAGNITUDE,
            initial_field_strength: INITIAL_FIELD_STRENGTH,
            initial_field_direction: INITIAL_FIELD_DIRECTION,
            field_strength_step: FIELD_STRENGTH_STEP,
            field_rotation_step: FIELD_ROTATION_STEP,
            velocity_damping: VELOCITY_DAMPING,
            attraction_rate: ATTRACTION_RATE,
            attraction_threshold: ATTRACTION_THRESHOLD,
            electric_signal_scale: ELECTRIC_SIGNAL_SCALE,
            history_len: HISTORY_LEN,
            frame_delay_ms: FRAME_DELAY_MS,
        }
    }
}

impl SimConfig {
    /// Lowest allowed particle center on each axis.
    pub fn min_center(&self) -> Vec2 {
        self.bounds.min() + Vec2::broadcast(self.particle_radius)
    }

    /// Highest allowed particle center on each axis.
    pub fn max_center(&self) -> Vec2 {
        self.bounds.max() - Vec2::broadcast(self.particle_radius)
    }

    /// Reject values the physics loop cannot honor.
    pub fn validate(&self) -> Result<(), String> {
        if self.particle_radius <= 0.0 || self.particle_radius.is_nan() {
            return Err(format!("particle_radius must be positive, got {}", self.particle_radius));
        }
        if self.bounds.width < 2.0 * self.particle_radius
            || self.bounds.height < 2.0 * self.particle_radius
        {
            return Err(format!(
                "bounds {}x{} cannot fit a particle of radius {}",
                self.bounds.width, self.bounds.height, self.particle_radius
            ));
        }
        if self.history_len == 0 {
            return Err("history_len must be at least 1".to_string());
        }
        if self.initial_field_strength < 0.0 {
            return Err(format!(
                "initial_field_strength must not be negative, got {}",
                self.initial_field_strength
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_button_sits_below_the_box() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.reset_button, Rect::new(350.0, 520.0, 100.0, 30.0));
        assert!(cfg.reset_button.y > cfg.bounds.max().y);
    }

    #[test]
    fn rect_hit_test_is_half_open() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(14.9, 14.9)));
        assert!(!r.contains(Vec2::new(15.0, 12.0)));
        assert!(!r.contains(Vec2::new(9.9, 12.0)));
    }

    #[test]
    fn center_limits_are_inset_by_radius() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.min_center(), Vec2::new(61.0, 61.0));
        assert_eq!(cfg.max_center(), Vec2::new(739.0, 489.0));
    }

    #[test]
    fn validate_rejects_box_smaller_than_a_particle() {
        let mut cfg = SimConfig::default();
        cfg.bounds = Rect::new(0.0, 0.0, 10.0, 100.0);
        assert!(cfg.validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
    }
}
