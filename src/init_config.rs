// init_config.rs
// Loads a scenario: configuration overrides, initial particles, and scheduled input

use crate::commands::SimCommand;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::input::InputEvent;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SCENARIO_PATH: &str = "scenario.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    /// Any subset of `SimConfig`; omitted fields keep their defaults.
    #[serde(default)]
    pub simulation: SimConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub particles: ParticlesConfig,
    #[serde(default)]
    pub events: Vec<ScheduledEvent>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum OutputMode {
    /// One summary line every `report_every` ticks
    #[default]
    Console,
    /// One JSON snapshot per tick on stdout
    Json,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Stop after this many ticks. Without it the run lasts until a quit event.
    pub ticks: Option<usize>,
    pub output: OutputMode,
    pub report_every: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: Some(300),
            output: OutputMode::Console,
            report_every: 30,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParticlesConfig {
    #[serde(default)]
    pub points: Vec<PointConfig>,
    #[serde(default)]
    pub random: Vec<RandomConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PointConfig {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RandomConfig {
    pub count: usize,
    /// Optional seed for reproducible placement
    pub seed: Option<u64>,
}

/// Input delivered before the given tick runs. Either a ready command or a raw window event.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduledEvent {
    pub tick: usize,
    #[serde(default)]
    pub command: Option<SimCommand>,
    #[serde(default)]
    pub input: Option<InputEvent>,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load `scenario.toml` from the working directory, or fall back to the built-in defaults.
    pub fn load_default() -> Result<Self, SimError> {
        if Path::new(DEFAULT_SCENARIO_PATH).exists() {
            Self::load_from_file(DEFAULT_SCENARIO_PATH)
        } else {
            eprintln!("[config] {} not found, using defaults", DEFAULT_SCENARIO_PATH);
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self, SimError> {
        let config: InitConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.simulation.validate().map_err(SimError::Invalid)?;
        if self.run.ticks == Some(0) {
            return Err(SimError::Invalid("run.ticks must be at least 1".to_string()));
        }
        if self.run.report_every == 0 {
            return Err(SimError::Invalid("run.report_every must be at least 1".to_string()));
        }
        for event in &self.events {
            if event.command.is_some() == event.input.is_some() {
                return Err(SimError::Invalid(format!(
                    "event at tick {} needs exactly one of `command` or `input`",
                    event.tick
                )));
            }
        }
        Ok(())
    }
}
