// Tests for the frame loop, scripted input and presenters

use super::presenter::{ConsoleRenderer, JsonRenderer, Presenter};
use super::script::{InputSource, ScriptedInput};
use super::simulation_loop::run_simulation_loop;
use crate::commands::SimCommand;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::init_config::{InitConfig, ScheduledEvent};
use crate::input::{InputEvent, Key};
use crate::simulation::Simulation;
use crate::snapshot::Snapshot;

#[derive(Default)]
struct Recorder {
    frames: Vec<Snapshot>,
    finished: bool,
}

impl Presenter for Recorder {
    fn present(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        self.frames.push(snapshot.clone());
        Ok(())
    }

    fn finish(&mut self, _snapshot: &Snapshot) -> Result<(), SimError> {
        self.finished = true;
        Ok(())
    }
}

fn fast_sim() -> Simulation {
    let mut config = SimConfig::default();
    config.frame_delay_ms = 0;
    Simulation::with_config(config)
}

fn event(tick: usize, command: SimCommand) -> ScheduledEvent {
    ScheduledEvent {
        tick,
        command: Some(command),
        input: None,
    }
}

#[test]
fn loop_runs_exactly_the_requested_ticks() {
    let mut sim = fast_sim();
    let (tx, rx) = crossbeam::channel::unbounded();
    let mut input = ScriptedInput::new(Vec::new(), Some(12), tx);
    let mut recorder = Recorder::default();
    let frames = run_simulation_loop(rx, &mut sim, &mut input, &mut recorder).expect("loop runs");
    assert_eq!(frames, 12);
    assert_eq!(recorder.frames.len(), 12);
    assert!(recorder.finished);
    assert_eq!(recorder.frames.last().map(|s| s.frame), Some(12));
}

#[test]
fn scheduled_events_apply_before_their_tick() {
    let mut sim = fast_sim();
    let (tx, rx) = crossbeam::channel::unbounded();
    let events = vec![
        event(2, SimCommand::SpawnAt { x: 200.0, y: 200.0 }),
        event(0, SimCommand::SpawnAt { x: 100.0, y: 100.0 }),
        event(4, SimCommand::ClearAll),
    ];
    let mut input = ScriptedInput::new(events, Some(6), tx);
    let mut recorder = Recorder::default();
    run_simulation_loop(rx, &mut sim, &mut input, &mut recorder).expect("loop runs");

    let counts: Vec<usize> = recorder.frames.iter().map(|s| s.particles.len()).collect();
    assert_eq!(counts, vec![1, 1, 2, 2, 0, 0]);
    // Series keep their samples after a clear.
    assert_eq!(recorder.frames[5].lorentz_force.len(), 4);
}

#[test]
fn raw_input_events_go_through_the_keymap() {
    let mut sim = fast_sim();
    let start = sim.field.strength;
    let (tx, rx) = crossbeam::channel::unbounded();
    let events = vec![
        ScheduledEvent { tick: 0, command: None, input: Some(InputEvent::KeyDown(Key::E)) },
        ScheduledEvent { tick: 1, command: None, input: Some(InputEvent::KeyDown(Key::Other)) },
        ScheduledEvent { tick: 1, command: None, input: Some(InputEvent::Quit) },
    ];
    let mut input = ScriptedInput::new(events, None, tx);
    let mut recorder = Recorder::default();
    let frames = run_simulation_loop(rx, &mut sim, &mut input, &mut recorder).expect("loop runs");
    assert_eq!(frames, 2);
    assert!((sim.field.strength - (start + 0.1)).abs() < 1e-5);
}

#[test]
fn scripted_input_sends_quit_before_last_tick() {
    let (tx, rx) = crossbeam::channel::unbounded();
    let mut input = ScriptedInput::new(Vec::new(), Some(3), tx);
    let cfg = SimConfig::default();
    input.poll(0, &cfg);
    input.poll(1, &cfg);
    assert!(rx.try_recv().is_err());
    input.poll(2, &cfg);
    assert_eq!(rx.try_recv().ok(), Some(SimCommand::Quit));
}

#[test]
fn json_renderer_writes_one_line_per_snapshot() {
    let mut sim = fast_sim();
    sim.particles.spawn(ultraviolet::Vec2::new(300.0, 300.0));
    sim.step();
    let mut renderer = JsonRenderer::new(Vec::new());
    renderer.present(&sim.snapshot()).expect("write to vec");
    sim.step();
    renderer.present(&sim.snapshot()).expect("write to vec");
    let out = String::from_utf8(renderer.into_inner()).expect("utf8");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    let parsed: Snapshot = serde_json::from_str(lines[1]).expect("snapshot json");
    assert_eq!(parsed.frame, 2);
    assert_eq!(parsed.particles.len(), 1);
    assert_eq!(parsed.lorentz_force.len(), 2);
}

#[test]
fn console_summary_mentions_latest_particle() {
    let mut sim = fast_sim();
    sim.particles.spawn(ultraviolet::Vec2::new(300.0, 300.0));
    sim.particles.spawn(ultraviolet::Vec2::new(400.0, 300.0));
    sim.step();
    let line = ConsoleRenderer::summary(&sim.snapshot());
    assert!(line.contains("2 particles"));
    assert!(line.contains("latest #2 -"));
}

#[test]
fn default_scenario_runs_end_to_end() {
    let mut init = InitConfig::parse(
        r#"
        [simulation]
        frame_delay_ms = 0

        [run]
        ticks = 40

        [[particles.random]]
        count = 6
        seed = 11

        [[events]]
        tick = 10
        input = { MouseDown = { x = 400.0, y = 535.0 } }
        "#,
    )
    .expect("valid scenario");
    let mut sim = Simulation::with_config(init.simulation.clone());
    super::spawn::add_random(&mut sim, init.particles.random[0].count, init.particles.random[0].seed);
    let (tx, rx) = crossbeam::channel::unbounded();
    let mut input = ScriptedInput::new(std::mem::take(&mut init.events), init.run.ticks, tx);
    let mut recorder = Recorder::default();
    let frames = run_simulation_loop(rx, &mut sim, &mut input, &mut recorder).expect("loop runs");
    assert_eq!(frames, 40);
    // The click at tick 10 lands on the reset button.
    assert_eq!(recorder.frames[9].particles.len(), 6);
    assert!(recorder.frames[10].particles.is_empty());
}
