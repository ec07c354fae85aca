// app/script.rs
// Scripted input source: replays scheduled scenario events through the command channel

use crossbeam::channel::Sender;

use crate::commands::SimCommand;
use crate::config::SimConfig;
use crate::init_config::ScheduledEvent;
use crate::input;

/// Something that produces commands before each tick, e.g. a window's event pump.
pub trait InputSource {
    /// Called once per frame, before the command queue is drained.
    fn poll(&mut self, frame: usize, config: &SimConfig);
}

pub struct ScriptedInput {
    events: Vec<ScheduledEvent>,
    cursor: usize,
    stop_after: Option<usize>,
    tx: Sender<SimCommand>,
}

impl ScriptedInput {
    /// `stop_after` ticks in total; a `Quit` is sent before the last one runs.
    pub fn new(mut events: Vec<ScheduledEvent>, stop_after: Option<usize>, tx: Sender<SimCommand>) -> Self {
        events.sort_by_key(|e| e.tick);
        Self {
            events,
            cursor: 0,
            stop_after,
            tx,
        }
    }

    fn send(&self, cmd: SimCommand) {
        if let Err(e) = self.tx.send(cmd) {
            eprintln!("[input] command queue closed, dropping {:?}", e.into_inner());
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, frame: usize, config: &SimConfig) {
        while let Some(event) = self.events.get(self.cursor) {
            if event.tick > frame {
                break;
            }
            let cmd = match (&event.command, event.input) {
                (Some(cmd), _) => Some(cmd.clone()),
                (None, Some(raw)) => input::translate(raw, config),
                (None, None) => None,
            };
            self.cursor += 1;
            if let Some(cmd) = cmd {
                self.send(cmd);
            }
        }
        if let Some(limit) = self.stop_after {
            if frame + 1 >= limit {
                self.send(SimCommand::Quit);
            }
        }
    }
}
