// app/presenter.rs
// Consumers of per-tick snapshots standing in for the drawing and charting layers

use std::io::Write;

use crate::error::SimError;
use crate::snapshot::Snapshot;

pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot) -> Result<(), SimError>;

    /// Called once after the loop stops.
    fn finish(&mut self, _snapshot: &Snapshot) -> Result<(), SimError> {
        Ok(())
    }
}

/// Prints a one-line summary every `report_every` frames.
pub struct ConsoleRenderer {
    report_every: usize,
}

impl ConsoleRenderer {
    pub fn new(report_every: usize) -> Self {
        Self {
            report_every: report_every.max(1),
        }
    }

    pub fn summary(snapshot: &Snapshot) -> String {
        let latest = match snapshot.latest() {
            Some(p) => format!(
                "latest #{} {} at ({:.1}, {:.1})",
                p.id,
                p.charge.glyph(),
                p.pos.x,
                p.pos.y
            ),
            None => "no particles".to_string(),
        };
        format!(
            "[sim] frame {:>5} | {:>3} particles | field {:.2} @ {:.3} rad | {} | lorentz {:.3} | electric {:.3}",
            snapshot.frame,
            snapshot.particles.len(),
            snapshot.field.strength,
            snapshot.field.direction,
            latest,
            snapshot.lorentz_force.last().copied().unwrap_or(0.0),
            snapshot.electric_force.last().copied().unwrap_or(0.0),
        )
    }
}

impl Presenter for ConsoleRenderer {
    fn present(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        if snapshot.frame % self.report_every == 0 {
            println!("{}", Self::summary(snapshot));
        }
        Ok(())
    }

    fn finish(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        println!("{}", Self::summary(snapshot));
        Ok(())
    }
}

/// Streams every snapshot as one JSON object per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonRenderer<W> {
    fn present(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self, _snapshot: &Snapshot) -> Result<(), SimError> {
        self.out.flush()?;
        Ok(())
    }
}
