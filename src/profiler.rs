use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Frames between automatic timing reports.
pub const REPORT_INTERVAL_FRAMES: u64 = 300;

/// Scoped profiler accumulating time per named section across frames.
#[derive(Default)]
pub struct Profiler {
    pub timings: HashMap<&'static str, Duration>,
    pub frames: u64,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(&mut self, guard: &ProfilerGuard) {
        *self.timings.entry(guard.name).or_default() += guard.start.elapsed();
    }

    /// Count a frame and print a report every `REPORT_INTERVAL_FRAMES`.
    pub fn end_frame(&mut self) {
        self.frames += 1;
        if self.frames >= REPORT_INTERVAL_FRAMES {
            self.print_and_clear();
        }
    }

    /// Sections sorted by total time, with the mean time per frame.
    pub fn report_sorted(&self) -> Vec<(&'static str, Duration, Duration)> {
        let frames = self.frames.max(1) as u32;
        let mut v: Vec<_> = self
            .timings
            .iter()
            .map(|(n, d)| (*n, *d, *d / frames))
            .collect();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }

    pub fn clear(&mut self) {
        self.timings.clear();
        self.frames = 0;
    }

    pub fn print_and_clear(&mut self) {
        eprintln!("[profile] {} frames", self.frames);
        for (name, total, per_frame) in self.report_sorted() {
            eprintln!("[profile] {:<12} total {:>12?}  per frame {:>10?}", name, total, per_frame);
        }
        self.clear();
    }
}

pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. Returns a guard that will update the global
/// profiler when dropped.
pub fn start(name: &'static str) -> ProfilerGuard {
    ProfilerGuard { name, start: Instant::now() }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().finish(self);
    }
}

/// Profile the rest of the enclosing scope, only when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}
