pub mod app;
pub mod body;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod init_config;
pub mod input;
pub mod plotting;
pub mod profiler;
pub mod simulation;
pub mod snapshot;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
