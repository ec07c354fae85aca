// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod collision;
pub mod forces;
pub mod integrator;
pub mod particles;
pub mod simulation;
pub use particles::ParticleCollection;
pub use simulation::*;
