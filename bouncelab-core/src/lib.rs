pub mod config;
pub mod engine;
pub mod integrator;
pub mod runtime;
pub mod spawn;

pub use config::{ConfigError, SimConfig, MAX_PARTICLES};
pub use engine::{Bounds, Particle, World};
pub use integrator::{check_collision, resolve_collision, step};
pub use runtime::{
    build_simulation_context, get_particle_states, run_simulation, step_simulation,
    ParticleState, SimulationContext, SimulationSummary,
};
pub use spawn::{grid_dims, spawn_grid};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
