use crate::config::{ConfigError, SimConfig};
use crate::engine::World;
use crate::integrator::step;
use crate::spawn::spawn_grid;
use glam::Vec2;

/// Snapshot of a single particle for rendering or inspection
#[derive(Debug, Clone)]
pub struct ParticleState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Final result of a headless run
#[derive(Debug)]
pub struct SimulationSummary {
    pub steps: usize,
    pub states: Vec<ParticleState>,
}

/// Live simulation state owned by the driving loop
#[derive(Debug)]
pub struct SimulationContext {
    pub world: World,
    pub config: SimConfig,
    pub current_step: u64,
}

/// Validate a configuration and build the world it describes
pub fn build_simulation_context(config: SimConfig) -> Result<SimulationContext, ConfigError> {
    config.validate()?;

    let particles = spawn_grid(&config);
    let world = World::new(
        particles,
        config.bounds,
        config.gravity,
        config.restitution,
    );

    Ok(SimulationContext {
        world,
        config,
        current_step: 0,
    })
}

/// Advance the simulation by one fixed timestep
pub fn step_simulation(ctx: &mut SimulationContext) {
    step(&mut ctx.world, ctx.config.timestep);
    ctx.current_step += 1;
}

/// Snapshot every particle's current state
pub fn get_particle_states(ctx: &SimulationContext) -> Vec<ParticleState> {
    ctx.world
        .particles
        .iter()
        .map(|p| ParticleState {
            pos: p.pos,
            vel: p.vel,
            radius: p.radius,
        })
        .collect()
}

/// Main headless entry point: build a world from the configuration and
/// step it the given number of times.
pub fn run_simulation(config: SimConfig, steps: usize) -> Result<SimulationSummary, ConfigError> {
    let mut ctx = build_simulation_context(config)?;

    for _ in 0..steps {
        step_simulation(&mut ctx);
    }

    Ok(SimulationSummary {
        steps,
        states: get_particle_states(&ctx),
    })
}
