use crate::engine::Bounds;
use crate::spawn::grid_dims;
use thiserror::Error;

/// Hard cap on the number of simulated bodies
pub const MAX_PARTICLES: usize = 1000;

/// Error produced when validating a simulation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("particle count {0} exceeds the maximum of {MAX_PARTICLES}")]
    TooManyParticles(usize),
    #[error("particle radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("grid spacing must be positive, got {0}")]
    NonPositiveSpacing(f32),
    #[error("timestep must be positive, got {0}")]
    NonPositiveTimestep(f32),
    #[error("velocity jitter must not be negative, got {0}")]
    NegativeJitter(f32),
    #[error("bounds are empty: width {width}, height {height}")]
    EmptyBounds { width: f32, height: f32 },
    #[error("spawn grid of {cols}x{rows} at spacing {spacing} does not fit the bounds")]
    GridTooLarge {
        cols: usize,
        rows: usize,
        spacing: f32,
    },
}

/// Tunable parameters for a simulation run
///
/// Defaults describe the stock scene: unit NDC bounds, gravity 1.0,
/// restitution coefficient 1.96 and a 0.05 fixed timestep.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub particle_count: usize,
    pub grid_spacing: f32,
    pub radius: f32,
    pub gravity: f32,
    pub bounds: Bounds,
    pub restitution: f32,
    pub timestep: f32,
    pub velocity_jitter: f32,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            grid_spacing: 0.05,
            radius: 0.01,
            gravity: 1.0,
            bounds: Bounds::UNIT,
            restitution: 1.96,
            timestep: 0.05,
            velocity_jitter: 0.1,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Check the configuration before a world is built from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if self.particle_count > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles(self.particle_count));
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if self.grid_spacing <= 0.0 {
            return Err(ConfigError::NonPositiveSpacing(self.grid_spacing));
        }
        if self.timestep <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep(self.timestep));
        }
        if self.velocity_jitter < 0.0 {
            return Err(ConfigError::NegativeJitter(self.velocity_jitter));
        }
        if self.bounds.width() <= 0.0 || self.bounds.height() <= 0.0 {
            return Err(ConfigError::EmptyBounds {
                width: self.bounds.width(),
                height: self.bounds.height(),
            });
        }

        let (cols, rows) = grid_dims(self.particle_count);
        let grid_width = (cols - 1) as f32 * self.grid_spacing;
        let grid_height = (rows - 1) as f32 * self.grid_spacing;
        if grid_width > self.bounds.width() || grid_height > self.bounds.height() {
            return Err(ConfigError::GridTooLarge {
                cols,
                rows,
                spacing: self.grid_spacing,
            });
        }

        Ok(())
    }
}
