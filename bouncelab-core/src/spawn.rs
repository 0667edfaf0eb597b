//! Initial particle placement
//!
//! Particles are laid out once at startup on a regular grid centered in
//! the bounds, each with a small seeded random velocity. The layout is
//! fully determined by the configuration, so two runs with the same seed
//! start from identical state.

use crate::config::SimConfig;
use crate::engine::Particle;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Grid dimensions for a particle count: a near-square layout with
/// `ceil(sqrt(count))` columns.
pub fn grid_dims(count: usize) -> (usize, usize) {
    let cols = (count as f32).sqrt().ceil() as usize;
    let cols = cols.max(1);
    let rows = count.div_ceil(cols);
    (cols, rows)
}

/// Lay out `config.particle_count` particles on a centered grid with
/// velocity components drawn uniformly from the jitter range.
pub fn spawn_grid(config: &SimConfig) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let (cols, rows) = grid_dims(config.particle_count);

    let grid_width = (cols - 1) as f32 * config.grid_spacing;
    let grid_height = (rows - 1) as f32 * config.grid_spacing;
    let center = config.bounds.center();
    let origin = Vec2::new(center.x - grid_width / 2.0, center.y + grid_height / 2.0);

    let jitter = config.velocity_jitter;
    (0..config.particle_count)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            let pos = origin
                + Vec2::new(
                    col as f32 * config.grid_spacing,
                    -(row as f32) * config.grid_spacing,
                );
            let vel = Vec2::new(
                rng.gen_range(-jitter..=jitter),
                rng.gen_range(-jitter..=jitter),
            );
            Particle {
                pos,
                vel,
                radius: config.radius,
            }
        })
        .collect()
}
