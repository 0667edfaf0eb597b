//! Unit tests for initial grid placement

use bouncelab_core::spawn::{grid_dims, spawn_grid};
use bouncelab_core::SimConfig;
use glam::Vec2;

fn small_config() -> SimConfig {
    SimConfig {
        particle_count: 9,
        grid_spacing: 0.1,
        radius: 0.02,
        velocity_jitter: 0.05,
        seed: 7,
        ..SimConfig::default()
    }
}

#[test]
fn test_grid_dims_near_square() {
    assert_eq!(grid_dims(1), (1, 1));
    assert_eq!(grid_dims(2), (2, 1));
    assert_eq!(grid_dims(4), (2, 2));
    assert_eq!(grid_dims(5), (3, 2));
    assert_eq!(grid_dims(9), (3, 3));
    assert_eq!(grid_dims(10), (4, 3));
    assert_eq!(grid_dims(1000), (32, 32));
}

#[test]
fn test_spawn_count_and_radius() {
    let config = small_config();
    let particles = spawn_grid(&config);

    assert_eq!(particles.len(), 9);
    for p in &particles {
        assert_eq!(p.radius, 0.02);
    }
}

#[test]
fn test_spawn_positions_form_regular_grid() {
    let config = small_config();
    let particles = spawn_grid(&config);

    // 3x3 grid centered on the origin, rows top to bottom
    let expected_first = Vec2::new(-0.1, 0.1);
    assert!((particles[0].pos - expected_first).length() < 1e-6);

    // Neighbors in a row are one spacing apart in x
    let row_step = particles[1].pos - particles[0].pos;
    assert!((row_step - Vec2::new(0.1, 0.0)).length() < 1e-6);

    // Rows are one spacing apart in y
    let col_step = particles[3].pos - particles[0].pos;
    assert!((col_step - Vec2::new(0.0, -0.1)).length() < 1e-6);

    // All positions distinct
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            assert!(particles[i].pos != particles[j].pos);
        }
    }
}

#[test]
fn test_spawn_velocities_within_jitter() {
    let config = small_config();
    let particles = spawn_grid(&config);

    for p in &particles {
        assert!(p.vel.x.abs() <= config.velocity_jitter);
        assert!(p.vel.y.abs() <= config.velocity_jitter);
    }
}

#[test]
fn test_spawn_is_deterministic_per_seed() {
    let config = small_config();
    let a = spawn_grid(&config);
    let b = spawn_grid(&config);

    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_give_different_velocities() {
    let config = small_config();
    let other = SimConfig {
        seed: 8,
        ..small_config()
    };

    let a = spawn_grid(&config);
    let b = spawn_grid(&other);

    assert!(a.iter().zip(b.iter()).any(|(pa, pb)| pa.vel != pb.vel));
}

#[test]
fn test_zero_jitter_spawns_at_rest() {
    let config = SimConfig {
        velocity_jitter: 0.0,
        ..small_config()
    };
    let particles = spawn_grid(&config);

    for p in &particles {
        assert_eq!(p.vel, Vec2::ZERO);
    }
}
