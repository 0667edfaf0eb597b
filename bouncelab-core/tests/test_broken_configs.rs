//! Validation tests for malformed configurations

use bouncelab_core::config::{ConfigError, SimConfig, MAX_PARTICLES};
use bouncelab_core::engine::Bounds;
use bouncelab_core::runtime::build_simulation_context;

#[test]
fn test_default_config_is_valid() {
    assert!(SimConfig::default().validate().is_ok());
}

#[test]
fn test_zero_particles_rejected() {
    let config = SimConfig {
        particle_count: 0,
        ..SimConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::NoParticles)));
}

#[test]
fn test_count_above_maximum_rejected() {
    let config = SimConfig {
        particle_count: MAX_PARTICLES + 1,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::TooManyParticles(n)) if n == MAX_PARTICLES + 1
    ));
}

#[test]
fn test_maximum_count_accepted() {
    let config = SimConfig {
        particle_count: MAX_PARTICLES,
        grid_spacing: 0.05,
        ..SimConfig::default()
    };
    // 32x32 grid at 0.05 spacing spans 1.55, inside the unit bounds
    assert!(config.validate().is_ok());
}

#[test]
fn test_non_positive_radius_rejected() {
    for radius in [0.0, -0.01] {
        let config = SimConfig {
            radius,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveRadius(_))
        ));
    }
}

#[test]
fn test_non_positive_spacing_rejected() {
    let config = SimConfig {
        grid_spacing: 0.0,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositiveSpacing(_))
    ));
}

#[test]
fn test_non_positive_timestep_rejected() {
    let config = SimConfig {
        timestep: -0.05,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositiveTimestep(_))
    ));
}

#[test]
fn test_negative_jitter_rejected() {
    let config = SimConfig {
        velocity_jitter: -0.1,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NegativeJitter(_))
    ));
}

#[test]
fn test_empty_bounds_rejected() {
    let config = SimConfig {
        bounds: Bounds {
            left: 1.0,
            right: -1.0,
            bottom: -1.0,
            top: 1.0,
        },
        ..SimConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::EmptyBounds { .. })));
}

#[test]
fn test_oversized_grid_rejected() {
    // 100 particles -> 10 columns -> 4.5 units wide at 0.5 spacing,
    // which cannot fit the 2-unit bounds
    let config = SimConfig {
        particle_count: 100,
        grid_spacing: 0.5,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::GridTooLarge { .. })
    ));
}

#[test]
fn test_build_context_propagates_validation_error() {
    let config = SimConfig {
        particle_count: 0,
        ..SimConfig::default()
    };
    assert!(build_simulation_context(config).is_err());
}

#[test]
fn test_error_messages_name_the_field() {
    let config = SimConfig {
        radius: -1.0,
        ..SimConfig::default()
    };
    let message = config.validate().unwrap_err().to_string();
    assert!(message.contains("radius"));
}
