mod scene_app;

use bouncelab_core::{run_simulation, SimConfig};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bouncelab")]
#[command(about = "Bouncelab - an interactive bouncing-circles sandbox", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Simulation parameters shared by every subcommand
#[derive(Args)]
struct SimArgs {
    /// Number of particles to spawn
    #[arg(long, default_value_t = 100)]
    particles: usize,

    /// Spacing of the initial grid
    #[arg(long, default_value_t = 0.05)]
    spacing: f32,

    /// Radius of every particle
    #[arg(long, default_value_t = 0.01)]
    radius: f32,

    /// Downward gravity acceleration
    #[arg(long, default_value_t = 1.0)]
    gravity: f32,

    /// Collision reflection coefficient
    #[arg(long, default_value_t = 1.96)]
    restitution: f32,

    /// Fixed simulation timestep
    #[arg(long, default_value_t = 0.05)]
    timestep: f32,

    /// Magnitude range of the random initial velocities
    #[arg(long, default_value_t = 0.1)]
    jitter: f32,

    /// Seed for the initial velocities
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl SimArgs {
    fn to_config(&self) -> SimConfig {
        SimConfig {
            particle_count: self.particles,
            grid_spacing: self.spacing,
            radius: self.radius,
            gravity: self.gravity,
            restitution: self.restitution,
            timestep: self.timestep,
            velocity_jitter: self.jitter,
            seed: self.seed,
            ..SimConfig::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation headless and print the final particle states
    Run {
        /// Number of timesteps to simulate
        #[arg(long, default_value_t = 500)]
        steps: usize,

        #[command(flatten)]
        sim: SimArgs,
    },
    /// Open the interactive viewer window
    View {
        #[command(flatten)]
        sim: SimArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { steps, sim } => match run_headless(sim.to_config(), steps) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::View { sim } => {
            if let Err(e) = scene_app::run_viewer(sim.to_config()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_headless(config: SimConfig, steps: usize) -> Result<(), Box<dyn std::error::Error>> {
    let summary = run_simulation(config, steps)?;

    println!("final state after {} steps:", summary.steps);
    for (i, state) in summary.states.iter().enumerate() {
        println!(
            "p{} pos = ({:.6}, {:.6}) vel = ({:.6}, {:.6})",
            i, state.pos.x, state.pos.y, state.vel.x, state.vel.y
        );
    }

    Ok(())
}
