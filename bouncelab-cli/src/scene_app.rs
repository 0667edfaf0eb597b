//! Interactive viewer for the particle simulation
//!
//! Owns the simulation context and a running flag. Each frame it steps
//! the world while playing, then paints every particle at its current
//! position; the play button in the top bar toggles the running state.

use bouncelab_core::{
    build_simulation_context, get_particle_states, step_simulation, SimConfig, SimulationContext,
};
use eframe::egui;

/// Viewer application driving the simulation
pub struct SceneApp {
    config: SimConfig,
    ctx_opt: Option<SimulationContext>,
    last_build_error: Option<String>,
    playing: bool,
    speed_multiplier: f32,
}

impl SceneApp {
    pub fn new(config: SimConfig, _cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            config,
            ctx_opt: None,
            last_build_error: None,
            playing: false,
            speed_multiplier: 1.0,
        };

        // Initial build
        app.rebuild_context();

        app
    }

    fn rebuild_context(&mut self) {
        match build_simulation_context(self.config.clone()) {
            Ok(ctx) => {
                self.ctx_opt = Some(ctx);
                self.last_build_error = None;
            }
            Err(e) => {
                self.last_build_error = Some(format!("{}", e));
                self.ctx_opt = None;
                self.playing = false;
            }
        }
    }
}

impl eframe::App for SceneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top bar with controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Play/Pause button
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                // Reset button
                if ui.button("⏮ Reset").clicked() {
                    self.rebuild_context();
                    self.playing = false;
                }

                // Step button
                if ui.button("⏭ Step").clicked() {
                    if let Some(ref mut sim) = self.ctx_opt {
                        step_simulation(sim);
                    }
                }

                ui.separator();

                // Speed control
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.speed_multiplier, 0.1..=10.0));

                ui.separator();

                // Step counter
                if let Some(ref sim) = self.ctx_opt {
                    ui.label(format!("Step: {}", sim.current_step));
                }
            });
        });

        // Main canvas area
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();

            if let Some(ref sim) = self.ctx_opt {
                // Coordinate transformation: map world coordinates to
                // screen, flipping y (world y points up)
                let bounds = sim.world.bounds;
                let world_range = bounds.width().max(bounds.height());
                let center = rect.center();
                let world_center = bounds.center();
                let scale = (rect.width().min(rect.height()) / world_range) * 0.9;

                let to_screen = |x: f32, y: f32| {
                    center
                        + egui::vec2((x - world_center.x) * scale, -(y - world_center.y) * scale)
                };

                // Draw the walls
                let wall_rect = egui::Rect::from_two_pos(
                    to_screen(bounds.left, bounds.top),
                    to_screen(bounds.right, bounds.bottom),
                );
                painter.rect_stroke(wall_rect, 0.0, egui::Stroke::new(1.0, egui::Color32::GRAY));

                // Draw particles
                let particle_states = get_particle_states(sim);
                for particle in particle_states {
                    let screen_pos = to_screen(particle.pos.x, particle.pos.y);
                    let radius = (particle.radius * scale).max(1.0);

                    painter.circle_filled(screen_pos, radius, egui::Color32::LIGHT_BLUE);
                    painter.circle_stroke(screen_pos, radius, egui::Stroke::new(1.0, egui::Color32::BLUE));
                }
            }

            // Show error message if any
            if let Some(ref error) = self.last_build_error {
                ui.vertical_centered(|ui| {
                    ui.add_space(rect.height() * 0.4);
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error))
                            .color(egui::Color32::RED)
                            .size(16.0),
                    );
                });
            }
        });

        // Simulation stepping
        if self.playing {
            if let Some(ref mut sim) = self.ctx_opt {
                let steps_per_frame = self.speed_multiplier.max(0.1).round() as usize;
                for _ in 0..steps_per_frame {
                    step_simulation(sim);
                }
            }
        }

        // Request repaint for animation
        if self.playing {
            ctx.request_repaint();
        }
    }
}

/// Open the viewer window for the given configuration
pub fn run_viewer(config: SimConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([940.0, 880.0])
            .with_title("bouncelab"),
        ..Default::default()
    };

    eframe::run_native(
        "bouncelab",
        options,
        Box::new(|cc| Ok(Box::new(SceneApp::new(config, cc)))),
    )
}
