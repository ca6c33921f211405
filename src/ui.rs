/*
 * UI Module
 *
 * The inspector overlay, built with nannou_egui. It shows frame timing, the
 * current view state and one row per sky object, and lets the user pause
 * the simulation. The view/direction buttons and the speed slider are not
 * egui widgets; they are drawn by the renderer and hit-tested by Controls.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::simulation::Simulation;

// Update the inspector and return whether the pause setting changed
pub fn update_inspector(
    egui: &mut Egui,
    sim: &Simulation,
    debug_info: &DebugInfo,
    paused: &mut bool,
    visible: bool,
) -> bool {
    let was_paused = *paused;

    let ctx = egui.begin_frame();
    if !visible {
        return false;
    }

    egui::Window::new("Sky Inspector")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
            ui.label(format!("Steps this frame: {}", debug_info.steps_this_frame));
            ui.checkbox(paused, "Pause Simulation");

            ui.separator();

            let state = sim.state();
            ui.label(format!("View: {}", state.view_mode));
            ui.label(format!("Direction: {}", state.direction));
            ui.label(format!("Speed: {:.2}x", state.speed_multiplier()));

            ui.collapsing("Objects", |ui| {
                egui::Grid::new("sky_objects").striped(true).show(ui, |ui| {
                    ui.label("Id");
                    ui.label("Type");
                    ui.label("Movement");
                    ui.label("Depth");
                    ui.end_row();

                    for object in sim.objects() {
                        ui.label(object.id().to_string());
                        ui.label(object.kind().name());
                        ui.label(object.movement().name());
                        ui.label(format!("{:.1}", object.depth()));
                        ui.end_row();
                    }
                });
            });

            ui.collapsing("Population", |ui| {
                for (kind, count) in sim.type_counts() {
                    ui.label(format!("{kind}: {count}"));
                }
            });
        });

    *paused != was_paused
}
