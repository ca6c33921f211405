/*
 * Application Module
 *
 * This module defines the nannou application model for the night sky.
 * It handles window creation, the per-frame update and rendering.
 *
 * Each frame:
 * - Queued input events are drained into the simulation
 * - The frame pacer decides how many fixed simulation steps to run
 * - The scene is drawn, with the inspector overlay on top
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;
use tracing::{error, info, warn};

use crate::canvas::Canvas;
use crate::config::SkyConfig;
use crate::controls::InputEvent;
use crate::debug::DebugInfo;
use crate::error::SkyError;
use crate::input::{key_pressed, mouse_moved, mouse_pressed, mouse_released, raw_window_event};
use crate::pacer::FramePacer;
use crate::renderer::NannouSurface;
use crate::simulation::{Flow, Simulation};
use crate::ui;

// nannou builds the model from a plain fn, so the prepared sky is handed
// over through this slot
static LAUNCH: Mutex<Option<Launch>> = Mutex::new(None);

struct Launch {
    sim: Simulation,
    pacer: FramePacer,
}

// Main model for the application
pub struct Model {
    pub sim: Simulation,
    pub egui: Egui,
    pub pacer: FramePacer,
    pub debug_info: DebugInfo,
    pub pending_events: Vec<InputEvent>,
    pub mouse_position: Vec2,
    pub paused: bool,
    pub show_inspector: bool,
}

/// Validate the configuration, spawn the sky and run the window until quit.
pub fn run(config: SkyConfig) -> Result<(), SkyError> {
    config.validate()?;
    let sim = Simulation::from_config(&config)?;
    let pacer = FramePacer::new(config.fps)?;
    info!(
        objects = sim.objects().len(),
        width = config.width,
        height = config.height,
        fps = config.fps,
        seed = ?config.seed,
        "starting night sky"
    );

    if let Ok(mut slot) = LAUNCH.lock() {
        *slot = Some(Launch { sim, pacer });
    }

    nannou::app(model).update(update).run();
    Ok(())
}

// Initialize the model
fn model(app: &App) -> Model {
    let Launch { sim, pacer } = match LAUNCH.lock().ok().and_then(|mut slot| slot.take()) {
        Some(launch) => launch,
        None => {
            warn!("no prepared sky, starting with an empty one");
            Launch {
                sim: Simulation::with_objects(
                    Canvas::default(),
                    Vec::new(),
                    StdRng::from_entropy(),
                ),
                pacer: FramePacer::default(),
            }
        }
    };

    // Escape goes through the simulation's quit event instead
    app.set_exit_on_escape(false);

    let canvas = *sim.canvas();
    let window_id = app
        .new_window()
        .title("Night Sky Perceptions")
        .size(canvas.width() as u32, canvas.height() as u32)
        .resizable(false)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build the sky window");

    let window = app.window(window_id).expect("Sky window closed during setup");
    let egui = Egui::from_window(&window);

    Model {
        sim,
        egui,
        pacer,
        debug_info: DebugInfo::default(),
        pending_events: Vec::new(),
        mouse_position: Vec2::ZERO,
        paused: false,
        show_inspector: false,
    }
}

// Update the model
fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);
    if ui::update_inspector(
        &mut model.egui,
        &model.sim,
        &model.debug_info,
        &mut model.paused,
        model.show_inspector,
    ) {
        info!(paused = model.paused, "pause toggled");
    }

    if model.sim.handle_events(model.pending_events.drain(..)) == Flow::Quit {
        app.quit();
        return;
    }

    let steps = if model.paused {
        model.pacer.reset();
        0
    } else {
        model.pacer.advance(update.since_last)
    };
    for _ in 0..steps {
        model.sim.step();
    }

    model.debug_info.record_frame(app.fps(), update.since_last, steps);
}

// Render the model
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut surface = NannouSurface::new(&draw, *model.sim.canvas(), app.window_rect());
    model.sim.render(&mut surface);

    if let Err(err) = draw.to_frame(app, &frame) {
        error!(error = ?err, "failed to draw the sky");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(error = ?err, "failed to draw the inspector");
    }
}
