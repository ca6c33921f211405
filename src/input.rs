/*
 * Input Module
 *
 * This module turns nannou window events into the simulation's input
 * events. Nothing here changes the view state directly: events are queued
 * on the model and drained by the simulation at the start of the next
 * update.
 *
 * Features:
 * - Left mouse press, release and motion for the buttons and slider
 * - Escape to quit
 * - I to show or hide the inspector, Space to pause
 * - Forwarding raw events to egui
 */

use nannou::prelude::*;
use nannou::winit::event::WindowEvent;
use tracing::info;

use crate::app::Model;
use crate::controls::InputEvent;

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let canvas_pos = model.sim.canvas().window_to_canvas(pos, app.window_rect());
    model.mouse_position = canvas_pos;
    model.pending_events.push(InputEvent::PointerMove(canvas_pos));
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    // Clicks on the inspector belong to egui
    if model.show_inspector && model.egui.ctx().is_pointer_over_area() {
        return;
    }
    model.pending_events.push(InputEvent::PointerDown(model.mouse_position));
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.pending_events.push(InputEvent::PointerUp);
    }
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Escape => model.pending_events.push(InputEvent::Quit),
        Key::I => {
            model.show_inspector = !model.show_inspector;
            info!(visible = model.show_inspector, "inspector toggled");
        }
        Key::Space => {
            model.paused = !model.paused;
            info!(paused = model.paused, "pause toggled");
        }
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
