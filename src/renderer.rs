/*
 * Renderer Module
 *
 * This module handles the rendering of the night sky.
 * It draws every sky object for the current view, then the view and
 * direction buttons and the speed slider on top.
 *
 * Drawing goes through the Surface trait so the scene can be rendered to a
 * nannou window or recorded in tests. Surface coordinates are canvas
 * coordinates (origin top-left, y down).
 */

use nannou::color::{rgb8, Rgb8, WHITE};
use nannou::prelude::*;
use std::f32::consts::PI;

use crate::canvas::Canvas;
use crate::controls::Bounds;
use crate::simulation::Simulation;

pub const BUTTON_CORNER_RADIUS: f32 = 8.0;
pub const BUTTON_LABEL_SIZE: u32 = 20;
const BUTTON_LABEL_INSET: f32 = 10.0;
// Segments used to approximate each rounded corner
const CORNER_SEGMENTS: usize = 6;

/// Primitive drawing calls needed by the scene.
pub trait Surface {
    fn clear(&mut self, color: Rgb8);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb8);
    fn draw_polyline(&mut self, points: &[Vec2], color: Rgb8);
    fn draw_rect(&mut self, bounds: Bounds, color: Rgb8, corner_radius: f32);
    /// `position` is the top-left corner of the text.
    fn draw_text(&mut self, position: Vec2, text: &str, size: u32, color: Rgb8);
}

pub fn background_color() -> Rgb8 {
    rgb8(10, 10, 30)
}

pub fn button_color(active: bool) -> Rgb8 {
    if active {
        rgb8(120, 120, 200)
    } else {
        rgb8(80, 80, 120)
    }
}

pub fn track_color() -> Rgb8 {
    rgb8(100, 100, 100)
}

pub fn knob_color() -> Rgb8 {
    rgb8(200, 200, 200)
}

// Render the whole scene
pub fn render_scene<S: Surface + ?Sized>(surface: &mut S, sim: &Simulation) {
    surface.clear(background_color());

    for object in sim.objects() {
        object.draw(surface, sim.state(), sim.canvas());
    }

    let state = sim.state();
    let controls = sim.controls();
    draw_button(surface, controls.view_button, &format!("View: {}", state.view_mode), true);
    draw_button(surface, controls.direction_button, &format!("Dir: {}", state.direction), true);

    let slider = &controls.slider;
    surface.draw_rect(slider.track, track_color(), 0.0);
    surface.draw_circle(slider.knob_center(state.speed_ratio()), slider.knob_radius, knob_color());
}

pub fn draw_button<S: Surface + ?Sized>(surface: &mut S, bounds: Bounds, text: &str, active: bool) {
    surface.draw_rect(bounds, button_color(active), BUTTON_CORNER_RADIUS);
    let label_pos = vec2(bounds.left + BUTTON_LABEL_INSET, bounds.top + BUTTON_LABEL_INSET);
    surface.draw_text(label_pos, text, BUTTON_LABEL_SIZE, WHITE);
}

/// Outline of a rectangle with rounded corners, clockwise from the top edge.
/// The radius is limited to half the shorter side.
pub fn rounded_rect_points(bounds: Bounds, corner_radius: f32) -> Vec<Vec2> {
    let radius = corner_radius.clamp(0.0, bounds.width.min(bounds.height) / 2.0);
    if radius <= 0.0 {
        return vec![
            vec2(bounds.left, bounds.top),
            vec2(bounds.right(), bounds.top),
            vec2(bounds.right(), bounds.bottom()),
            vec2(bounds.left, bounds.bottom()),
        ];
    }

    // Corner centers with the angle each quarter arc starts at (y down)
    let corners = [
        (vec2(bounds.right() - radius, bounds.top + radius), -PI / 2.0),
        (vec2(bounds.right() - radius, bounds.bottom() - radius), 0.0),
        (vec2(bounds.left + radius, bounds.bottom() - radius), PI / 2.0),
        (vec2(bounds.left + radius, bounds.top + radius), PI),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (center, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let angle = start + (i as f32 / CORNER_SEGMENTS as f32) * (PI / 2.0);
            points.push(center + vec2(angle.cos(), angle.sin()) * radius);
        }
    }
    points
}

/// Surface backed by a nannou `Draw`.
pub struct NannouSurface<'a> {
    draw: &'a Draw,
    canvas: Canvas,
    window_rect: Rect,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, canvas: Canvas, window_rect: Rect) -> Self {
        Self { draw, canvas, window_rect }
    }

    fn to_window(&self, point: Vec2) -> Vec2 {
        self.canvas.canvas_to_window(point, self.window_rect)
    }
}

impl Surface for NannouSurface<'_> {
    fn clear(&mut self, color: Rgb8) {
        self.draw.background().color(color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb8) {
        self.draw
            .ellipse()
            .xy(self.to_window(center))
            .radius(radius)
            .color(color);
    }

    fn draw_polyline(&mut self, points: &[Vec2], color: Rgb8) {
        if points.len() < 2 {
            return;
        }
        let window_points: Vec<Vec2> = points.iter().map(|&p| self.to_window(p)).collect();
        self.draw
            .polyline()
            .weight(1.0)
            .points(window_points)
            .color(color);
    }

    fn draw_rect(&mut self, bounds: Bounds, color: Rgb8, corner_radius: f32) {
        let window_points: Vec<Vec2> = rounded_rect_points(bounds, corner_radius)
            .into_iter()
            .map(|p| self.to_window(p))
            .collect();
        self.draw.polygon().color(color).points(window_points);
    }

    fn draw_text(&mut self, position: Vec2, text: &str, size: u32, color: Rgb8) {
        // nannou lays text out inside a box centered on xy
        let box_size = vec2(size as f32 * text.chars().count().max(1) as f32, size as f32 * 1.5);
        let top_left = self.to_window(position);
        self.draw
            .text(text)
            .font_size(size)
            .no_line_wrap()
            .left_justify()
            .align_text_top()
            .x_y(top_left.x + box_size.x / 2.0, top_left.y - box_size.y / 2.0)
            .w_h(box_size.x, box_size.y)
            .color(color);
    }
}

/// A single recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Rgb8),
    Circle { center: Vec2, radius: f32, color: Rgb8 },
    Polyline { points: Vec<Vec2>, color: Rgb8 },
    Rect { bounds: Bounds, color: Rgb8, corner_radius: f32 },
    Text { position: Vec2, text: String, size: u32, color: Rgb8 },
}

/// Surface that remembers every call, for tests and benchmarks.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn polylines(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, DrawCall::Polyline { .. })).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgb8) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb8) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }

    fn draw_polyline(&mut self, points: &[Vec2], color: Rgb8) {
        self.calls.push(DrawCall::Polyline { points: points.to_vec(), color });
    }

    fn draw_rect(&mut self, bounds: Bounds, color: Rgb8, corner_radius: f32) {
        self.calls.push(DrawCall::Rect { bounds, color, corner_radius });
    }

    fn draw_text(&mut self, position: Vec2, text: &str, size: u32, color: Rgb8) {
        self.calls.push(DrawCall::Text { position, text: text.to_string(), size, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Movement, ObjectType};
    use crate::sky_object::SkyObject;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_object_sim() -> Simulation {
        let object = SkyObject::from_parts(
            3,
            ObjectType::Satellite,
            Movement::Normal,
            vec2(100.0, 100.0),
            20.0,
            vec2(1.0, 0.0),
        );
        Simulation::with_objects(Canvas::default(), vec![object], StdRng::seed_from_u64(1))
    }

    #[test]
    fn plan_view_draws_marker_trail_and_label() {
        let mut sim = one_object_sim();
        sim.step();
        sim.step();

        let mut surface = RecordingSurface::new();
        render_scene(&mut surface, &sim);

        assert_eq!(surface.calls[0], DrawCall::Clear(background_color()));
        assert_eq!(surface.polylines(), 1);
        assert_eq!(surface.texts(), vec!["3", "View: PLAN", "Dir: EAST"]);
        match &surface.calls[1] {
            DrawCall::Circle { center, radius, .. } => {
                assert_relative_eq!(center.x, 102.0);
                assert_relative_eq!(*radius, crate::MARKER_RADIUS);
            }
            other => panic!("expected marker, got {other:?}"),
        }
    }

    #[test]
    fn ground_view_has_no_trails() {
        let mut sim = one_object_sim();
        sim.step();
        sim.step();
        sim.state_mut().toggle_view_mode();

        let mut surface = RecordingSurface::new();
        render_scene(&mut surface, &sim);

        assert_eq!(surface.polylines(), 0);
        assert!(surface.texts().contains(&"View: GROUND"));
    }

    #[test]
    fn label_is_offset_from_marker() {
        let sim = one_object_sim();
        let mut surface = RecordingSurface::new();
        render_scene(&mut surface, &sim);
        let label = surface.calls.iter().find_map(|call| match call {
            DrawCall::Text { position, text, .. } if text == "3" => Some(*position),
            _ => None,
        });
        assert_eq!(label, Some(vec2(108.0, 92.0)));
    }

    #[test]
    fn knob_follows_speed() {
        let mut sim = one_object_sim();
        sim.state_mut().set_speed_multiplier(3.0);
        let mut surface = RecordingSurface::new();
        render_scene(&mut surface, &sim);
        match surface.calls.last() {
            Some(DrawCall::Circle { center, radius, color }) => {
                assert_relative_eq!(center.x, 800.0);
                assert_relative_eq!(center.y, 630.0);
                assert_relative_eq!(*radius, 12.0);
                assert_eq!(*color, knob_color());
            }
            other => panic!("expected knob, got {other:?}"),
        }
    }

    #[test]
    fn rounded_rect_stays_inside_bounds() {
        let bounds = Bounds::new(20.0, 630.0, 150.0, 50.0);
        let points = rounded_rect_points(bounds, 8.0);
        assert_eq!(points.len(), 4 * (CORNER_SEGMENTS + 1));
        for p in points {
            assert!(p.x >= bounds.left - 1e-3 && p.x <= bounds.right() + 1e-3);
            assert!(p.y >= bounds.top - 1e-3 && p.y <= bounds.bottom() + 1e-3);
        }
    }

    #[test]
    fn square_rect_has_four_corners() {
        let points = rounded_rect_points(Bounds::new(0.0, 0.0, 10.0, 5.0), 0.0);
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], vec2(10.0, 5.0));
    }
}
