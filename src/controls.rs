/*
 * Controls Module
 *
 * Geometry of the on-screen widgets (view toggle, direction toggle and the
 * speed slider) together with the hit tests that decide which widget a
 * pointer event lands on. All coordinates are canvas coordinates.
 */

use nannou::prelude::*;

use crate::canvas::Canvas;

pub const BUTTON_WIDTH: f32 = 150.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
pub const BUTTON_LEFT: f32 = 20.0;
pub const SLIDER_LEFT: f32 = 200.0;
pub const SLIDER_WIDTH: f32 = 600.0;
pub const SLIDER_HEIGHT: f32 = 20.0;
pub const KNOB_RADIUS: f32 = 12.0;
// Extra room above and below the track that still grabs the slider
pub const SLIDER_GRAB_MARGIN: f32 = 10.0;

/// Discrete input delivered by the platform once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerDown(Vec2),
    PointerUp,
    PointerMove(Vec2),
}

/// Axis aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    // Right and bottom edges are outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    pub track: Bounds,
    pub knob_radius: f32,
    pub grab_margin: f32,
}

impl Slider {
    // Inclusive on every edge, and taller than the track itself
    pub fn in_grab_band(&self, point: Vec2) -> bool {
        point.x >= self.track.left
            && point.x <= self.track.right()
            && point.y >= self.track.top - self.grab_margin
            && point.y <= self.track.bottom() + self.grab_margin
    }

    /// Fraction of the track to the left of `x`, clamped to `[0, 1]`.
    pub fn ratio_at(&self, x: f32) -> f32 {
        ((x - self.track.left) / self.track.width).clamp(0.0, 1.0)
    }

    pub fn knob_center(&self, ratio: f32) -> Vec2 {
        vec2(
            self.track.left + ratio.clamp(0.0, 1.0) * self.track.width,
            self.track.top + self.track.height / 2.0,
        )
    }
}

/// Which widget a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    ViewButton,
    DirectionButton,
    Slider,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Controls {
    pub view_button: Bounds,
    pub direction_button: Bounds,
    pub slider: Slider,
    pub is_dragging: bool,
}

impl Controls {
    /// Lay the widgets out along the bottom-left of the canvas.
    pub fn for_canvas(canvas: &Canvas) -> Self {
        let view_top = canvas.height() - BUTTON_HEIGHT - 20.0;
        let direction_top = canvas.height() - 2.0 * BUTTON_HEIGHT - 40.0;
        let track_top = canvas.height() - 80.0;
        Self {
            view_button: Bounds::new(BUTTON_LEFT, view_top, BUTTON_WIDTH, BUTTON_HEIGHT),
            direction_button: Bounds::new(BUTTON_LEFT, direction_top, BUTTON_WIDTH, BUTTON_HEIGHT),
            slider: Slider {
                track: Bounds::new(SLIDER_LEFT, track_top, SLIDER_WIDTH, SLIDER_HEIGHT),
                knob_radius: KNOB_RADIUS,
                grab_margin: SLIDER_GRAB_MARGIN,
            },
            is_dragging: false,
        }
    }

    // Buttons take precedence over the slider band
    pub fn hit_test(&self, point: Vec2) -> Option<Hit> {
        if self.view_button.contains(point) {
            Some(Hit::ViewButton)
        } else if self.direction_button.contains(point) {
            Some(Hit::DirectionButton)
        } else if self.slider.in_grab_band(point) {
            Some(Hit::Slider)
        } else {
            None
        }
    }

    pub fn start_drag(&mut self) {
        self.is_dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }
}
