/*
 * Canvas Module
 *
 * The Canvas describes the simulated sky surface. Simulation coordinates
 * have their origin in the top-left corner with y growing downwards; nannou
 * windows are centered with y growing upwards. This module converts between
 * the two.
 */

use nannou::prelude::*;

use crate::error::SkyError;

/// A sky surface of positive, finite size. Only `Canvas::new` and the
/// default build one, so every canvas has room to spawn objects in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    width: f32,
    height: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: crate::WIDTH,
            height: crate::HEIGHT,
        }
    }
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Result<Self, SkyError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SkyError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    // Convert a point from canvas space to window space
    pub fn canvas_to_window(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        vec2(window_rect.left() + point.x, window_rect.top() - point.y)
    }

    // Convert a point from window space to canvas space
    pub fn window_to_canvas(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        vec2(point.x - window_rect.left(), window_rect.top() - point.y)
    }

    /// The window rectangle a canvas of this size occupies.
    pub fn window_rect(&self) -> Rect {
        Rect::from_w_h(self.width, self.height)
    }
}
