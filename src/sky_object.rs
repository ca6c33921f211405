/*
 * Sky Object Module
 *
 * This module defines the SkyObject struct and its behaviour.
 * Every frame an object:
 * 1. Moves according to its movement behaviour
 * 2. Flickers slightly in depth (a bounded random walk)
 * 3. Records its position in a short trail
 * 4. Snaps to the opposite edge when it leaves the canvas
 */

use nannou::color::{rgb8, Rgb8, WHITE};
use nannou::prelude::*;
use rand::Rng;
use std::collections::VecDeque;
use std::f32::consts::TAU;

use crate::canvas::Canvas;
use crate::catalog::{Movement, ObjectType};
use crate::renderer::Surface;
use crate::state::{Direction, SimulationState, ViewMode};
use crate::{LABEL_OFFSET, LABEL_SIZE, MARKER_RADIUS, TRAIL_CAPACITY};

pub const MIN_DEPTH: f32 = 0.0;
pub const MAX_DEPTH: f32 = 100.0;
pub const DEPTH_JITTER: f32 = 0.2;
pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 3.0;

// Colour boost for the closest objects, fading to nothing at MAX_DEPTH
const HAZE_BOOST: f32 = 80.0;
// Screen pixels per unit of depth in the ground view
const GROUND_ALTITUDE_SCALE: f32 = 5.0;

/// Per-behaviour motion step, looked up from the movement tag.
pub type Kinematics = fn(&mut SkyObject, f32);

pub fn kinematics_for(movement: Movement) -> Kinematics {
    match movement {
        Movement::Normal
        | Movement::HoverZip
        | Movement::Rare
        | Movement::Orbit
        | Movement::ShootingStar => SkyObject::drift,
    }
}

#[derive(Clone, Debug)]
pub struct SkyObject {
    id: u32,
    kind: ObjectType,
    movement: Movement,
    position: Vec2,
    depth: f32,
    velocity: Vec2,
    trail: VecDeque<Vec2>,
}

impl SkyObject {
    /// Spawn an object somewhere in the top half of the canvas, heading in a
    /// random direction.
    pub fn spawn<R: Rng + ?Sized>(
        id: u32,
        kind: ObjectType,
        movement: Movement,
        canvas: &Canvas,
        rng: &mut R,
    ) -> Self {
        let x = rng.gen_range(0.0..canvas.width());
        let y = rng.gen_range(0.0..canvas.height() / 2.0);
        let depth = rng.gen_range(MIN_DEPTH..=MAX_DEPTH);

        // Random heading and scalar speed
        let speed = rng.gen_range(MIN_SPEED..=MAX_SPEED);
        let heading = rng.gen_range(0.0..TAU);
        let velocity = vec2(heading.cos(), heading.sin()) * speed;

        Self::from_parts(id, kind, movement, vec2(x, y), depth, velocity)
    }

    /// Build an object from explicit kinematic state. Depth is clamped.
    pub fn from_parts(
        id: u32,
        kind: ObjectType,
        movement: Movement,
        position: Vec2,
        depth: f32,
        velocity: Vec2,
    ) -> Self {
        Self {
            id,
            kind,
            movement,
            position,
            depth: depth.clamp(MIN_DEPTH, MAX_DEPTH),
            velocity,
            trail: VecDeque::with_capacity(TRAIL_CAPACITY + 1),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> ObjectType {
        self.kind
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Recent positions, oldest first.
    pub fn trail(&self) -> &VecDeque<Vec2> {
        &self.trail
    }

    // Advance the object by one frame
    pub fn update<R: Rng + ?Sized>(&mut self, speed_multiplier: f32, canvas: &Canvas, rng: &mut R) {
        kinematics_for(self.movement)(self, speed_multiplier);
        self.flicker_depth(rng.gen_range(-DEPTH_JITTER..=DEPTH_JITTER));
        self.record_trail();
        self.wrap_edges(canvas);
    }

    // Straight line drift along the spawn velocity
    pub fn drift(&mut self, speed_multiplier: f32) {
        self.position += self.velocity * speed_multiplier;
    }

    pub fn flicker_depth(&mut self, delta: f32) {
        self.depth = (self.depth + delta).clamp(MIN_DEPTH, MAX_DEPTH);
    }

    fn record_trail(&mut self) {
        self.trail.push_back(self.position);
        while self.trail.len() > TRAIL_CAPACITY {
            self.trail.pop_front();
        }
    }

    // Snap to the opposite edge rather than wrapping by the overshoot
    pub fn wrap_edges(&mut self, canvas: &Canvas) {
        if self.position.x < 0.0 {
            self.position.x = canvas.width();
        }
        if self.position.x > canvas.width() {
            self.position.x = 0.0;
        }

        if self.position.y < 0.0 {
            self.position.y = canvas.height();
        }
        if self.position.y > canvas.height() {
            self.position.y = 0.0;
        }
    }

    /// Base colour brightened for nearby objects, giving distant ones a hazy,
    /// dimmer look.
    pub fn display_color(&self) -> Rgb8 {
        let factor = 1.0 - self.depth / MAX_DEPTH;
        let boost = |channel: u8| (channel as f32 + factor * HAZE_BOOST).clamp(0.0, 255.0) as u8;
        let base = self.kind.base_color();
        rgb8(boost(base.red), boost(base.green), boost(base.blue))
    }

    /// Where the object lands on screen for the current view.
    pub fn project(&self, view_mode: ViewMode, direction: Direction, canvas: &Canvas) -> Vec2 {
        match view_mode {
            ViewMode::Plan => self.position,
            ViewMode::Ground => {
                let x = match direction {
                    Direction::East => self.position.x,
                    Direction::West => canvas.width() - self.position.x,
                };
                vec2(x, canvas.height() - self.depth * GROUND_ALTITUDE_SCALE)
            }
        }
    }

    // Draw the object
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        state: &SimulationState,
        canvas: &Canvas,
    ) {
        let color = self.display_color();
        let screen_pos = self.project(state.view_mode, state.direction, canvas);

        surface.draw_circle(screen_pos, MARKER_RADIUS, color);
        if state.view_mode == ViewMode::Plan && self.trail.len() >= 2 {
            let points: Vec<Vec2> = self.trail.iter().copied().collect();
            surface.draw_polyline(&points, color);
        }
        let label_pos = screen_pos + Vec2::from(LABEL_OFFSET);
        surface.draw_text(label_pos, &self.id.to_string(), LABEL_SIZE, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn object_at(position: Vec2, depth: f32, velocity: Vec2) -> SkyObject {
        SkyObject::from_parts(1, ObjectType::Plane, Movement::Normal, position, depth, velocity)
    }

    #[test]
    fn spawn_stays_in_top_half() {
        let canvas = Canvas::default();
        let mut rng = StdRng::seed_from_u64(3);
        for id in 1..=200 {
            let obj = SkyObject::spawn(id, ObjectType::Meteor, Movement::Orbit, &canvas, &mut rng);
            assert!(obj.position().x >= 0.0 && obj.position().x < canvas.width());
            assert!(obj.position().y >= 0.0 && obj.position().y < canvas.height() / 2.0);
            assert!((MIN_DEPTH..=MAX_DEPTH).contains(&obj.depth()));
            let speed = obj.velocity().length();
            assert!(speed >= MIN_SPEED - 1e-4 && speed <= MAX_SPEED + 1e-4);
            assert!(obj.trail().is_empty());
        }
    }

    #[test]
    fn drift_scales_with_speed_multiplier() {
        let mut obj = object_at(vec2(100.0, 100.0), 50.0, vec2(2.0, -1.0));
        obj.drift(1.5);
        assert_relative_eq!(obj.position().x, 103.0);
        assert_relative_eq!(obj.position().y, 98.5);
    }

    #[test]
    fn every_movement_currently_drifts() {
        for movement in Movement::ALL {
            let mut obj = SkyObject::from_parts(
                1,
                ObjectType::Satellite,
                movement,
                vec2(10.0, 10.0),
                0.0,
                vec2(1.0, 1.0),
            );
            kinematics_for(movement)(&mut obj, 2.0);
            assert_eq!(obj.position(), vec2(12.0, 12.0));
        }
    }

    #[test]
    fn trail_keeps_the_ten_most_recent_positions() {
        let canvas = Canvas::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut obj = object_at(vec2(0.5, 0.5), 50.0, vec2(1.0, 1.0));
        for _ in 0..25 {
            obj.update(1.0, &canvas, &mut rng);
        }
        assert_eq!(obj.trail().len(), TRAIL_CAPACITY);
        assert_eq!(*obj.trail().back().unwrap(), obj.position());
        assert_relative_eq!(obj.trail().front().unwrap().x, 16.5);
    }

    #[test]
    fn depth_is_clamped() {
        let mut obj = object_at(vec2(0.0, 0.0), 99.95, Vec2::ZERO);
        obj.flicker_depth(0.2);
        assert_relative_eq!(obj.depth(), MAX_DEPTH);
        let mut obj = object_at(vec2(0.0, 0.0), 0.1, Vec2::ZERO);
        obj.flicker_depth(-0.2);
        assert_relative_eq!(obj.depth(), MIN_DEPTH);
    }

    #[test]
    fn leaving_an_edge_snaps_to_the_opposite_edge() {
        let canvas = Canvas::default();
        let mut rng = StdRng::seed_from_u64(5);

        let mut right = object_at(vec2(999.0, 100.0), 50.0, vec2(2.5, 0.0));
        right.update(1.0, &canvas, &mut rng);
        assert_eq!(right.position().x, 0.0);
        // The trail keeps the overshooting position
        assert_relative_eq!(right.trail().back().unwrap().x, 1001.5);

        let mut left = object_at(vec2(1.0, 100.0), 50.0, vec2(-2.5, 0.0));
        left.update(1.0, &canvas, &mut rng);
        assert_eq!(left.position().x, canvas.width());

        let mut bottom = object_at(vec2(10.0, 699.0), 50.0, vec2(0.0, 3.0));
        bottom.update(1.0, &canvas, &mut rng);
        assert_eq!(bottom.position().y, 0.0);

        let mut top = object_at(vec2(10.0, 0.5), 50.0, vec2(0.0, -3.0));
        top.update(1.0, &canvas, &mut rng);
        assert_eq!(top.position().y, canvas.height());
    }

    #[test]
    fn exact_edge_is_not_wrapped() {
        let canvas = Canvas::default();
        let mut obj = object_at(vec2(canvas.width(), canvas.height()), 50.0, Vec2::ZERO);
        obj.wrap_edges(&canvas);
        assert_eq!(obj.position(), vec2(canvas.width(), canvas.height()));
    }

    #[test]
    fn closer_objects_are_brighter() {
        let near = object_at(Vec2::ZERO, 0.0, Vec2::ZERO);
        let far = object_at(Vec2::ZERO, 100.0, Vec2::ZERO);
        assert_eq!(near.display_color(), rgb8(255, 80, 80));
        assert_eq!(far.display_color(), rgb8(255, 0, 0));
    }

    #[test]
    fn plan_projection_is_identity() {
        let canvas = Canvas::default();
        let obj = object_at(vec2(321.0, 123.0), 40.0, Vec2::ZERO);
        assert_eq!(obj.project(ViewMode::Plan, Direction::West, &canvas), vec2(321.0, 123.0));
    }

    #[test]
    fn ground_projection_uses_depth_as_altitude() {
        let canvas = Canvas::default();
        let obj = object_at(vec2(300.0, 123.0), 40.0, Vec2::ZERO);
        let east = obj.project(ViewMode::Ground, Direction::East, &canvas);
        let west = obj.project(ViewMode::Ground, Direction::West, &canvas);
        assert_relative_eq!(east.x, 300.0);
        assert_relative_eq!(west.x, 700.0);
        assert_relative_eq!(east.y, 500.0);
        assert_relative_eq!(west.y, 500.0);
    }
}
