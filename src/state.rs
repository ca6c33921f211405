/*
 * Simulation State Module
 *
 * The view state the user changes through the on-screen controls: which
 * projection is shown, which way the ground observer is facing, and how fast
 * the sky moves. It is owned by the Simulation and passed by reference to
 * whatever needs to read it.
 */

use std::fmt;
use std::ops::RangeInclusive;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Looking down on the sky from above.
    #[default]
    Plan,
    /// Looking at the horizon, depth becomes altitude.
    Ground,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Plan => ViewMode::Ground,
            ViewMode::Ground => ViewMode::Plan,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Plan => "PLAN",
            ViewMode::Ground => "GROUND",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    East,
    West,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::East => "EAST",
            Direction::West => "WEST",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationState {
    pub view_mode: ViewMode,
    pub direction: Direction,
    speed_multiplier: f32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Plan,
            direction: Direction::East,
            speed_multiplier: 1.0,
        }
    }
}

impl SimulationState {
    pub const MIN_SPEED: f32 = 0.5;
    pub const MAX_SPEED: f32 = 3.0;

    pub fn speed_range() -> RangeInclusive<f32> {
        Self::MIN_SPEED..=Self::MAX_SPEED
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    // Out of range values are clamped, never rejected
    pub fn set_speed_multiplier(&mut self, speed: f32) {
        let range = Self::speed_range();
        self.speed_multiplier = speed.clamp(*range.start(), *range.end());
    }

    /// Map a slider position in `[0, 1]` to a speed multiplier.
    pub fn set_speed_from_ratio(&mut self, ratio: f32) {
        let ratio = ratio.clamp(0.0, 1.0);
        self.set_speed_multiplier(Self::MIN_SPEED + ratio * (Self::MAX_SPEED - Self::MIN_SPEED));
    }

    /// Where the current speed sits along the slider, in `[0, 1]`.
    pub fn speed_ratio(&self) -> f32 {
        (self.speed_multiplier - Self::MIN_SPEED) / (Self::MAX_SPEED - Self::MIN_SPEED)
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_in_plan_facing_east_at_normal_speed() {
        let state = SimulationState::default();
        assert_eq!(state.view_mode, ViewMode::Plan);
        assert_eq!(state.direction, Direction::East);
        assert_relative_eq!(state.speed_multiplier(), 1.0);
    }

    #[test]
    fn toggles_flip_back_and_forth() {
        let mut state = SimulationState::default();
        state.toggle_view_mode();
        state.toggle_direction();
        assert_eq!(state.view_mode, ViewMode::Ground);
        assert_eq!(state.direction, Direction::West);
        state.toggle_view_mode();
        state.toggle_direction();
        assert_eq!(state, SimulationState::default());
    }

    #[test]
    fn speed_is_clamped() {
        let mut state = SimulationState::default();
        state.set_speed_multiplier(10.0);
        assert_relative_eq!(state.speed_multiplier(), 3.0);
        state.set_speed_multiplier(-1.0);
        assert_relative_eq!(state.speed_multiplier(), 0.5);
        state.set_speed_from_ratio(2.0);
        assert_relative_eq!(state.speed_multiplier(), 3.0);
        assert!(SimulationState::speed_range().contains(&state.speed_multiplier()));
    }

    #[test]
    fn ratio_round_trips_through_speed() {
        let mut state = SimulationState::default();
        state.set_speed_from_ratio(0.4);
        assert_relative_eq!(state.speed_multiplier(), 1.5);
        assert_relative_eq!(state.speed_ratio(), 0.4, epsilon = 1e-6);
    }

    #[test]
    fn labels() {
        assert_eq!(ViewMode::Ground.to_string(), "GROUND");
        assert_eq!(Direction::West.to_string(), "WEST");
    }
}
