/*
 * Frame Pacer Module
 *
 * Fixed timestep pacing for the simulation. Elapsed frame time is collected
 * in an accumulator and converted into whole simulation steps, so objects
 * move at the target rate no matter how fast the window redraws.
 */

use std::time::Duration;

use crate::error::SkyError;

// Backlog beyond this many steps in one frame is dropped
pub const MAX_STEPS_PER_FRAME: usize = 5;

#[derive(Clone, Debug)]
pub struct FramePacer {
    step_size: Duration,
    accumulator: Duration,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self {
            step_size: Duration::from_secs_f32(1.0 / crate::TARGET_FPS),
            accumulator: Duration::ZERO,
        }
    }
}

impl FramePacer {
    pub fn new(target_fps: f32) -> Result<Self, SkyError> {
        Ok(Self {
            step_size: step_size_for(target_fps)?,
            accumulator: Duration::ZERO,
        })
    }

    pub fn step_size(&self) -> Duration {
        self.step_size
    }

    /// Add a frame's elapsed time and return how many steps to run now.
    pub fn advance(&mut self, frame_time: Duration) -> usize {
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.step_size && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step_size;
            steps += 1;
        }

        if steps == MAX_STEPS_PER_FRAME {
            self.accumulator = self.accumulator.min(self.step_size);
        }
        steps
    }

    // Throw away accumulated time, e.g. while paused
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

/// Length of one simulation step at `target_fps`. Rates that are not
/// positive, or so small the step does not fit in a `Duration`, are rejected.
pub fn step_size_for(target_fps: f32) -> Result<Duration, SkyError> {
    if !(target_fps.is_finite() && target_fps > 0.0) {
        return Err(SkyError::InvalidFrameRate(target_fps));
    }
    Duration::try_from_secs_f32(1.0 / target_fps)
        .map_err(|_| SkyError::InvalidFrameRate(target_fps))
}
