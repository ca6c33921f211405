/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that holds per-frame timing
 * shown in the inspector overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Simulation steps run in the last frame
 */

use std::time::Duration;

// Debug information to display
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub steps_this_frame: usize,
    pub total_steps: u64,
}

impl DebugInfo {
    pub fn record_frame(&mut self, fps: f32, frame_time: Duration, steps: usize) {
        self.fps = fps;
        self.frame_time = frame_time;
        self.steps_this_frame = steps;
        self.total_steps += steps as u64;
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}
