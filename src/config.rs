/*
 * Configuration Module
 *
 * Command line configuration for a night sky run. Everything is checked up
 * front so a bad combination stops the program before a window opens.
 */

use clap::Parser;

use crate::canvas::Canvas;
use crate::error::SkyError;
use crate::pacer::step_size_for;
use crate::spawner::SpawnPlan;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "night-sky")]
#[command(about = "Watch planes, helicopters, satellites and meteors cross the night sky")]
#[command(long_about = None)]
pub struct SkyConfig {
    /// Number of objects in the sky
    #[arg(short, long, default_value_t = crate::MAX_OBJECTS)]
    pub count: usize,

    /// Maximum number of objects of any one type
    #[arg(short = 'p', long, default_value_t = crate::MAX_PER_TYPE)]
    pub per_type_cap: usize,

    /// Canvas width in pixels
    #[arg(long, default_value_t = crate::WIDTH)]
    pub width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = crate::HEIGHT)]
    pub height: f32,

    /// Simulation steps per second
    #[arg(long, default_value_t = crate::TARGET_FPS)]
    pub fps: f32,

    /// Seed for a reproducible sky (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            count: crate::MAX_OBJECTS,
            per_type_cap: crate::MAX_PER_TYPE,
            width: crate::WIDTH,
            height: crate::HEIGHT,
            fps: crate::TARGET_FPS,
            seed: None,
            verbose: false,
        }
    }
}

impl SkyConfig {
    pub fn canvas(&self) -> Result<Canvas, SkyError> {
        Canvas::new(self.width, self.height)
    }

    pub fn spawn_plan(&self) -> Result<SpawnPlan, SkyError> {
        SpawnPlan::new(self.count, self.per_type_cap)
    }

    pub fn validate(&self) -> Result<(), SkyError> {
        self.canvas()?;
        self.spawn_plan()?;
        step_size_for(self.fps)?;
        Ok(())
    }
}
