/*
 * Night Sky Perceptions - Module Definitions
 *
 * This file defines the module structure for the night sky simulation.
 * The simulation core (catalog, sky objects, spawner, controls and the
 * simulation controller) does not depend on a window; app, input and ui
 * wire it into nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use canvas::Canvas;
pub use catalog::{Movement, ObjectType};
pub use config::SkyConfig;
pub use controls::{Bounds, Controls, InputEvent};
pub use error::SkyError;
pub use renderer::{RecordingSurface, Surface};
pub use simulation::{Flow, Simulation};
pub use sky_object::SkyObject;
pub use spawner::SpawnPlan;
pub use state::{Direction, SimulationState, ViewMode};

// Define modules
pub mod app;
pub mod canvas;
pub mod catalog;
pub mod config;
pub mod controls;
pub mod debug;
pub mod error;
pub mod input;
pub mod pacer;
pub mod renderer;
pub mod sampling;
pub mod simulation;
pub mod sky_object;
pub mod spawner;
pub mod state;
pub mod ui;

// Constants
pub const WIDTH: f32 = 1000.0;
pub const HEIGHT: f32 = 700.0;
pub const TARGET_FPS: f32 = 60.0;
pub const MAX_OBJECTS: usize = 7;
pub const MAX_PER_TYPE: usize = 4;
pub const TRAIL_CAPACITY: usize = 10;
pub const MARKER_RADIUS: f32 = 5.0;
pub const LABEL_SIZE: u32 = 14;
// Id label position relative to the marker
pub const LABEL_OFFSET: [f32; 2] = [8.0, -8.0];
