/*
 * Simulation Module
 *
 * The Simulation owns the sky objects and the view state and acts as the
 * controller between them: pending input events are drained first, then
 * every object is advanced once, then the scene can be rendered.
 */

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::catalog::ObjectType;
use crate::config::SkyConfig;
use crate::controls::{Controls, Hit, InputEvent};
use crate::error::SkyError;
use crate::renderer::{self, Surface};
use crate::sky_object::SkyObject;
use crate::spawner::{self, SpawnPlan};
use crate::state::SimulationState;

/// Whether the frame loop should keep going after handling input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Simulation {
    objects: Vec<SkyObject>,
    state: SimulationState,
    controls: Controls,
    canvas: Canvas,
    rng: StdRng,
}

impl Simulation {
    /// Spawn a fresh sky. Fails if the plan can never be satisfied.
    pub fn new(canvas: Canvas, plan: SpawnPlan, mut rng: StdRng) -> Result<Self, SkyError> {
        let objects = spawner::spawn(plan, &canvas, &mut rng)?;
        Ok(Self::with_objects(canvas, objects, rng))
    }

    pub fn from_config(config: &SkyConfig) -> Result<Self, SkyError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config.canvas()?, config.spawn_plan()?, rng)
    }

    pub fn with_objects(canvas: Canvas, objects: Vec<SkyObject>, rng: StdRng) -> Self {
        Self {
            objects,
            state: SimulationState::default(),
            controls: Controls::for_canvas(&canvas),
            canvas,
            rng,
        }
    }

    pub fn objects(&self) -> &[SkyObject] {
        &self.objects
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn type_counts(&self) -> Vec<(ObjectType, usize)> {
        spawner::type_counts(&self.objects)
    }

    /// Apply a batch of events in order. Stops at the first quit.
    pub fn handle_events<I>(&mut self, events: I) -> Flow
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_event(event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::Quit => {
                info!("quit requested");
                return Flow::Quit;
            }
            InputEvent::PointerDown(point) => match self.controls.hit_test(point) {
                Some(Hit::ViewButton) => {
                    self.state.toggle_view_mode();
                    info!(view_mode = %self.state.view_mode, "view mode changed");
                }
                Some(Hit::DirectionButton) => {
                    self.state.toggle_direction();
                    info!(direction = %self.state.direction, "direction changed");
                }
                Some(Hit::Slider) => {
                    self.controls.start_drag();
                    debug!("speed slider grabbed");
                }
                None => {}
            },
            InputEvent::PointerUp => {
                if self.controls.is_dragging {
                    debug!(speed = self.state.speed_multiplier(), "speed slider released");
                }
                self.controls.end_drag();
            }
            InputEvent::PointerMove(point) => {
                // Moving without a grab does nothing
                if self.controls.is_dragging {
                    let ratio = self.controls.slider.ratio_at(point.x);
                    self.state.set_speed_from_ratio(ratio);
                }
            }
        }
        Flow::Continue
    }

    // Advance every object by one frame
    pub fn step(&mut self) {
        let speed = self.state.speed_multiplier();
        for object in &mut self.objects {
            object.update(speed, &self.canvas, &mut self.rng);
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        renderer::render_scene(surface, self);
    }
}
