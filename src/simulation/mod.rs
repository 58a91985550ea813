//! World - owned object buffer plus the fixed-timestep loop around it.
//!
//! The loop is the sole writer during a tick; the renderer and other
//! systems read between ticks through the transform buffer or snapshots.
//! Orchestration only - the actual physics lives in `systems/`.

use std::collections::HashSet;

use crate::core::Clock;
use crate::domain::object::GameObject;
use crate::systems::walls::Obstacle;

#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/random.rs"]
mod random;
#[path = "step/frame.rs"]
mod frame;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod events;
mod facade;
mod scheduler;

pub use config::PhysicsConfig;
pub use events::{EventPayload, PhysicsEvent};
pub use facade::World;
pub use scheduler::{FrameScheduler, LoopState, NullScheduler};

/// Number of f32 lanes per object in the transform transfer buffer:
/// row, col, height, angle, velocity.
pub const TRANSFORM_STRIDE: usize = 5;

/// The simulation world.
pub struct WorldCore {
    objects: Vec<GameObject>,
    config: PhysicsConfig,

    // Loop state
    loop_state: LoopState,
    visible: bool,
    last_tick_ms: Option<f64>,
    accumulator_ms: f64,
    scheduler: Box<dyn FrameScheduler>,
    clock: Clock,
    frame_count: u64,

    // Caches and queues
    obstacles: Vec<Obstacle>,
    statics_dirty: bool,
    overlaps: HashSet<(String, String)>,
    events: Vec<PhysicsEvent>,
    transform_buffer: Vec<f32>,
    rng_state: u32,
}

impl WorldCore {
    /// Create an empty world with default tuning.
    pub fn new() -> Self {
        init::create_world_core(PhysicsConfig::default())
    }

    /// Create an empty world with explicit tuning (tests override the
    /// constants here).
    pub fn with_config(config: PhysicsConfig) -> Self {
        init::create_world_core(config)
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.config.gravity = gravity;
    }

    /// Replace the frame source. The default `NullScheduler` suits hosts
    /// that poll `wants_frame()`.
    pub fn set_scheduler(&mut self, scheduler: Box<dyn FrameScheduler>) {
        self.scheduler = scheduler;
    }

    // === OBJECT MANAGEMENT ===

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn object(&self, id: &str) -> Option<&GameObject> {
        self.objects.iter().find(|obj| obj.id == id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Add one object. Returns false (and changes nothing) on a duplicate id.
    pub fn add_object(&mut self, obj: GameObject) -> bool {
        commands::add_object(self, obj)
    }

    /// Remove an object by id. Unknown ids are a no-op returning false.
    pub fn remove_object(&mut self, id: &str) -> bool {
        commands::remove_object(self, id)
    }

    /// Remove every object and all derived state.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Replace the world contents with a parsed scene bundle.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        commands::load_scene_json(self, json)
    }

    // === IMPULSES ===

    /// Add a velocity vector along `angle_deg`, converting force through
    /// the object's mass. Unknown ids and non-dynamic bodies are no-ops.
    pub fn apply_impulse(&mut self, id: &str, angle_deg: f32, force: f32) {
        commands::apply_impulse(self, id, angle_deg, force)
    }

    /// Add vertical velocity scaled by inverse mass. Unknown ids and
    /// non-dynamic bodies are no-ops.
    pub fn apply_vertical_impulse(&mut self, id: &str, force: f32) {
        commands::apply_vertical_impulse(self, id, force)
    }

    // === LOOP LIFECYCLE ===

    /// Begin running. Idempotent.
    pub fn start(&mut self) {
        frame::start(self)
    }

    /// Stop running and withdraw any pending frame request. Idempotent.
    pub fn stop(&mut self) {
        frame::stop(self)
    }

    /// Page-visibility signal, independent of the active-set check.
    pub fn set_visible(&mut self, visible: bool) {
        frame::set_visible(self, visible)
    }

    /// Advance with a host-supplied timestamp in milliseconds.
    pub fn frame(&mut self, now_ms: f64) {
        frame::frame(self, now_ms)
    }

    /// Advance using the internal clock; convenience for hosts that do not
    /// pass `requestAnimationFrame` timestamps through.
    pub fn tick(&mut self) {
        let now = self.clock.elapsed_ms();
        frame::frame(self, now)
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    /// True while the host should keep delivering frames.
    pub fn wants_frame(&self) -> bool {
        self.loop_state == LoopState::Running && self.visible
    }

    pub fn has_active(&self) -> bool {
        self.objects
            .iter()
            .filter_map(|obj| obj.physics.as_ref())
            .any(|body| body.active)
    }

    pub fn active_count(&self) -> usize {
        self.objects
            .iter()
            .filter_map(|obj| obj.physics.as_ref())
            .filter(|body| body.active)
            .count()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // === OUTPUT ===

    /// Drain the queued overlap/collision events.
    pub fn take_events(&mut self) -> Vec<PhysicsEvent> {
        std::mem::take(&mut self.events)
    }

    /// Refill the transform transfer buffer and return the object count.
    /// Layout per object: row, col, height, angle, velocity (zeros for
    /// decoration without physics).
    pub fn sync_transforms(&mut self) -> usize {
        self.transform_buffer.clear();
        for obj in &self.objects {
            self.transform_buffer.push(obj.row);
            self.transform_buffer.push(obj.col);
            match &obj.physics {
                Some(body) => {
                    self.transform_buffer.push(body.height);
                    self.transform_buffer.push(body.angle);
                    self.transform_buffer.push(body.velocity);
                }
                None => {
                    self.transform_buffer.extend_from_slice(&[0.0, 0.0, 0.0]);
                }
            }
        }
        self.objects.len()
    }

    /// Pointer into the transform buffer (for zero-copy JS reads).
    pub fn transforms_ptr(&self) -> *const f32 {
        self.transform_buffer.as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.transform_buffer.len()
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
