//! Scrapyard Physics - tile-space physics and collision engine in WASM
//!
//! Drives player movement, thrown/dropped items, walls and trigger fields
//! for the scrapyard scene. Everything works in fractional tile units; the
//! renderer owns the pixel scale.
//!
//! Architecture:
//! - core/          - Shared math and platform helpers
//! - domain/        - Game objects and scene bundles
//! - systems/       - Kinematics, walls, collisions, stability guard
//! - simulation/    - World state, fixed-timestep loop, wasm facade

// Utils with logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod simulation;
pub mod systems;

pub use domain::object::{GameObject, PhysicsBody, PhysicsState, PhysicsType};
pub use domain::scene::SceneBundle;
pub use simulation::{
    EventPayload, FrameScheduler, LoopState, NullScheduler, PhysicsConfig, PhysicsEvent, World,
    WorldCore,
};
pub use systems::walls::Obstacle;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🦀 Scrapyard physics engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
