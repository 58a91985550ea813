//! Core helpers shared across the engine.

#[macro_use]
pub mod log;

pub mod aabb;
pub mod clock;
pub mod vec2;

pub use aabb::Aabb;
pub use clock::Clock;
pub use vec2::Vec2;
