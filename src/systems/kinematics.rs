//! Kinematic integration for one body over a fixed time slice.
//!
//! Pure function of (state, dt, config) so every numeric property here is
//! directly unit-testable. The caller decides who gets integrated; static
//! and field bodies never reach this code.

use crate::core::Vec2;
use crate::domain::object::PhysicsState;
use crate::simulation::PhysicsConfig;

/// Advance `state` by `dt` seconds of friction, travel and gravity.
pub fn integrate(state: &PhysicsState, dt: f32, config: &PhysicsConfig) -> PhysicsState {
    let mut next = *state;

    // Horizontal travel along the heading.
    let displacement = Vec2::from_heading(next.angle, next.velocity);
    next.col += displacement.x * dt;
    next.row += displacement.y * dt;

    // Friction decay; the factor floors at zero so a large friction * dt
    // product can stop a body but never reverse it.
    next.velocity *= (1.0 - next.friction * dt).max(0.0);
    if next.velocity < config.stop_threshold {
        next.velocity = 0.0;
    }

    // Vertical motion under gravity.
    next.vertical_velocity -= config.gravity * dt;
    next.height += next.vertical_velocity * dt;

    // Ground bounce.
    if next.height <= 0.0 {
        next.height = 0.0;
        if next.vertical_velocity < 0.0 {
            next.vertical_velocity = -next.vertical_velocity * next.bounce_strength;
        }
        if next.vertical_velocity.abs() < config.stop_threshold {
            next.vertical_velocity = 0.0;
        }
    }

    // Anti infinite bounce: force-settle once both components are tiny.
    if next.height < config.rest_epsilon && next.vertical_velocity.abs() < config.rest_epsilon {
        next.height = 0.0;
        next.vertical_velocity = 0.0;
    }

    next.recompute_active();
    next
}
