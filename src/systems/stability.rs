//! Stability guard: clamps runaway state instead of failing.
//!
//! This is a best-effort visual simulation, so extreme velocities and
//! escaped positions are silently corrected and logged rather than
//! surfaced as errors.

use crate::domain::object::GameObject;
use crate::simulation::PhysicsConfig;

/// Clamp one object's velocities and position back into sane bounds.
/// Returns true if an out-of-bounds reset was applied.
pub fn sanitize(obj: &mut GameObject, config: &PhysicsConfig) -> bool {
    let Some(body) = obj.physics.as_mut() else {
        return false;
    };

    if body.velocity > config.max_speed {
        body.velocity = config.max_speed;
    }
    body.vertical_velocity = body
        .vertical_velocity
        .clamp(-config.max_speed, config.max_speed);

    let bound = config.world_bound;
    if obj.row.abs() > bound || obj.col.abs() > bound {
        console_warn!(
            "physics: object {} escaped to ({}, {}), resetting",
            obj.id,
            obj.row,
            obj.col
        );
        obj.row = obj.row.clamp(-bound, bound);
        obj.col = obj.col.clamp(-bound, bound);
        body.velocity = 0.0;
        body.vertical_velocity = 0.0;
        body.height = 0.0;
        body.active = false;
        return true;
    }

    false
}

/// Scale every body's velocities down after a long simulation pause, so
/// the first frame back does not replay the whole backgrounded interval as
/// one violent step.
pub fn dampen_after_pause(objects: &mut [GameObject], config: &PhysicsConfig) {
    for obj in objects.iter_mut() {
        if let Some(body) = obj.physics.as_mut() {
            body.velocity *= config.pause_damping;
            body.vertical_velocity *= config.pause_damping;
        }
    }
}
