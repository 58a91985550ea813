//! Wall resolver: clips a moved body against static geometry.
//!
//! Obstacles are resolved one by one in list order along the axis of
//! minimum penetration. This is not globally minimized across obstacles,
//! which can jitter in corners; gameplay tuning depends on the behavior,
//! so it stays. The stability guard recovers the pathological cases.

use crate::core::Aabb;
use crate::domain::object::{GameObject, PhysicsState, PhysicsType};
use crate::simulation::PhysicsConfig;

/// Cached geometry of one immovable obstacle.
#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    pub row: f32,
    pub col: f32,
    pub width: f32,
    pub depth: f32,
    /// Vertical extent; bodies above it pass over.
    pub height: f32,
}

impl Obstacle {
    fn aabb(&self) -> Aabb {
        Aabb::from_footprint(self.row, self.col, self.width, self.depth)
    }
}

/// True for objects the wall resolver owns: static walls and any
/// infinite-mass body that is not a trigger field.
pub fn is_obstacle(obj: &GameObject) -> bool {
    match &obj.physics {
        Some(body) => {
            body.physics_type == PhysicsType::Static
                || (body.mass.is_infinite() && body.physics_type != PhysicsType::Field)
        }
        None => false,
    }
}

/// Rebuild the obstacle cache from the full object list.
pub fn collect_obstacles(objects: &[GameObject]) -> Vec<Obstacle> {
    objects
        .iter()
        .filter(|obj| is_obstacle(obj))
        .map(|obj| Obstacle {
            row: obj.row,
            col: obj.col,
            width: obj.width,
            depth: obj.depth,
            height: obj.height,
        })
        .collect()
}

/// Clip `state` against every obstacle. Returns true if any correction was
/// applied; the body is marked active in that case.
pub fn resolve(state: &mut PhysicsState, obstacles: &[Obstacle], config: &PhysicsConfig) -> bool {
    let mut corrected = false;

    for obstacle in obstacles {
        // Height gate: a body that has risen above the wall clears it.
        if state.height > obstacle.height {
            continue;
        }
        if !state.aabb().overlaps(&obstacle.aabb()) {
            continue;
        }

        let target = obstacle.aabb();
        let body = state.aabb();

        // Penetration depth for each way out of the obstacle.
        let push_left = body.right - target.left;
        let push_right = target.right - body.left;
        let push_up = body.bottom - target.top;
        let push_down = target.bottom - body.top;

        let min_push = push_left.min(push_right).min(push_up).min(push_down);

        if min_push == push_left {
            state.col = target.left - state.width;
            state.angle = 180.0 - state.angle;
        } else if min_push == push_right {
            state.col = target.right;
            state.angle = 180.0 - state.angle;
        } else if min_push == push_up {
            state.row = target.top - state.depth;
            state.angle = -state.angle;
        } else {
            state.row = target.bottom;
            state.angle = -state.angle;
        }
        state.angle = state.angle.rem_euclid(360.0);

        let impact_speed = state.velocity;
        state.velocity *= state.bounce_strength;

        // A hit also hops the body a little so items visibly bounce off
        // walls instead of sliding along them.
        let kick = impact_speed * config.bounce_kick * state.bounce_strength;
        if kick > state.vertical_velocity {
            state.vertical_velocity = kick;
            if state.height == 0.0 {
                state.height = 0.01;
            }
        }

        state.active = true;
        corrected = true;
    }

    corrected
}
