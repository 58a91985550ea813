//! One fixed simulation step: kinematics -> wall resolver -> pairwise
//! detect/resolve -> stability guard, over the full object set.

use crate::core::Vec2;
use crate::domain::object::PhysicsType;
use crate::systems::collision::{detect, resolve_pair};
use crate::systems::{kinematics, stability, walls};

use super::{random, PhysicsEvent, WorldCore};

pub(super) fn fixed_step(world: &mut WorldCore, dt: f32) {
    // Static geometry is cached; commands flag it dirty on changes.
    if world.statics_dirty {
        world.obstacles = walls::collect_obstacles(&world.objects);
        world.statics_dirty = false;
    }

    integrate_and_clip(world, dt);
    sweep_pairs(world);

    for obj in world.objects.iter_mut() {
        stability::sanitize(obj, &world.config);
    }

    world.frame_count += 1;
}

/// Kinematics plus wall clipping, per dynamic finite-mass body.
fn integrate_and_clip(world: &mut WorldCore, dt: f32) {
    for idx in 0..world.objects.len() {
        let Some(body) = world.objects[idx].physics.as_ref() else {
            continue;
        };
        if body.physics_type != PhysicsType::Dynamic || body.mass.is_infinite() || !body.active {
            continue;
        }

        let Some(state) = world.objects[idx].physics_state() else {
            continue;
        };
        let mut next = kinematics::integrate(&state, dt, &world.config);
        walls::resolve(&mut next, &world.obstacles, &world.config);
        world.objects[idx].apply_state(&next);
    }
}

/// O(n^2) pair sweep with broad-phase cull. Emits overlap-onset events and
/// applies impulse exchange between finite-mass dynamics.
fn sweep_pairs(world: &mut WorldCore) {
    let count = world.objects.len();
    let mut current_overlaps = std::collections::HashSet::new();

    for i in 0..count {
        for j in (i + 1)..count {
            let (head, tail) = world.objects.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let (Some(body_a), Some(body_b)) = (a.physics.as_ref(), b.physics.as_ref()) else {
                continue;
            };
            // Walls belong to the wall resolver, not the pair sweep.
            if body_a.physics_type == PhysicsType::Static
                || body_b.physics_type == PhysicsType::Static
            {
                continue;
            }
            let (Some(state_a), Some(state_b)) = (a.physics_state(), b.physics_state()) else {
                continue;
            };
            let Some(_contact) = detect(&state_a, &state_b, world.config.broad_phase_range) else {
                continue;
            };

            // Overlap-onset events, once per side that defines one.
            let key = pair_key(&a.id, &b.id);
            let onset = !world.overlaps.contains(&key);
            current_overlaps.insert(key);
            if onset {
                if let Some(name) = body_a.event.as_deref() {
                    world.events.push(PhysicsEvent::overlap(name, &b.id));
                }
                if let Some(name) = body_b.event.as_deref() {
                    world.events.push(PhysicsEvent::overlap(name, &a.id));
                }
            }

            // Fields trigger but never push back.
            if body_a.physics_type == PhysicsType::Field
                || body_b.physics_type == PhysicsType::Field
            {
                continue;
            }
            // Infinite-mass dynamics are handled as obstacles already.
            if state_a.mass.is_infinite() || state_b.mass.is_infinite() {
                continue;
            }

            let mut normal = state_b.center() - state_a.center();
            if normal.length_squared() < 1e-10 {
                // Coincident centers: no direction to separate along, so
                // pick one at random. Recoverable anomaly, not an error.
                console_warn!(
                    "physics: coincident centers for {} and {}, using random normal",
                    a.id,
                    b.id
                );
                normal = Vec2::from_heading(random::random_heading(&mut world.rng_state), 1.0);
            } else {
                normal = normal.normalize();
            }

            let mut next_a = state_a;
            let mut next_b = state_b;
            resolve_pair(&mut next_a, &mut next_b, normal, &world.config);
            a.apply_state(&next_a);
            b.apply_state(&next_b);
        }
    }

    world.overlaps = current_overlaps;
}

/// Order-independent key for the overlap tracking set.
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
