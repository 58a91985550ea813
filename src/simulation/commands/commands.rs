//! World mutation commands: object management and impulses.
//!
//! Every command is fire-and-forget: unknown ids and non-dynamic targets
//! return without effect, matching how the UI invokes them.

use crate::core::Vec2;
use crate::domain::object::{GameObject, PhysicsType};
use crate::domain::scene::SceneBundle;
use crate::systems::walls;

use super::{frame, WorldCore};

pub(super) fn add_object(world: &mut WorldCore, obj: GameObject) -> bool {
    if world.objects.iter().any(|existing| existing.id == obj.id) {
        console_warn!("physics: ignoring duplicate object id {}", obj.id);
        return false;
    }
    if walls::is_obstacle(&obj) {
        world.statics_dirty = true;
    }
    world.objects.push(obj);
    frame::wake(world);
    true
}

pub(super) fn remove_object(world: &mut WorldCore, id: &str) -> bool {
    let Some(idx) = world.objects.iter().position(|obj| obj.id == id) else {
        return false;
    };
    if walls::is_obstacle(&world.objects[idx]) {
        world.statics_dirty = true;
    }
    world.objects.remove(idx);
    world
        .overlaps
        .retain(|(first, second)| first != id && second != id);
    true
}

pub(super) fn clear(world: &mut WorldCore) {
    world.objects.clear();
    world.obstacles.clear();
    world.overlaps.clear();
    world.events.clear();
    world.statics_dirty = true;
    world.stop();
}

pub(super) fn load_scene_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let bundle = SceneBundle::from_json(json)?;
    clear(world);
    console_log!("physics: loaded scene with {} objects", bundle.objects.len());
    world.objects = bundle.objects;
    world.statics_dirty = true;
    frame::wake(world);
    Ok(())
}

pub(super) fn apply_impulse(world: &mut WorldCore, id: &str, angle_deg: f32, force: f32) {
    let Some(obj) = world.objects.iter_mut().find(|obj| obj.id == id) else {
        return;
    };
    let Some(body) = obj.physics.as_mut() else {
        return;
    };
    if body.physics_type != PhysicsType::Dynamic || body.mass.is_infinite() {
        return;
    }

    let velocity =
        Vec2::from_heading(body.angle, body.velocity) + Vec2::from_heading(angle_deg, force / body.mass);
    body.angle = velocity.heading_deg();
    body.velocity = velocity.length();
    body.active = body.compute_active();
    frame::wake(world);
}

pub(super) fn apply_vertical_impulse(world: &mut WorldCore, id: &str, force: f32) {
    let Some(obj) = world.objects.iter_mut().find(|obj| obj.id == id) else {
        return;
    };
    let Some(body) = obj.physics.as_mut() else {
        return;
    };
    if body.physics_type != PhysicsType::Dynamic || body.mass.is_infinite() {
        return;
    }

    body.vertical_velocity += force / body.mass;
    body.active = body.compute_active();
    frame::wake(world);
}
