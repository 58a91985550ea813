use wasm_bindgen::prelude::*;

use crate::domain::object::GameObject;

use super::{WorldCore, TRANSFORM_STRIDE};

/// JS-facing wrapper around [`WorldCore`].
///
/// The host drives the loop: while `wants_frame()` is true it keeps
/// calling `frame(timestamp)` (or `tick()`) from `requestAnimationFrame`,
/// and forwards `visibilitychange` into `set_visible`.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with default tuning.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn object_count(&self) -> usize {
        self.core.object_count()
    }

    #[wasm_bindgen(getter)]
    pub fn active_count(&self) -> usize {
        self.core.active_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 {
        self.core.frame_count()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    // === SCENE / OBJECTS ===

    /// Replace the world contents with a scene bundle.
    pub fn load_scene(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_scene_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Add a single object described as JSON. Returns false on a duplicate
    /// id.
    pub fn add_object_json(&mut self, json: String) -> Result<bool, JsValue> {
        let obj: GameObject = serde_json::from_str(&json)
            .map_err(|e| JsValue::from_str(&format!("invalid object: {e}")))?;
        Ok(self.core.add_object(obj))
    }

    /// Remove an object by id.
    pub fn remove_object(&mut self, id: String) -> bool {
        self.core.remove_object(&id)
    }

    /// Clear all objects
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === LOOP ===

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.core.set_visible(visible);
    }

    /// True while the host should keep scheduling animation frames.
    pub fn wants_frame(&self) -> bool {
        self.core.wants_frame()
    }

    /// Advance with the `requestAnimationFrame` timestamp.
    pub fn frame(&mut self, timestamp_ms: f64) {
        self.core.frame(timestamp_ms);
    }

    /// Advance using the engine's own clock.
    pub fn tick(&mut self) {
        self.core.tick();
    }

    // === IMPULSES ===

    pub fn apply_impulse(&mut self, id: String, angle_deg: f32, force: f32) {
        self.core.apply_impulse(&id, angle_deg, force);
    }

    pub fn apply_vertical_impulse(&mut self, id: String, force: f32) {
        self.core.apply_vertical_impulse(&id, force);
    }

    // === OUTPUT ===

    /// Drain queued field/collision events as a JSON array.
    pub fn take_events_json(&mut self) -> String {
        let events = self.core.take_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Refill the transform transfer buffer; returns the object count.
    pub fn sync_transforms(&mut self) -> usize {
        self.core.sync_transforms()
    }

    /// Pointer to the transform buffer (for JS views over wasm memory).
    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms_len()
    }

    /// f32 lanes per object in the transform buffer.
    pub fn transform_stride(&self) -> usize {
        TRANSFORM_STRIDE
    }

    /// Object ids in buffer order, as a JSON array of strings.
    pub fn object_ids_json(&self) -> String {
        let ids: Vec<&str> = self.core.objects().iter().map(|obj| obj.id.as_str()).collect();
        serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
