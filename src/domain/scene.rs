//! Scene bundle parsing.
//!
//! The world-setup collaborator ships the object list as one JSON document
//! (walls, door block and field, sell counter, chest, player). The engine
//! validates it once here; after that the simulation trusts the data.

use serde::{Deserialize, Serialize};

use super::object::{GameObject, PhysicsType};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneBundle {
    pub objects: Vec<GameObject>,
}

impl SceneBundle {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let bundle: SceneBundle =
            serde_json::from_str(json).map_err(|e| format!("invalid scene bundle: {e}"))?;
        bundle.validate()?;
        Ok(bundle)
    }

    fn validate(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for obj in &self.objects {
            if obj.id.is_empty() {
                return Err("object with empty id".to_string());
            }
            if !seen.insert(obj.id.as_str()) {
                return Err(format!("duplicate object id: {}", obj.id));
            }
            if obj.width <= 0.0 || obj.depth <= 0.0 || obj.height <= 0.0 {
                return Err(format!("object {} has a non-positive footprint", obj.id));
            }
            if let Some(body) = &obj.physics {
                if !(0.0..=1.0).contains(&body.friction) {
                    return Err(format!("object {} friction out of [0,1]", obj.id));
                }
                if !(0.0..=1.0).contains(&body.bounce_strength) {
                    return Err(format!("object {} bounceStrength out of [0,1]", obj.id));
                }
                if body.height < 0.0 {
                    return Err(format!("object {} starts below ground", obj.id));
                }
                if body.physics_type == PhysicsType::Static && body.mass.is_finite() {
                    return Err(format!("static object {} must have infinite mass", obj.id));
                }
            }
        }
        Ok(())
    }
}
