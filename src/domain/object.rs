//! GameObject and its attached physics body.
//!
//! Positions are top-left corners in fractional tile units. Objects without
//! a `physics` body are pure decoration and never enter the simulation.

use serde::{Deserialize, Serialize};

/// How a body participates in the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicsType {
    /// Walls. Never integrated, consumed only by the wall resolver.
    Static,
    /// Trigger volume. Raises events on overlap, applies no impulse.
    Field,
    #[default]
    Dynamic,
}

/// Simulation state attached to a [`GameObject`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsBody {
    /// Direction of horizontal travel in degrees, [0, 360).
    pub angle: f32,
    /// Horizontal speed magnitude in tiles/sec, always >= 0.
    pub velocity: f32,
    /// Horizontal decay coefficient per second, [0, 1].
    pub friction: f32,
    /// Altitude above ground in tiles, >= 0.
    pub height: f32,
    /// Signed vertical speed in tiles/sec.
    pub vertical_velocity: f32,
    /// Fraction of speed retained through a bounce, [0, 1].
    pub bounce_strength: f32,
    /// Positive, or infinite for immovable geometry. Serialized as a number
    /// or the string `"infinity"` (JSON has no infinity literal).
    #[serde(with = "mass_serde")]
    pub mass: f32,
    /// Whether this body still needs per-tick work.
    pub active: bool,
    /// Logical event raised when this body overlaps another.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    pub physics_type: PhysicsType,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            angle: 0.0,
            velocity: 0.0,
            friction: 0.2,
            height: 0.0,
            vertical_velocity: 0.0,
            bounce_strength: 0.5,
            mass: 1.0,
            active: false,
            event: None,
            physics_type: PhysicsType::Dynamic,
        }
    }
}

impl PhysicsBody {
    /// A body is live while any motion component is nonzero.
    pub fn compute_active(&self) -> bool {
        self.velocity > 0.0 || self.height > 0.0 || self.vertical_velocity.abs() > 0.0
    }
}

/// An entity placed on the tile grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameObject {
    /// Stable unique id, e.g. `"player"` or `"sell-field"`.
    pub id: String,
    /// Top-left row in fractional tile units.
    pub row: f32,
    /// Top-left column in fractional tile units.
    pub col: f32,
    /// Footprint width in tiles (columns).
    #[serde(default = "one")]
    pub width: f32,
    /// Footprint depth in tiles (rows).
    #[serde(default = "one")]
    pub depth: f32,
    /// Vertical extent in tiles. Not the altitude - that lives on the body.
    #[serde(default = "one")]
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physics: Option<PhysicsBody>,
}

fn one() -> f32 {
    1.0
}

/// Flat copy of everything the physics systems read and write for one
/// object. Cheap to copy; derived per tick and written back afterwards.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsState {
    pub row: f32,
    pub col: f32,
    pub width: f32,
    pub depth: f32,
    /// Vertical extent of the object (the GameObject `height` field).
    pub extent: f32,
    pub angle: f32,
    pub velocity: f32,
    pub friction: f32,
    /// Altitude above ground (the PhysicsBody `height` field).
    pub height: f32,
    pub vertical_velocity: f32,
    pub bounce_strength: f32,
    pub mass: f32,
    pub active: bool,
}

impl GameObject {
    /// Snapshot for the physics systems, or `None` for decoration.
    pub fn physics_state(&self) -> Option<PhysicsState> {
        let body = self.physics.as_ref()?;
        Some(PhysicsState {
            row: self.row,
            col: self.col,
            width: self.width,
            depth: self.depth,
            extent: self.height,
            angle: body.angle,
            velocity: body.velocity,
            friction: body.friction,
            height: body.height,
            vertical_velocity: body.vertical_velocity,
            bounce_strength: body.bounce_strength,
            mass: body.mass,
            active: body.active,
        })
    }

    /// Write a post-step state back into the object. Only the mutable
    /// simulation fields move; identity, footprint and tuning stay put.
    pub fn apply_state(&mut self, state: &PhysicsState) {
        self.row = state.row;
        self.col = state.col;
        if let Some(body) = self.physics.as_mut() {
            body.angle = state.angle;
            body.velocity = state.velocity;
            body.height = state.height;
            body.vertical_velocity = state.vertical_velocity;
            body.active = state.active;
        }
    }
}

impl PhysicsState {
    pub fn center(&self) -> crate::core::Vec2 {
        crate::core::Vec2::new(self.col + self.width / 2.0, self.row + self.depth / 2.0)
    }

    pub fn aabb(&self) -> crate::core::Aabb {
        crate::core::Aabb::from_footprint(self.row, self.col, self.width, self.depth)
    }

    pub fn recompute_active(&mut self) {
        self.active = self.velocity > 0.0 || self.height > 0.0 || self.vertical_velocity.abs() > 0.0;
    }
}

mod mass_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MassRepr {
        Number(f32),
        Text(String),
    }

    pub fn serialize<S: Serializer>(mass: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if mass.is_infinite() {
            serializer.serialize_str("infinity")
        } else {
            serializer.serialize_f32(*mass)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        match MassRepr::deserialize(deserializer)? {
            MassRepr::Number(mass) if mass > 0.0 => Ok(mass),
            MassRepr::Number(mass) => Err(D::Error::custom(format!(
                "mass must be positive, got {mass}"
            ))),
            MassRepr::Text(text) if text.eq_ignore_ascii_case("infinity") => Ok(f32::INFINITY),
            MassRepr::Text(text) => Err(D::Error::custom(format!("unrecognized mass: {text:?}"))),
        }
    }
}
