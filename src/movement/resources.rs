use bevy::prelude::*;

/// Global gravitational acceleration applied to `GravityAffected` entities.
/// Inserted once at startup; the launch solver reads the same constant so
/// computed arcs and integrated flight agree.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Gravity(pub Vec3);

impl Gravity {
    pub fn new(acceleration: Vec3) -> Self {
        Self(acceleration)
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self(Vec3::new(0.0, -9.8, 0.0))
    }
}
