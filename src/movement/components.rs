use bevy::prelude::*;

/// Component for entities that have a movement speed.
/// This is a reusable component that can be used by any entity that needs to move.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Speed(pub f32);

impl Speed {
    pub fn new(speed: f32) -> Self {
        Self(speed)
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(10.0)
    }
}

/// Component for entities that have a velocity.
/// Velocity represents the current movement vector of an entity in world space.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity(pub Vec3);

impl Velocity {
    pub fn new(velocity: Vec3) -> Self {
        Self(velocity)
    }

    pub fn value(&self) -> Vec3 {
        self.0
    }

    pub fn direction(&self) -> Vec3 {
        self.0.normalize_or_zero()
    }
}

/// Marker for entities whose velocity is evolved under the global gravity
/// constant each tick. Ballistic projectiles carry this; tracking projectiles
/// steer themselves and do not.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct GravityAffected;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_creation() {
        let speed = Speed::new(15.0);
        assert_eq!(speed.value(), 15.0);
        assert_eq!(speed.0, 15.0);
    }

    #[test]
    fn test_speed_default() {
        let speed = Speed::default();
        assert_eq!(speed.value(), 10.0);
    }

    #[test]
    fn test_velocity_creation() {
        let velocity = Velocity::new(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(velocity.value(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_velocity_default() {
        let velocity = Velocity::default();
        assert_eq!(velocity.value(), Vec3::ZERO);
    }

    #[test]
    fn test_velocity_direction() {
        let velocity = Velocity::new(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(velocity.direction(), Vec3::X);
    }

    #[test]
    fn test_velocity_direction_zero() {
        let velocity = Velocity::new(Vec3::ZERO);
        assert_eq!(velocity.direction(), Vec3::ZERO);
    }

    #[test]
    fn test_components_can_be_added_to_entity() {
        use bevy::app::App;

        let mut app = App::new();

        let entity = app
            .world_mut()
            .spawn((
                Speed::new(20.0),
                Velocity::new(Vec3::new(5.0, 0.0, 5.0)),
                GravityAffected,
            ))
            .id();

        let speed = app.world().get::<Speed>(entity).unwrap();
        let velocity = app.world().get::<Velocity>(entity).unwrap();

        assert_eq!(speed.value(), 20.0);
        assert_eq!(velocity.value(), Vec3::new(5.0, 0.0, 5.0));
        assert!(app.world().get::<GravityAffected>(entity).is_some());
    }
}
