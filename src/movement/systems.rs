use bevy::prelude::*;

use crate::movement::components::{GravityAffected, Velocity};
use crate::movement::resources::Gravity;

/// Evolves gravity-affected entities under constant acceleration.
///
/// Uses the closed-form step `p += v*dt + g*dt^2/2; v += g*dt`, which is exact
/// for constant acceleration regardless of tick length. A ballistic launch
/// therefore passes through its solved target point at the solved
/// time-to-target up to float rounding.
pub fn ballistic_integration_system(
    time: Res<Time>,
    gravity: Res<Gravity>,
    mut query: Query<(&mut Transform, &mut Velocity), With<GravityAffected>>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (mut transform, mut velocity) in query.iter_mut() {
        transform.translation += velocity.0 * dt + gravity.0 * (dt * dt * 0.5);
        velocity.0 += gravity.0 * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.insert_resource(Gravity::default());
        app.add_systems(Update, ballistic_integration_system);
        app
    }

    fn advance(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.update();
    }

    #[test]
    fn test_integration_matches_closed_form_after_many_ticks() {
        let mut app = test_app();

        let v0 = Vec3::new(4.95, 9.9, 4.95);
        let entity = app
            .world_mut()
            .spawn((
                Transform::from_translation(Vec3::ZERO),
                Velocity::new(v0),
                GravityAffected,
            ))
            .id();

        // 120 ticks of 1/60 s = 2 s of flight
        let dt = 1.0 / 60.0;
        for _ in 0..120 {
            advance(&mut app, dt);
        }

        let g = Vec3::new(0.0, -9.8, 0.0);
        let t = 2.0;
        let expected = v0 * t + g * (t * t * 0.5);

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert!(
            (transform.translation - expected).length() < 1e-3,
            "integrated {:?} vs closed-form {:?}",
            transform.translation,
            expected
        );
    }

    #[test]
    fn test_velocity_accumulates_gravity() {
        let mut app = test_app();

        let entity = app
            .world_mut()
            .spawn((
                Transform::from_translation(Vec3::ZERO),
                Velocity::new(Vec3::ZERO),
                GravityAffected,
            ))
            .id();

        advance(&mut app, 1.0);

        let velocity = app.world().get::<Velocity>(entity).unwrap();
        assert!((velocity.0.y - (-9.8)).abs() < 1e-4);
        assert_eq!(velocity.0.x, 0.0);
        assert_eq!(velocity.0.z, 0.0);
    }

    #[test]
    fn test_entities_without_marker_do_not_fall() {
        let mut app = test_app();

        let entity = app
            .world_mut()
            .spawn((Transform::from_translation(Vec3::ZERO), Velocity::new(Vec3::ZERO)))
            .id();

        advance(&mut app, 1.0);

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::ZERO);
    }
}
