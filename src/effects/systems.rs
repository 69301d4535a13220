use bevy::prelude::*;
use bevy_hanabi::prelude::*;

use super::components::SpentEffect;
use super::impact_effects::ImpactEffects;
use crate::projectile::events::{ImpactOutcome, ProjectileImpactEvent};

/// Spawns a one-shot particle burst at each impact point. A successful unit
/// hit gets no burst, its feedback comes from the unit's own hit reaction.
///
/// Runs headless too: without the ImpactEffects resource the impact events
/// are simply consumed with nothing spawned.
pub fn spawn_impact_burst_system(
    mut commands: Commands,
    mut events: MessageReader<ProjectileImpactEvent>,
    impact_effects: Option<Res<ImpactEffects>>,
) {
    for event in events.read() {
        let Some(effects) = impact_effects.as_ref() else {
            continue;
        };
        let handle = match event.outcome {
            ImpactOutcome::TargetHit => continue,
            ImpactOutcome::Terrain => effects.ground_burst.clone(),
            ImpactOutcome::TargetLost | ImpactOutcome::NoEffect => effects.fizzle.clone(),
        };
        commands.spawn((
            ParticleEffect::new(handle),
            Transform::from_translation(event.position),
            SpentEffect::default(),
        ));
    }
}

/// Despawns burst entities once their particles have played out.
pub fn cleanup_spent_effects_system(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut SpentEffect)>,
) {
    for (entity, mut spent) in query.iter_mut() {
        spent.timer.tick(time.delta());
        if spent.timer.is_finished() {
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_message::<ProjectileImpactEvent>();
        app.add_systems(
            Update,
            (spawn_impact_burst_system, cleanup_spent_effects_system).chain(),
        );
        app
    }

    #[test]
    fn test_no_burst_without_effects_resource() {
        let mut app = test_app();

        app.world_mut().write_message(ProjectileImpactEvent::new(
            Vec3::ZERO,
            ImpactOutcome::Terrain,
        ));
        app.update();

        let mut query = app.world_mut().query::<&SpentEffect>();
        assert_eq!(query.iter(app.world()).count(), 0);
    }

    #[test]
    fn test_burst_spawned_at_impact_position() {
        let mut app = test_app();
        let mut effects = Assets::<EffectAsset>::default();
        let impact_effects = ImpactEffects {
            ground_burst: super::super::impact_effects::create_ground_burst_effect(&mut effects),
            fizzle: super::super::impact_effects::create_fizzle_effect(&mut effects),
        };
        app.insert_resource(effects);
        app.insert_resource(impact_effects);

        let position = Vec3::new(3.0, 0.0, -2.0);
        app.world_mut()
            .write_message(ProjectileImpactEvent::new(position, ImpactOutcome::Terrain));
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<&Transform, With<SpentEffect>>();
        let transforms: Vec<&Transform> = query.iter(app.world()).collect();
        assert_eq!(transforms.len(), 1);
        assert_eq!(transforms[0].translation, position);
    }

    #[test]
    fn test_successful_hit_spawns_no_burst() {
        let mut app = test_app();
        let mut effects = Assets::<EffectAsset>::default();
        let impact_effects = ImpactEffects {
            ground_burst: super::super::impact_effects::create_ground_burst_effect(&mut effects),
            fizzle: super::super::impact_effects::create_fizzle_effect(&mut effects),
        };
        app.insert_resource(effects);
        app.insert_resource(impact_effects);

        app.world_mut().write_message(ProjectileImpactEvent::new(
            Vec3::ZERO,
            ImpactOutcome::TargetHit,
        ));
        app.update();

        let mut query = app.world_mut().query::<&SpentEffect>();
        assert_eq!(query.iter(app.world()).count(), 0);
    }

    #[test]
    fn test_spent_effect_despawned_after_timeout() {
        let mut app = test_app();

        let entity = app
            .world_mut()
            .spawn((Transform::default(), SpentEffect::default()))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(2.0));
        app.update();

        assert!(app.world().get_entity(entity).is_err());
    }

    #[test]
    fn test_spent_effect_survives_before_timeout() {
        let mut app = test_app();

        let entity = app
            .world_mut()
            .spawn((Transform::default(), SpentEffect::default()))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(0.5));
        app.update();

        assert!(app.world().get_entity(entity).is_ok());
    }
}
