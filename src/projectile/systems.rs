use bevy::prelude::*;
use std::collections::HashSet;

use crate::combat::components::{Health, Hitbox};
use crate::combat::events::DamageEvent;
use crate::game::resources::{Battlefield, FactionMaterials};
use crate::movement::components::{GravityAffected, Speed, Velocity};
use crate::movement::resources::Gravity;
use crate::projectile::components::{
    calculate_launch, FlightMode, Projectile, ProjectileTarget, RotationMode, IMPACT_EPSILON,
    SPIN_RATE_DEG_PER_SEC, TRACK_AIM_OFFSET,
};
use crate::projectile::events::{
    CollisionCategory, CollisionEvent, ImpactOutcome, LaunchProjectileEvent, ProjectileImpactEvent,
};
use crate::unit::components::{Faction, Unit};

/// Spawns projectiles for queued launch requests.
///
/// Ballistic launches get their one-time initial velocity from the closed-form
/// solver and are handed to the gravity integrator; tracking launches carry
/// only a speed and steer themselves. A launch at a unit that no longer exists
/// is aborted with a log, never a dangling aim point.
pub fn launch_projectile_system(
    mut commands: Commands,
    mut events: MessageReader<LaunchProjectileEvent>,
    unit_transforms: Query<&Transform, With<Unit>>,
    factions: Query<&Faction>,
    gravity: Res<Gravity>,
    materials: Option<Res<FactionMaterials>>,
) {
    for event in events.read() {
        let aim = match event.target {
            ProjectileTarget::Unit(entity) => match unit_transforms.get(entity) {
                Ok(transform) => transform.translation,
                Err(_) => {
                    warn!("launch aborted: target {:?} is gone", entity);
                    continue;
                }
            },
            ProjectileTarget::Point(point) => point,
        };

        let mut projectile = commands.spawn((
            Projectile {
                flight_mode: event.flight_mode,
                rotation_mode: event.rotation_mode,
                damage: event.damage,
                owner: event.owner,
                target: event.target,
                target_position: aim,
            },
            Transform::from_translation(event.start),
            Speed(event.track_speed),
        ));

        if event.flight_mode == FlightMode::BallisticArc {
            let launch = calculate_launch(event.start, aim, event.max_arc_height, gravity.y());
            projectile.insert((Velocity::new(launch.initial_velocity), GravityAffected));
            debug!(
                "ballistic launch from {:?}, time to target {:.2}s",
                event.start, launch.time_to_target
            );
        }

        // Cosmetic faction tint, only when a rendering front-end provides it
        if let (Some(materials), Some(owner)) = (materials.as_ref(), event.owner) {
            if let Ok(faction) = factions.get(owner) {
                projectile.insert(MeshMaterial3d(materials.for_faction(*faction)));
            }
        }
    }
}

/// A ballistic projectile without a physics body is a configuration error:
/// log it and attach a default body instead of failing.
pub fn ensure_ballistic_body_system(
    mut commands: Commands,
    query: Query<(Entity, &Projectile), Without<Velocity>>,
) {
    for (entity, projectile) in query.iter() {
        if projectile.flight_mode == FlightMode::BallisticArc {
            error!(
                "ballistic projectile {:?} has no physics body, attaching a default",
                entity
            );
            commands
                .entity(entity)
                .insert((Velocity::default(), GravityAffected));
        }
    }
}

/// Advances tracking projectiles toward their aim point.
///
/// Movement is capped at `speed * dt` so the projectile never overshoots.
/// Within `IMPACT_EPSILON` of the aim point the impact resolves immediately:
/// a living target takes damage exactly once, a dead target yields nothing,
/// and in both cases the projectile despawns. A target that vanished
/// mid-flight leaves the projectile with no valid aim point, so it despawns
/// without effect.
pub fn tracking_motion_system(
    mut commands: Commands,
    time: Res<Time>,
    mut projectiles: Query<(Entity, &mut Transform, &mut Projectile, &Speed)>,
    targets: Query<&Transform, (With<Unit>, Without<Projectile>)>,
    healths: Query<&Health>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut impact_events: MessageWriter<ProjectileImpactEvent>,
) {
    for (entity, mut transform, mut projectile, speed) in projectiles.iter_mut() {
        if projectile.flight_mode != FlightMode::Tracking {
            continue;
        }

        let aim = match projectile.target {
            ProjectileTarget::Unit(target) => match targets.get(target) {
                Ok(target_transform) => target_transform.translation + TRACK_AIM_OFFSET,
                Err(_) => {
                    warn!(
                        "tracking projectile {:?} lost its target, despawning",
                        entity
                    );
                    impact_events.write(ProjectileImpactEvent::new(
                        transform.translation,
                        ImpactOutcome::TargetLost,
                    ));
                    commands.entity(entity).try_despawn();
                    continue;
                }
            },
            ProjectileTarget::Point(point) => point,
        };
        projectile.target_position = aim;

        let step = speed.value() * time.delta_secs();
        transform.translation = transform.translation.move_towards(aim, step);

        if transform.translation.distance(aim) < IMPACT_EPSILON {
            let outcome = match projectile.target {
                ProjectileTarget::Unit(target)
                    if healths.get(target).is_ok_and(|h| !h.is_dead()) =>
                {
                    damage_events.write(DamageEvent::with_source(
                        target,
                        projectile.damage,
                        entity,
                    ));
                    ImpactOutcome::TargetHit
                }
                _ => ImpactOutcome::NoEffect,
            };
            impact_events.write(ProjectileImpactEvent::new(transform.translation, outcome));
            commands.entity(entity).try_despawn();
        }
    }
}

/// Overlap detection for ballistic projectiles: unit hitboxes by sphere
/// distance, terrain by the battlefield's ground plane. Emits classified
/// collision events; resolution happens separately.
pub fn arc_collision_system(
    projectiles: Query<(Entity, &Transform, &Projectile, &Velocity), With<GravityAffected>>,
    units: Query<(Entity, &Transform, &Hitbox), (With<Unit>, Without<Projectile>)>,
    battlefield: Res<Battlefield>,
    mut collisions: MessageWriter<CollisionEvent>,
) {
    for (entity, transform, projectile, velocity) in projectiles.iter() {
        if projectile.flight_mode != FlightMode::BallisticArc {
            continue;
        }

        for (unit, unit_transform, hitbox) in units.iter() {
            if transform.translation.distance(unit_transform.translation) <= hitbox.radius() {
                collisions.write(CollisionEvent {
                    projectile: entity,
                    other: Some(unit),
                    category: CollisionCategory::Unit,
                });
            }
        }

        // A launch from ground height sits on the plane for its first tick;
        // only a descending projectile can strike terrain.
        if velocity.0.y < 0.0 && transform.translation.y <= battlefield.ground_height {
            collisions.write(CollisionEvent {
                projectile: entity,
                other: None,
                category: CollisionCategory::Terrain,
            });
        }
    }
}

/// Resolves classified collisions for ballistic projectiles.
///
/// Terrain destroys the projectile with no damage. The intended target takes
/// damage if it is still alive; a collision with the intended target that can
/// deliver nothing is a defect in the content setup, logged and resolved as
/// destroy-with-no-effect rather than left dangling. Any other body is
/// ignored and the flight continues.
pub fn impact_resolution_system(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionEvent>,
    projectiles: Query<(&Projectile, &Transform)>,
    healths: Query<&Health>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut impact_events: MessageWriter<ProjectileImpactEvent>,
) {
    let mut resolved: HashSet<Entity> = HashSet::new();

    for event in collisions.read() {
        if resolved.contains(&event.projectile) {
            continue;
        }
        let Ok((projectile, transform)) = projectiles.get(event.projectile) else {
            continue;
        };

        match event.category {
            CollisionCategory::Terrain => {
                impact_events.write(ProjectileImpactEvent::new(
                    transform.translation,
                    ImpactOutcome::Terrain,
                ));
                commands.entity(event.projectile).try_despawn();
                resolved.insert(event.projectile);
            }
            CollisionCategory::Unit => {
                let Some(other) = event.other else {
                    continue;
                };
                if projectile.target != ProjectileTarget::Unit(other) {
                    // Not the intended target: the flight continues
                    continue;
                }

                if healths.get(other).is_ok_and(|h| !h.is_dead()) {
                    damage_events.write(DamageEvent::with_source(
                        other,
                        projectile.damage,
                        event.projectile,
                    ));
                    impact_events.write(ProjectileImpactEvent::new(
                        transform.translation,
                        ImpactOutcome::TargetHit,
                    ));
                } else {
                    error!(
                        "projectile {:?} impact on {:?} had no valid outcome",
                        event.projectile, other
                    );
                    impact_events.write(ProjectileImpactEvent::new(
                        transform.translation,
                        ImpactOutcome::NoEffect,
                    ));
                }
                commands.entity(event.projectile).try_despawn();
                resolved.insert(event.projectile);
            }
        }
    }
}

/// Orients projectiles according to their rotation mode.
///
/// Velocity alignment uses the physics velocity for ballistic flight and the
/// direction to the aim point for tracking, skipping degenerate zero-length
/// directions. Spinning applies a constant roll around the local X axis.
pub fn orientation_system(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &Projectile, Option<&Velocity>)>,
) {
    for (mut transform, projectile, velocity) in query.iter_mut() {
        match projectile.rotation_mode {
            RotationMode::AlignToVelocity => {
                let direction = match projectile.flight_mode {
                    FlightMode::BallisticArc => velocity.map(|v| v.0).unwrap_or(Vec3::ZERO),
                    FlightMode::Tracking => projectile.target_position - transform.translation,
                };
                if direction.length_squared() > 0.0 {
                    transform.look_to(direction, Vec3::Y);
                }
            }
            RotationMode::SpinAroundAxis => {
                transform.rotate_local_x(SPIN_RATE_DEG_PER_SEC.to_radians() * time.delta_secs());
            }
            RotationMode::None => {}
        }
    }
}
