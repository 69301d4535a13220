use bevy::app::AppExit;
use bevy::prelude::*;
use rand::Rng;

use crate::combat::components::{Health, Hitbox};
use crate::game::resources::{BattleClock, BattleConfig, BattleRng, VolleyTimer};
use crate::projectile::components::{FlightMode, ProjectileTarget, RotationMode};
use crate::projectile::events::LaunchProjectileEvent;
use crate::states::BattleState;
use crate::unit::components::{
    AnimationFlags, Faction, Lifecycle, NavObstacle, Unit, UnitParts,
};
use crate::visibility::components::{FogVisibility, NeedsVisibilityInit, RenderLayer};
use crate::visibility::resources::LayerTable;

/// Height above a unit's feet that projectiles launch from
const LAUNCH_HEIGHT: f32 = 1.5;
/// Distance between the two squad lines at spawn
const SQUAD_SEPARATION: f32 = 24.0;
/// Lateral spacing between units in a squad line
const SQUAD_SPACING: f32 = 4.0;

pub fn begin_battle(mut next_state: ResMut<NextState<BattleState>>) {
    next_state.set(BattleState::Running);
}

/// Spawns the two opposing squads facing each other across the battlefield.
///
/// Each unit gets a model part and a minimap icon part as children; those
/// carry the render layers that fog visibility swaps, and the model is what
/// sinks during decay.
pub fn setup_battle(
    mut commands: Commands,
    config: Res<BattleConfig>,
    layers: Res<LayerTable>,
    mut rng: ResMut<BattleRng>,
) {
    for (faction, line_z) in [
        (Faction::Crimson, -SQUAD_SEPARATION / 2.0),
        (Faction::Azure, SQUAD_SEPARATION / 2.0),
    ] {
        for i in 0..config.squad_size {
            let x = (i as f32 - (config.squad_size as f32 - 1.0) / 2.0) * SQUAD_SPACING;
            let jitter = Vec3::new(
                rng.0.gen_range(-0.5..0.5),
                0.0,
                rng.0.gen_range(-0.5..0.5),
            );
            let position = Vec3::new(x, 0.0, line_z) + jitter;

            // Parts are children of the unit, so they carry identity
            // transforms and inherit the unit's position.
            let model = commands
                .spawn((
                    Transform::default(),
                    RenderLayer(layers.world_layer_for(true)),
                ))
                .id();
            let minimap_icon = commands
                .spawn((
                    Transform::default(),
                    RenderLayer(layers.minimap_layer_for(true)),
                ))
                .id();

            commands
                .spawn((
                    Unit,
                    faction,
                    Health::new(config.unit_health),
                    Lifecycle::Alive,
                    Hitbox::default(),
                    NavObstacle::default(),
                    AnimationFlags::default(),
                    FogVisibility::default(),
                    NeedsVisibilityInit,
                    UnitParts {
                        model,
                        minimap_icon,
                    },
                    Transform::from_translation(position),
                ))
                .add_children(&[model, minimap_icon]);
        }
    }

    info!(
        "battle started: {} units per squad",
        config.squad_size
    );
}

/// Fires a scripted volley on each timer tick: every living unit launches at
/// the nearest living hostile, alternating between arcing and tracking shots.
pub fn volley_system(
    time: Res<Time>,
    mut timer: ResMut<VolleyTimer>,
    mut rng: ResMut<BattleRng>,
    units: Query<(Entity, &Transform, &Faction, &Lifecycle), With<Unit>>,
    mut launches: MessageWriter<LaunchProjectileEvent>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }

    for (shooter, transform, faction, lifecycle) in units.iter() {
        if !lifecycle.is_alive() {
            continue;
        }

        let nearest = units
            .iter()
            .filter(|(_, _, other_faction, other_lifecycle)| {
                faction.is_hostile_to(**other_faction) && other_lifecycle.is_alive()
            })
            .min_by(|(_, a, _, _), (_, b, _, _)| {
                let da = transform.translation.distance_squared(a.translation);
                let db = transform.translation.distance_squared(b.translation);
                da.total_cmp(&db)
            });
        let Some((target, _, _, _)) = nearest else {
            continue;
        };

        let start = transform.translation + Vec3::Y * LAUNCH_HEIGHT;
        let damage = rng.0.gen_range(25..=45);
        let event = if rng.0.gen_bool(0.5) {
            LaunchProjectileEvent::new(
                start,
                ProjectileTarget::Unit(target),
                damage,
                FlightMode::BallisticArc,
            )
            .with_rotation(RotationMode::AlignToVelocity)
        } else {
            LaunchProjectileEvent::new(
                start,
                ProjectileTarget::Unit(target),
                damage,
                FlightMode::Tracking,
            )
            .with_rotation(RotationMode::SpinAroundAxis)
        };
        launches.write(event.with_owner(shooter));
    }
}

/// Ends the battle when one side has no living units left, or when the
/// battle clock runs out.
pub fn check_battle_complete(
    time: Res<Time>,
    mut clock: ResMut<BattleClock>,
    units: Query<(&Faction, &Lifecycle), With<Unit>>,
    mut next_state: ResMut<NextState<BattleState>>,
) {
    clock.0.tick(time.delta());

    let mut crimson_alive = 0;
    let mut azure_alive = 0;
    let mut spawned_any = false;
    for (faction, lifecycle) in units.iter() {
        spawned_any = true;
        if lifecycle.is_alive() {
            match faction {
                Faction::Crimson => crimson_alive += 1,
                Faction::Azure => azure_alive += 1,
            }
        }
    }

    if clock.0.is_finished() {
        info!(
            "battle timed out: crimson {} alive, azure {} alive",
            crimson_alive, azure_alive
        );
        next_state.set(BattleState::Complete);
    } else if spawned_any && (crimson_alive == 0 || azure_alive == 0) {
        let winner = if crimson_alive > 0 { "crimson" } else { "azure" };
        info!("battle complete: {} wins", winner);
        next_state.set(BattleState::Complete);
    }
}

pub fn exit_on_complete(mut app_exit: MessageWriter<AppExit>) {
    app_exit.write(AppExit::Success);
}
