use bevy::prelude::*;

use super::events::{CollisionEvent, LaunchProjectileEvent, ProjectileImpactEvent};
use super::systems::{
    arc_collision_system, ensure_ballistic_body_system, impact_resolution_system,
    launch_projectile_system, orientation_system, tracking_motion_system,
};
use crate::game::sets::SimSet;
use crate::states::BattleState;

/// Projectile plugin covering launch, flight, collision and impact resolution
pub fn plugin(app: &mut App) {
    app.add_message::<LaunchProjectileEvent>()
        .add_message::<CollisionEvent>()
        .add_message::<ProjectileImpactEvent>()
        .add_systems(
            Update,
            (launch_projectile_system, ensure_ballistic_body_system)
                .chain()
                .in_set(SimSet::Spawning)
                .run_if(in_state(BattleState::Running)),
        )
        .add_systems(
            Update,
            (tracking_motion_system, orientation_system)
                .chain()
                .in_set(SimSet::Movement)
                .run_if(in_state(BattleState::Running)),
        )
        .add_systems(
            Update,
            (arc_collision_system, impact_resolution_system)
                .chain()
                .in_set(SimSet::Collision)
                .run_if(in_state(BattleState::Running)),
        );
}
