use bevy::prelude::*;

use super::resources::{BattleClock, BattleConfig, BattleRng, Battlefield, VolleyTimer};
use super::sets::SimSet;
use super::systems::{
    begin_battle, check_battle_complete, exit_on_complete, setup_battle, volley_system,
};
use crate::states::BattleState;

/// Top-level battle plugin: owns the simulation set ordering, the shared
/// battle resources, and the battle lifecycle transitions.
pub fn plugin(app: &mut App) {
    app.init_resource::<Battlefield>()
        .init_resource::<BattleConfig>()
        .init_resource::<BattleClock>()
        .init_resource::<BattleRng>()
        .init_resource::<VolleyTimer>()
        .configure_sets(
            Update,
            (
                SimSet::Spawning,
                SimSet::Movement,
                SimSet::Collision,
                SimSet::Combat,
                SimSet::Effects,
                SimSet::Cleanup,
            )
                .chain(),
        )
        .add_systems(Update, begin_battle.run_if(in_state(BattleState::Setup)))
        .add_systems(OnEnter(BattleState::Running), setup_battle)
        .add_systems(
            Update,
            volley_system
                .in_set(SimSet::Spawning)
                .run_if(in_state(BattleState::Running)),
        )
        .add_systems(
            Update,
            check_battle_complete
                .in_set(SimSet::Cleanup)
                .run_if(in_state(BattleState::Running)),
        )
        .add_systems(OnEnter(BattleState::Complete), exit_on_complete);
}
