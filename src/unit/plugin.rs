use bevy::prelude::*;

use crate::combat::plugin::CombatSets;
use crate::game::sets::SimSet;
use crate::states::BattleState;
use crate::unit::systems::{
    clear_hit_flags_system, decay_system, handle_death_system, hit_reaction_system,
};

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            handle_death_system,
            clear_hit_flags_system,
            hit_reaction_system,
        )
            .chain()
            .in_set(CombatSets::Death)
            .run_if(in_state(BattleState::Running)),
    )
    .add_systems(
        Update,
        decay_system
            .in_set(SimSet::Cleanup)
            .run_if(in_state(BattleState::Running)),
    );
}
