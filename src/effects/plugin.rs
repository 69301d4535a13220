use bevy::prelude::*;

use super::impact_effects::init_impact_effects;
use super::systems::{cleanup_spent_effects_system, spawn_impact_burst_system};
use crate::game::sets::SimSet;
use crate::states::BattleState;

/// Visual feedback plugin for projectile impacts
pub fn plugin(app: &mut App) {
    app.add_systems(Startup, init_impact_effects)
        .add_systems(
            Update,
            spawn_impact_burst_system
                .in_set(SimSet::Effects)
                .run_if(in_state(BattleState::Running)),
        )
        .add_systems(
            Update,
            cleanup_spent_effects_system.in_set(SimSet::Cleanup),
        );
}
