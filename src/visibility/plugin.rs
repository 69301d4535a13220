use bevy::prelude::*;

use crate::game::sets::SimSet;
use crate::states::BattleState;
use crate::visibility::events::VisibilityEvent;
use crate::visibility::resources::LayerTable;
use crate::visibility::systems::{force_initial_visibility_system, set_visibility_system};

pub fn plugin(app: &mut App) {
    app.init_resource::<LayerTable>()
        .add_message::<VisibilityEvent>()
        .add_systems(
            Update,
            (force_initial_visibility_system, set_visibility_system)
                .chain()
                .in_set(SimSet::Effects)
                .run_if(in_state(BattleState::Running)),
        );
}
