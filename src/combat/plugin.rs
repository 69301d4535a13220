use bevy::prelude::*;

use super::events::{DamageEvent, DeathEvent, HitReactionEvent};
use super::systems::apply_damage_system;
use crate::game::sets::SimSet;
use crate::states::BattleState;

/// System sets for combat systems ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSets {
    /// Damage application and health updates
    Damage,
    /// Death side effects and decay bookkeeping
    Death,
}

/// Combat plugin providing unified damage and death handling
pub fn plugin(app: &mut App) {
    app.add_message::<DamageEvent>()
        .add_message::<DeathEvent>()
        .add_message::<HitReactionEvent>()
        .configure_sets(
            Update,
            (CombatSets::Damage, CombatSets::Death)
                .chain()
                .in_set(SimSet::Combat)
                .run_if(in_state(BattleState::Running)),
        )
        .add_systems(
            Update,
            apply_damage_system
                .in_set(CombatSets::Damage)
                .run_if(in_state(BattleState::Running)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_registers_messages() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<BattleState>();
        app.add_plugins(plugin);

        let entity = app.world_mut().spawn_empty().id();
        app.world_mut().write_message(DamageEvent::new(entity, 10));
        app.world_mut().write_message(DeathEvent::new(entity, Vec3::ZERO));
        app.world_mut().write_message(HitReactionEvent::new(entity));

        // If we get here without panicking, messages are registered
    }

    #[test]
    fn test_plugin_configures_system_sets() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<BattleState>();
        app.add_plugins(plugin);

        app.update();
    }
}
