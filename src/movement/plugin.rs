use bevy::prelude::*;

use crate::game::sets::SimSet;
use crate::movement::resources::Gravity;
use crate::movement::systems::ballistic_integration_system;
use crate::states::BattleState;

pub fn plugin(app: &mut App) {
    app.init_resource::<Gravity>().add_systems(
        Update,
        ballistic_integration_system
            .in_set(SimSet::Movement)
            .run_if(in_state(BattleState::Running)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_inserts_gravity() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<BattleState>();
        app.add_plugins(plugin);

        let gravity = app.world().resource::<Gravity>();
        assert!(gravity.y() < 0.0);
    }
}
