use bevy::prelude::*;

#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum BattleState {
    #[default]
    Setup,
    Running,
    Complete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battle_state_default_is_setup() {
        assert_eq!(BattleState::default(), BattleState::Setup);
    }

    #[test]
    fn battle_state_all_states_are_distinct() {
        let states = [
            BattleState::Setup,
            BattleState::Running,
            BattleState::Complete,
        ];
        for (i, s1) in states.iter().enumerate() {
            for (j, s2) in states.iter().enumerate() {
                if i != j {
                    assert_ne!(s1, s2, "States at indices {} and {} should be distinct", i, j);
                }
            }
        }
    }

    #[test]
    fn battle_state_derives_clone() {
        let state = BattleState::Running;
        let cloned = state.clone();
        assert_eq!(state, cloned);
    }
}
