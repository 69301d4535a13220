use bevy::prelude::*;

/// How long a fire-and-forget burst entity stays alive before cleanup.
/// Long enough for the slowest particle lifetime in any impact burst.
pub const SPENT_EFFECT_SECS: f32 = 1.5;

/// Timer component for one-shot particle burst entities.
#[derive(Component)]
pub struct SpentEffect {
    pub timer: Timer,
}

impl Default for SpentEffect {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(SPENT_EFFECT_SECS, TimerMode::Once),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_spent_effect_default_duration() {
        let effect = SpentEffect::default();
        assert_eq!(
            effect.timer.duration(),
            Duration::from_secs_f32(SPENT_EFFECT_SECS)
        );
        assert!(!effect.timer.is_finished());
    }
}
