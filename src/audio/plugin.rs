use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::states::BattleState;

/// Channel for unit vocalizations (hit grunts, death cries)
#[derive(Resource)]
pub struct UnitSoundChannel;

/// Channel for projectile impact sounds
#[derive(Resource)]
pub struct ImpactSoundChannel;

/// Caps how many limited sounds may start within one window so that a
/// volley landing on one frame does not stack into a wall of noise.
#[derive(Resource)]
pub struct SoundLimiter {
    pub max_per_window: u32,
    pub played_this_window: u32,
    pub window: Timer,
}

impl Default for SoundLimiter {
    fn default() -> Self {
        Self {
            max_per_window: 6,
            played_this_window: 0,
            window: Timer::from_seconds(0.1, TimerMode::Repeating),
        }
    }
}

impl SoundLimiter {
    /// Returns true if a sound may start now, counting it against the window.
    pub fn try_play(&mut self) -> bool {
        if self.played_this_window < self.max_per_window {
            self.played_this_window += 1;
            true
        } else {
            false
        }
    }
}

/// Plays a sound through the given channel if the limiter has headroom.
pub fn play_limited_sound<T: Resource>(
    channel: &AudioChannel<T>,
    asset_server: &AssetServer,
    path: &'static str,
    limiter: &mut SoundLimiter,
) {
    if limiter.try_play() {
        channel.play(asset_server.load(path)).with_volume(0.4);
    }
}

fn tick_sound_limiter(time: Res<Time>, mut limiter: ResMut<SoundLimiter>) {
    limiter.window.tick(time.delta());
    if limiter.window.just_finished() {
        limiter.played_this_window = 0;
    }
}

/// Registers the kira audio channels. Only call this when the app carries
/// bevy_kira_audio's AudioPlugin; headless runs skip it and the cue systems
/// degrade to no-ops through their Option-wrapped channel parameters.
pub fn register_channels(app: &mut App) {
    app.add_audio_channel::<UnitSoundChannel>()
        .add_audio_channel::<ImpactSoundChannel>();
}

pub fn plugin(app: &mut App) {
    app.init_resource::<SoundLimiter>()
        .add_systems(Update, tick_sound_limiter)
        .add_systems(
            Update,
            (
                super::systems::hit_reaction_cue_system,
                super::systems::death_cue_system,
                super::systems::impact_cue_system,
            )
                .run_if(in_state(BattleState::Running)),
        );
}
