use bevy::prelude::*;
use bevy_kira_audio::AudioChannel;
use rand;

use super::plugin::{play_limited_sound, ImpactSoundChannel, SoundLimiter, UnitSoundChannel};
use crate::combat::events::{DeathEvent, HitReactionEvent};
use crate::projectile::events::{ImpactOutcome, ProjectileImpactEvent};

/// Plays a pain grunt when a unit takes a non-lethal hit.
pub fn hit_reaction_cue_system(
    mut events: MessageReader<HitReactionEvent>,
    asset_server: Option<Res<AssetServer>>,
    mut channel: Option<ResMut<AudioChannel<UnitSoundChannel>>>,
    mut limiter: Option<ResMut<SoundLimiter>>,
) {
    for _event in events.read() {
        if let (Some(asset_server), Some(channel), Some(limiter)) =
            (asset_server.as_ref(), channel.as_mut(), limiter.as_mut())
        {
            let sound_paths = [
                "sounds/units/grunt_01.ogg",
                "sounds/units/grunt_02.ogg",
                "sounds/units/grunt_03.ogg",
            ];
            let random_index = (rand::random::<f32>() * sound_paths.len() as f32) as usize;
            play_limited_sound(channel, asset_server, sound_paths[random_index], limiter);
        }
    }
}

/// Plays a death cry when a unit falls.
pub fn death_cue_system(
    mut events: MessageReader<DeathEvent>,
    asset_server: Option<Res<AssetServer>>,
    mut channel: Option<ResMut<AudioChannel<UnitSoundChannel>>>,
    mut limiter: Option<ResMut<SoundLimiter>>,
) {
    for _event in events.read() {
        if let (Some(asset_server), Some(channel), Some(limiter)) =
            (asset_server.as_ref(), channel.as_mut(), limiter.as_mut())
        {
            let sound_paths = [
                "sounds/units/death_cry_01.ogg",
                "sounds/units/death_cry_02.ogg",
            ];
            let random_index = (rand::random::<f32>() * sound_paths.len() as f32) as usize;
            play_limited_sound(channel, asset_server, sound_paths[random_index], limiter);
        }
    }
}

/// Plays the landing sound for each projectile impact. Ground strikes thud,
/// unit strikes crack, everything else whiffs quietly.
pub fn impact_cue_system(
    mut events: MessageReader<ProjectileImpactEvent>,
    asset_server: Option<Res<AssetServer>>,
    mut channel: Option<ResMut<AudioChannel<ImpactSoundChannel>>>,
    mut limiter: Option<ResMut<SoundLimiter>>,
) {
    for event in events.read() {
        if let (Some(asset_server), Some(channel), Some(limiter)) =
            (asset_server.as_ref(), channel.as_mut(), limiter.as_mut())
        {
            let path = match event.outcome {
                ImpactOutcome::Terrain => "sounds/impacts/dirt_thud.ogg",
                ImpactOutcome::TargetHit => "sounds/impacts/strike_crack.ogg",
                ImpactOutcome::TargetLost | ImpactOutcome::NoEffect => {
                    "sounds/impacts/whiff.ogg"
                }
            };
            play_limited_sound(channel, asset_server, path, limiter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Channels and the asset server are absent in these apps; the systems
    // must consume their events without panicking.
    #[test]
    fn test_cue_systems_run_without_audio_backend() {
        let mut app = App::new();
        app.add_message::<HitReactionEvent>();
        app.add_message::<DeathEvent>();
        app.add_message::<ProjectileImpactEvent>();
        app.add_systems(
            Update,
            (hit_reaction_cue_system, death_cue_system, impact_cue_system),
        );

        let entity = app.world_mut().spawn_empty().id();
        app.world_mut().write_message(HitReactionEvent::new(entity));
        app.world_mut()
            .write_message(DeathEvent::new(entity, Vec3::ZERO));
        app.world_mut().write_message(ProjectileImpactEvent::new(
            Vec3::ZERO,
            ImpactOutcome::Terrain,
        ));

        app.update();
    }
}
