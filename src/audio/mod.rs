pub mod plugin;
pub mod systems;

pub use plugin::{plugin, register_channels, ImpactSoundChannel, SoundLimiter, UnitSoundChannel};
