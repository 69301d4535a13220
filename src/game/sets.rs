use bevy::prelude::*;

/// System sets for explicit ordering of simulation systems.
/// Chained once by the game plugin; feature plugins place their systems
/// into the appropriate set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Launching projectiles, spawning units
    Spawning,
    /// Ballistic integration and tracking steps
    Movement,
    /// Overlap detection and impact resolution
    Collision,
    /// Damage application, death handling
    Combat,
    /// Visibility, orientation, particles, audio
    Effects,
    /// Decay and despawning
    Cleanup,
}
