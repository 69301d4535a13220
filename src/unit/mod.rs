pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{AnimationFlags, Decay, Faction, Lifecycle, NavObstacle, Unit, UnitParts};
pub use plugin::plugin;
pub use systems::{decay_system, handle_death_system, hit_reaction_system};
