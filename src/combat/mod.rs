pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use components::{Health, Hitbox};
pub use events::{DamageEvent, DeathEvent, HitReactionEvent};
pub use plugin::{plugin, CombatSets};
pub use systems::apply_damage_system;
