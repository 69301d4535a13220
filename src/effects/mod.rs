pub mod components;
pub mod impact_effects;
pub mod plugin;
pub mod systems;

pub use components::SpentEffect;
pub use impact_effects::ImpactEffects;
pub use plugin::plugin;
