pub mod plugin;
pub mod resources;
pub mod sets;
pub mod systems;

pub use plugin::plugin;
pub use resources::{
    BattleClock, BattleConfig, BattleRng, Battlefield, FactionMaterials, VolleyTimer,
};
pub use sets::SimSet;
