pub mod audio;
pub mod combat;
pub mod effects;
pub mod game;
pub mod movement;
pub mod prelude;
pub mod projectile;
pub mod states;
pub mod unit;
pub mod visibility;

pub use game::plugin as game_plugin;
