pub mod components;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::{GravityAffected, Speed, Velocity};
pub use plugin::plugin;
pub use resources::Gravity;
pub use systems::ballistic_integration_system;
