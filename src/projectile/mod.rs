pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use components::{
    calculate_launch, FlightMode, LaunchData, Projectile, ProjectileTarget, RotationMode,
};
pub use events::{
    CollisionCategory, CollisionEvent, ImpactOutcome, LaunchProjectileEvent, ProjectileImpactEvent,
};
pub use plugin::plugin;
