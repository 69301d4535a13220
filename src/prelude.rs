pub use bevy::prelude::*;
pub use crate::states::*;

// Re-export components
pub use crate::combat::components::*;
pub use crate::movement::components::*;
pub use crate::projectile::components::*;
pub use crate::unit::components::*;
pub use crate::visibility::components::*;

// Re-export events and shared resources
pub use crate::combat::events::*;
pub use crate::game::resources::*;
pub use crate::game::sets::SimSet;
pub use crate::movement::resources::*;
pub use crate::projectile::events::*;
pub use crate::visibility::events::*;
pub use crate::visibility::resources::*;
