pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::{FogVisibility, NeedsVisibilityInit, RenderLayer};
pub use events::VisibilityEvent;
pub use plugin::plugin;
pub use resources::{LayerId, LayerTable};
pub use systems::{force_initial_visibility_system, set_visibility_system};
