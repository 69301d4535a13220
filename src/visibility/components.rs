use bevy::prelude::*;

use crate::visibility::resources::LayerId;

/// Current fog-of-war visibility of a unit, as last applied to its parts.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FogVisibility {
    pub visible: bool,
}

impl Default for FogVisibility {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Layer tag carried by a unit sub-part (model or minimap icon).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLayer(pub LayerId);

/// Marker for freshly spawned units whose parts have not had a visibility
/// pass yet. The debounce in `set_visibility_system` would swallow a first
/// call that matches the default flag, so the first tick issues one forced
/// assignment and removes this marker.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct NeedsVisibilityInit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fog_visibility_defaults_visible() {
        assert!(FogVisibility::default().visible);
    }

    #[test]
    fn test_render_layer_equality() {
        assert_eq!(RenderLayer(LayerId(1)), RenderLayer(LayerId(1)));
        assert_ne!(RenderLayer(LayerId(1)), RenderLayer(LayerId(2)));
    }
}
