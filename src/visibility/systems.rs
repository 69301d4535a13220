use bevy::prelude::*;

use crate::unit::components::UnitParts;
use crate::visibility::components::{FogVisibility, NeedsVisibilityInit, RenderLayer};
use crate::visibility::events::VisibilityEvent;
use crate::visibility::resources::LayerTable;

/// Issues one forced visibility pass for freshly spawned units so their parts
/// start on well-defined layers even when the requested value matches the
/// default flag.
pub fn force_initial_visibility_system(
    mut commands: Commands,
    query: Query<(Entity, &FogVisibility), With<NeedsVisibilityInit>>,
    mut events: MessageWriter<VisibilityEvent>,
) {
    for (entity, fog) in query.iter() {
        events.write(VisibilityEvent::forced(entity, fog.visible));
        commands.entity(entity).remove::<NeedsVisibilityInit>();
    }
}

/// Applies visibility changes to a unit's sub-parts.
///
/// A non-forced request matching the stored flag is a no-op. Otherwise the
/// flag is updated and every part is reassigned within its own partition:
/// world-render parts move between `units_visible`/`units_hidden`, minimap
/// parts between `minimap_visible`/`minimap_hidden`. Parts on layers outside
/// both partitions are left untouched.
pub fn set_visibility_system(
    table: Res<LayerTable>,
    mut events: MessageReader<VisibilityEvent>,
    mut units: Query<(&mut FogVisibility, &UnitParts)>,
    mut layers: Query<&mut RenderLayer>,
) {
    for event in events.read() {
        let Ok((mut fog, parts)) = units.get_mut(event.target) else {
            continue;
        };

        if !event.force && event.visible == fog.visible {
            continue;
        }

        fog.visible = event.visible;

        for part in [parts.model, parts.minimap_icon] {
            let Ok(mut layer) = layers.get_mut(part) else {
                continue;
            };

            if table.is_world_layer(layer.0) {
                layer.0 = table.world_layer_for(event.visible);
            } else if table.is_minimap_layer(layer.0) {
                layer.0 = table.minimap_layer_for(event.visible);
            }
        }
    }
}
