use bevy::prelude::*;

/// Render/minimap layer tag used to classify unit sub-parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u8);

/// Explicit layer/category table for the visibility partitions.
///
/// Two independent partitions exist: world rendering
/// (`units_visible`/`units_hidden`) and the minimap
/// (`minimap_visible`/`minimap_hidden`). The table is a startup-initialized
/// resource rather than process-wide lazily-cached state, so every entity is
/// created against a fully defined classification.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerTable {
    pub units_visible: LayerId,
    pub units_hidden: LayerId,
    pub minimap_visible: LayerId,
    pub minimap_hidden: LayerId,
}

impl LayerTable {
    pub fn is_world_layer(&self, layer: LayerId) -> bool {
        layer == self.units_visible || layer == self.units_hidden
    }

    pub fn is_minimap_layer(&self, layer: LayerId) -> bool {
        layer == self.minimap_visible || layer == self.minimap_hidden
    }

    /// Layer a world-partition part should carry for the given visibility.
    pub fn world_layer_for(&self, visible: bool) -> LayerId {
        if visible {
            self.units_visible
        } else {
            self.units_hidden
        }
    }

    /// Layer a minimap-partition part should carry for the given visibility.
    pub fn minimap_layer_for(&self, visible: bool) -> LayerId {
        if visible {
            self.minimap_visible
        } else {
            self.minimap_hidden
        }
    }
}

impl Default for LayerTable {
    fn default() -> Self {
        Self {
            units_visible: LayerId(1),
            units_hidden: LayerId(2),
            minimap_visible: LayerId(3),
            minimap_hidden: LayerId(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_layers_are_distinct() {
        let table = LayerTable::default();
        let layers = [
            table.units_visible,
            table.units_hidden,
            table.minimap_visible,
            table.minimap_hidden,
        ];
        for (i, a) in layers.iter().enumerate() {
            for (j, b) in layers.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_partition_classification() {
        let table = LayerTable::default();
        assert!(table.is_world_layer(table.units_visible));
        assert!(table.is_world_layer(table.units_hidden));
        assert!(!table.is_world_layer(table.minimap_visible));

        assert!(table.is_minimap_layer(table.minimap_hidden));
        assert!(!table.is_minimap_layer(table.units_visible));
    }

    #[test]
    fn test_layer_for_visibility() {
        let table = LayerTable::default();
        assert_eq!(table.world_layer_for(true), table.units_visible);
        assert_eq!(table.world_layer_for(false), table.units_hidden);
        assert_eq!(table.minimap_layer_for(true), table.minimap_visible);
        assert_eq!(table.minimap_layer_for(false), table.minimap_hidden);
    }
}
