use bevy::prelude::*;

/// Message requesting a fog-of-war visibility change for a unit.
///
/// Non-forced requests that match the unit's current visibility are debounced,
/// since the fog-of-war manager issues these every frame.
#[derive(Message, Debug, Clone)]
pub struct VisibilityEvent {
    pub target: Entity,
    pub visible: bool,
    pub force: bool,
}

impl VisibilityEvent {
    pub fn new(target: Entity, visible: bool) -> Self {
        Self {
            target,
            visible,
            force: false,
        }
    }

    pub fn forced(target: Entity, visible: bool) -> Self {
        Self {
            target,
            visible,
            force: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_event_new_is_not_forced() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let event = VisibilityEvent::new(target, false);
        assert_eq!(event.target, target);
        assert!(!event.visible);
        assert!(!event.force);
    }

    #[test]
    fn test_visibility_event_forced() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let event = VisibilityEvent::forced(target, true);
        assert!(event.force);
        assert!(event.visible);
    }
}
