use bevy::prelude::*;

/// Message fired when an entity takes damage
#[derive(Message, Debug, Clone)]
pub struct DamageEvent {
    /// The entity that took damage
    pub target: Entity,
    /// Amount of damage dealt
    pub amount: u32,
    /// Source of the damage (if any)
    pub source: Option<Entity>,
}

impl DamageEvent {
    pub fn new(target: Entity, amount: u32) -> Self {
        Self {
            target,
            amount,
            source: None,
        }
    }

    pub fn with_source(target: Entity, amount: u32, source: Entity) -> Self {
        Self {
            target,
            amount,
            source: Some(source),
        }
    }
}

/// Message fired exactly once when an entity's health reaches zero
#[derive(Message, Debug, Clone)]
pub struct DeathEvent {
    /// The entity that died
    pub entity: Entity,
    /// Position where the entity died
    pub position: Vec3,
}

impl DeathEvent {
    pub fn new(entity: Entity, position: Vec3) -> Self {
        Self { entity, position }
    }
}

/// Cosmetic message fired when a living entity takes a non-lethal hit.
/// Drives the hit animation flag and hit sounds; carries no state change.
#[derive(Message, Debug, Clone)]
pub struct HitReactionEvent {
    pub entity: Entity,
}

impl HitReactionEvent {
    pub fn new(entity: Entity) -> Self {
        Self { entity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_event_new() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let event = DamageEvent::new(target, 25);

        assert_eq!(event.target, target);
        assert_eq!(event.amount, 25);
        assert!(event.source.is_none());
    }

    #[test]
    fn test_damage_event_with_source() {
        let mut world = World::new();
        let target = world.spawn_empty().id();
        let source = world.spawn_empty().id();
        let event = DamageEvent::with_source(target, 50, source);

        assert_eq!(event.target, target);
        assert_eq!(event.amount, 50);
        assert_eq!(event.source, Some(source));
    }

    #[test]
    fn test_death_event_new() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let position = Vec3::new(10.0, 0.0, 20.0);
        let event = DeathEvent::new(entity, position);

        assert_eq!(event.entity, entity);
        assert_eq!(event.position, position);
    }

    #[test]
    fn test_hit_reaction_event_new() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let event = HitReactionEvent::new(entity);
        assert_eq!(event.entity, entity);
    }
}
