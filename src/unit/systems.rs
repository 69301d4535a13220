use bevy::prelude::*;

use crate::combat::components::Hitbox;
use crate::combat::events::{DeathEvent, HitReactionEvent};
use crate::unit::components::{
    AnimationFlags, Decay, Lifecycle, NavObstacle, UnitParts, DECAY_SINK_DISTANCE, DECAY_SINK_RATE,
};

/// Runs a unit's one-time death side effects.
///
/// The death animation flag latches, the unit stops acting as a pathing
/// obstacle, its hitbox is removed so it neither collides nor gets targeted
/// again, and the decay sequence is armed. `apply_damage_system` guarantees
/// at most one `DeathEvent` per unit, so these effects are observable once.
pub fn handle_death_system(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut query: Query<(&mut NavObstacle, &mut AnimationFlags)>,
) {
    for event in death_events.read() {
        let Ok((mut obstacle, mut flags)) = query.get_mut(event.entity) else {
            continue;
        };

        flags.death = true;
        obstacle.enabled = false;

        commands
            .entity(event.entity)
            .remove::<Hitbox>()
            .insert(Decay::new());

        info!("unit {:?} died at {:?}", event.entity, event.position);
    }
}

/// Clears last tick's hit pulses so `hit` is high for exactly one tick.
pub fn clear_hit_flags_system(mut query: Query<&mut AnimationFlags>) {
    for mut flags in query.iter_mut() {
        if flags.hit {
            flags.hit = false;
        }
    }
}

/// Pulses the hit animation flag for units that took a non-lethal hit.
pub fn hit_reaction_system(
    mut hit_events: MessageReader<HitReactionEvent>,
    mut query: Query<&mut AnimationFlags>,
) {
    for event in hit_events.read() {
        if let Ok(mut flags) = query.get_mut(event.entity) {
            flags.hit = true;
        }
    }
}

/// Advances dead units through the decay sequence.
///
/// After the fixed delay the model part sinks at a constant rate; once it has
/// dropped `DECAY_SINK_DISTANCE` below its death height the unit becomes
/// `Decayed` and is removed from the simulation together with its parts.
pub fn decay_system(
    mut commands: Commands,
    time: Res<Time>,
    mut units: Query<(Entity, &mut Decay, &mut Lifecycle, &UnitParts)>,
    mut part_transforms: Query<&mut Transform>,
) {
    for (entity, mut decay, mut lifecycle, parts) in units.iter_mut() {
        decay.delay.tick(time.delta());
        if !decay.delay.is_finished() {
            continue;
        }

        let Ok(mut model) = part_transforms.get_mut(parts.model) else {
            continue;
        };

        let sink_from = *decay.sink_from.get_or_insert(model.translation.y);

        model.translation.y -= DECAY_SINK_RATE * time.delta_secs();

        if model.translation.y <= sink_from - DECAY_SINK_DISTANCE {
            *lifecycle = Lifecycle::Decayed;
            commands.entity(parts.model).try_despawn();
            commands.entity(parts.minimap_icon).try_despawn();
            commands.entity(entity).try_despawn();
            info!("unit {:?} decayed and was removed", entity);
        }
    }
}
