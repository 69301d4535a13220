use bevy::prelude::*;

use crate::combat::components::Health;
use crate::combat::events::{DamageEvent, DeathEvent, HitReactionEvent};
use crate::unit::components::Lifecycle;

/// Applies queued damage to living entities.
///
/// Damage against an entity that is already dead is a silent no-op, so the
/// death transition (and its side effects) fires exactly once per entity.
/// Lethal damage flips the lifecycle to `Dying` and emits a `DeathEvent`;
/// non-lethal damage emits a cosmetic `HitReactionEvent`.
pub fn apply_damage_system(
    mut damage_events: MessageReader<DamageEvent>,
    mut query: Query<(&mut Health, &mut Lifecycle, &Transform)>,
    mut death_events: MessageWriter<DeathEvent>,
    mut hit_events: MessageWriter<HitReactionEvent>,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut lifecycle, transform)) = query.get_mut(event.target) else {
            continue;
        };

        if health.is_dead() {
            continue;
        }

        health.take_damage(event.amount);

        if health.is_dead() {
            *lifecycle = Lifecycle::Dying;
            death_events.write(DeathEvent::new(event.target, transform.translation));
        } else if event.amount > 0 {
            hit_events.write(HitReactionEvent::new(event.target));
        }
    }
}
