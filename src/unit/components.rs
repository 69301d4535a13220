use bevy::prelude::*;

/// How long a dead unit lies in place before it starts sinking.
pub const DECAY_DELAY_SECS: f32 = 5.0;
/// Total distance the visual body sinks below its death height before removal.
pub const DECAY_SINK_DISTANCE: f32 = 7.0;
/// Sink speed in world units per second.
pub const DECAY_SINK_RATE: f32 = 0.1;

/// Marker component for damageable battlefield units
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Unit;

/// Which side a unit or projectile owner fights for.
/// Used for target selection and cosmetic material choice.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Crimson,
    Azure,
}

impl Faction {
    pub fn is_hostile_to(&self, other: Faction) -> bool {
        *self != other
    }
}

/// Lifecycle stage of a unit.
///
/// Progression is monotone: `Alive -> Dying -> Decayed`, never reversed.
/// `Dying` and `Decayed` imply zero health; `Alive` is the only stage in
/// which damage has any effect.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    Dying,
    Decayed,
}

impl Lifecycle {
    pub fn is_alive(&self) -> bool {
        matches!(self, Lifecycle::Alive)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_alive()
    }
}

/// Explicit references to a unit's sub-part entities, assigned at spawn.
/// The model carries the world-render layer and is what sinks during decay;
/// the minimap icon carries the minimap layer.
#[derive(Component, Debug, Clone, Copy)]
pub struct UnitParts {
    pub model: Entity,
    pub minimap_icon: Entity,
}

/// Pathing-obstacle participation flag for the navigation collaborator.
/// Disabled on death so corpses stop blocking movement.
#[derive(Component, Debug, Clone, Copy)]
pub struct NavObstacle {
    pub enabled: bool,
}

impl Default for NavObstacle {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Skeletal-animation trigger flags consumed by the animation collaborator.
/// `hit` is pulsed for one tick on a non-lethal hit; `death` latches on death.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AnimationFlags {
    pub hit: bool,
    pub death: bool,
}

/// Post-death decay state: a one-shot delay, then the model sinks at a
/// constant rate until it is `DECAY_SINK_DISTANCE` below its death height,
/// at which point the unit is removed from the simulation. Despawning the
/// unit first cancels the whole sequence implicitly.
#[derive(Component, Debug, Clone)]
pub struct Decay {
    pub delay: Timer,
    pub sink_from: Option<f32>,
}

impl Decay {
    pub fn new() -> Self {
        Self {
            delay: Timer::from_seconds(DECAY_DELAY_SECS, TimerMode::Once),
            sink_from: None,
        }
    }
}

impl Default for Decay {
    fn default() -> Self {
        Self::new()
    }
}
