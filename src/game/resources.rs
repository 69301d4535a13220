use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::unit::components::Faction;

/// Static battlefield description: anything at or below `ground_height`
/// counts as terrain for projectile collisions.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Battlefield {
    pub ground_height: f32,
    pub half_extent: f32,
}

impl Default for Battlefield {
    fn default() -> Self {
        Self {
            ground_height: 0.0,
            half_extent: 40.0,
        }
    }
}

/// Tunables for the scripted demo battle.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BattleConfig {
    pub squad_size: usize,
    pub unit_health: u32,
    pub max_secs: f32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            squad_size: 3,
            unit_health: 100,
            max_secs: 90.0,
        }
    }
}

/// Hard cap on battle length. When it elapses the battle completes as a
/// draw regardless of surviving units.
#[derive(Resource)]
pub struct BattleClock(pub Timer);

impl BattleClock {
    pub fn with_limit(max_secs: f32) -> Self {
        Self(Timer::from_seconds(max_secs, TimerMode::Once))
    }
}

impl Default for BattleClock {
    fn default() -> Self {
        Self::with_limit(BattleConfig::default().max_secs)
    }
}

/// Seeded RNG for spawn jitter and scripted volleys, so a given seed
/// reproduces the same battle.
#[derive(Resource)]
pub struct BattleRng(pub StdRng);

impl BattleRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for BattleRng {
    fn default() -> Self {
        Self::from_seed(42)
    }
}

/// Timer driving the scripted volleys of the demo battle.
#[derive(Resource)]
pub struct VolleyTimer(pub Timer);

impl Default for VolleyTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(2.0, TimerMode::Repeating))
    }
}

/// Cosmetic faction-colored materials for projectiles. Only present when a
/// rendering front-end sets it up; the simulation runs without it.
#[derive(Resource)]
pub struct FactionMaterials {
    pub crimson: Handle<StandardMaterial>,
    pub azure: Handle<StandardMaterial>,
}

impl FactionMaterials {
    pub fn for_faction(&self, faction: Faction) -> Handle<StandardMaterial> {
        match faction {
            Faction::Crimson => self.crimson.clone(),
            Faction::Azure => self.azure.clone(),
        }
    }
}
