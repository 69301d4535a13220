use bevy::prelude::*;

use crate::projectile::components::{
    FlightMode, ProjectileTarget, RotationMode, DEFAULT_MAX_ARC_HEIGHT, DEFAULT_TRACK_SPEED,
};

/// Message requesting a projectile launch at a target.
#[derive(Message, Debug, Clone)]
pub struct LaunchProjectileEvent {
    pub start: Vec3,
    pub target: ProjectileTarget,
    pub damage: u32,
    pub owner: Option<Entity>,
    pub flight_mode: FlightMode,
    pub rotation_mode: RotationMode,
    pub max_arc_height: f32,
    pub track_speed: f32,
}

impl LaunchProjectileEvent {
    pub fn new(start: Vec3, target: ProjectileTarget, damage: u32, flight_mode: FlightMode) -> Self {
        Self {
            start,
            target,
            damage,
            owner: None,
            flight_mode,
            rotation_mode: RotationMode::AlignToVelocity,
            max_arc_height: DEFAULT_MAX_ARC_HEIGHT,
            track_speed: DEFAULT_TRACK_SPEED,
        }
    }

    pub fn with_owner(mut self, owner: Entity) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_rotation(mut self, rotation_mode: RotationMode) -> Self {
        self.rotation_mode = rotation_mode;
        self
    }

    pub fn with_arc_height(mut self, max_arc_height: f32) -> Self {
        self.max_arc_height = max_arc_height;
        self
    }

    pub fn with_track_speed(mut self, track_speed: f32) -> Self {
        self.track_speed = track_speed;
        self
    }
}

/// Collision surface classification, from the layer/category table's
/// point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionCategory {
    Terrain,
    Unit,
}

/// Message fired when a ballistic projectile overlaps another body.
/// `other` is the overlapped entity for unit collisions, absent for terrain.
#[derive(Message, Debug, Clone)]
pub struct CollisionEvent {
    pub projectile: Entity,
    pub other: Option<Entity>,
    pub category: CollisionCategory,
}

/// How a projectile's flight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactOutcome {
    /// The intended target was struck and damage was delivered.
    TargetHit,
    /// The projectile hit the ground; no damage.
    Terrain,
    /// The tracked target vanished mid-flight; no damage.
    TargetLost,
    /// The impact could not deliver damage (e.g. target already dead).
    NoEffect,
}

/// Message fired on every projectile despawn. The cosmetic burst at the
/// final position is skipped when a unit was actually hit; the impact sound
/// plays for every outcome.
#[derive(Message, Debug, Clone)]
pub struct ProjectileImpactEvent {
    pub position: Vec3,
    pub outcome: ImpactOutcome,
}

impl ProjectileImpactEvent {
    pub fn new(position: Vec3, outcome: ImpactOutcome) -> Self {
        Self { position, outcome }
    }
}
