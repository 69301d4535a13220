use bevy::prelude::*;

/// Default apex height of a ballistic arc above the higher end of the flight.
pub const DEFAULT_MAX_ARC_HEIGHT: f32 = 25.0;
/// Default speed of a tracking projectile in units per second.
pub const DEFAULT_TRACK_SPEED: f32 = 10.0;
/// Proximity threshold at which a tracking projectile resolves its impact.
pub const IMPACT_EPSILON: f32 = 0.001;
/// Vertical aim offset so tracking projectiles fly at center mass, not feet.
pub const TRACK_AIM_OFFSET: Vec3 = Vec3::Y;
/// Roll rate for `RotationMode::SpinAroundAxis`, degrees per second.
pub const SPIN_RATE_DEG_PER_SEC: f32 = 100.0;
/// Smallest apex height the launch solver will accept before clamping.
pub const MIN_ARC_HEIGHT: f32 = 0.01;

/// How a projectile flies. Chosen at launch, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightMode {
    /// Closed-form parabola under constant gravity, no further control input.
    BallisticArc,
    /// Homing: steers toward the target point every tick at constant speed.
    Tracking,
}

/// How a projectile orients itself while flying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    AlignToVelocity,
    SpinAroundAxis,
    None,
}

/// What a projectile is aimed at: a living unit, or a fixed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileTarget {
    Unit(Entity),
    Point(Vec3),
}

/// A projectile in flight. Exists from launch until impact or terrain
/// collision, then despawns; there is no pooling or reuse.
#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub flight_mode: FlightMode,
    pub rotation_mode: RotationMode,
    pub damage: u32,
    pub owner: Option<Entity>,
    pub target: ProjectileTarget,
    /// Aim point snapshot. Fixed at launch for ballistic flight; refreshed
    /// every tick while tracking so orientation can follow a moving target.
    pub target_position: Vec3,
}

/// Initial conditions for a ballistic launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchData {
    pub initial_velocity: Vec3,
    pub time_to_target: f32,
}

/// Solves the initial velocity for a parabolic trajectory from `start`
/// through `target` under gravity `gravity_y` (negative, downward), with the
/// arc's apex `max_arc_height` above the launch height.
///
/// Degenerate configurations are clamped rather than rejected: a non-positive
/// apex is raised to `MIN_ARC_HEIGHT`, and a target above the configured apex
/// raises the apex to the vertical displacement so the radicand stays
/// non-negative. Both clamps are logged.
pub fn calculate_launch(
    start: Vec3,
    target: Vec3,
    max_arc_height: f32,
    gravity_y: f32,
) -> LaunchData {
    debug_assert!(gravity_y < 0.0, "gravity must point down");

    let displacement_y = target.y - start.y;
    let displacement_xz = Vec3::new(target.x - start.x, 0.0, target.z - start.z);

    let mut apex = max_arc_height;
    if apex < MIN_ARC_HEIGHT {
        warn!(
            "arc apex {} is too small, clamping to {}",
            apex, MIN_ARC_HEIGHT
        );
        apex = MIN_ARC_HEIGHT;
    }
    if displacement_y > apex {
        warn!(
            "target sits {} above launch but arc apex is {}, raising apex",
            displacement_y, apex
        );
        apex = displacement_y;
    }

    let time_to_target =
        (-2.0 * apex / gravity_y).sqrt() + (2.0 * (displacement_y - apex) / gravity_y).sqrt();
    let velocity_y = Vec3::Y * (-2.0 * gravity_y * apex).sqrt() * -gravity_y.signum();
    let velocity_xz = displacement_xz / time_to_target;

    LaunchData {
        initial_velocity: velocity_xz + velocity_y,
        time_to_target,
    }
}
