use bevy::prelude::*;

/// Health component for entities that can take damage.
///
/// Hit points are integers and never go below zero; `current == 0` means the
/// entity is dead. Health is only ever mutated through damage application,
/// and damage against an already-dead entity is a silent no-op.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    /// Create a new Health component with full health
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage to this entity, saturating at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Check if this entity is dead
    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Spherical hitbox used for projectile collision detection and target
/// acquisition. Removed when the owning unit dies so corpses stop
/// participating in collisions.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox(pub f32);

impl Hitbox {
    pub fn new(radius: f32) -> Self {
        Self(radius)
    }

    pub fn radius(&self) -> f32 {
        self.0
    }
}

impl Default for Hitbox {
    fn default() -> Self {
        Self(0.75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod health_tests {
        use super::*;

        #[test]
        fn test_health_new() {
            let health = Health::new(50);
            assert_eq!(health.current, 50);
            assert_eq!(health.max, 50);
        }

        #[test]
        fn test_health_default() {
            let health = Health::default();
            assert_eq!(health.current, 100);
            assert_eq!(health.max, 100);
        }

        #[test]
        fn test_health_take_damage() {
            let mut health = Health::new(100);
            health.take_damage(30);
            assert_eq!(health.current, 70);
        }

        #[test]
        fn test_health_take_damage_saturates_at_zero() {
            let mut health = Health::new(50);
            health.take_damage(100);
            assert_eq!(health.current, 0);
        }

        #[test]
        fn test_health_zero_damage_is_legal() {
            let mut health = Health::new(50);
            health.take_damage(0);
            assert_eq!(health.current, 50);
        }

        #[test]
        fn test_health_is_dead() {
            let mut health = Health::new(10);
            assert!(!health.is_dead());
            health.take_damage(10);
            assert!(health.is_dead());
        }

        #[test]
        fn test_health_damage_sequence() {
            let mut health = Health::new(100);
            let mut observed = Vec::new();
            for amount in [30, 40, 50] {
                health.take_damage(amount);
                observed.push(health.current);
            }
            assert_eq!(observed, vec![70, 30, 0]);
            assert!(health.is_dead());
        }
    }

    mod hitbox_tests {
        use super::*;

        #[test]
        fn test_hitbox_new() {
            let hitbox = Hitbox::new(1.5);
            assert_eq!(hitbox.radius(), 1.5);
        }

        #[test]
        fn test_hitbox_default() {
            let hitbox = Hitbox::default();
            assert_eq!(hitbox.radius(), 0.75);
        }
    }
}
