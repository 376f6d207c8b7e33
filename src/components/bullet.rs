//! Projectile fired by a tank.
//!
//! The travel vector is captured from the firer's pressed directional keys at
//! the moment of firing and never changes afterwards. A bullet fired by a
//! stationary tank has a zero vector and stays where it was spawned.

use bevy_ecs::prelude::{Component, Entity};

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    pub dx: i8,
    pub dy: i8,
    pub speed: f32,
    /// The tank that fired this bullet.
    pub fired_by: Entity,
}
