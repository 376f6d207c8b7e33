//! Player-controlled tank.
//!
//! A tank entity carries [`Tank`] together with a
//! [`KeyBinding`](super::keybinding::KeyBinding),
//! [`Direction`](super::direction::Direction),
//! [`Animation`](super::animation::Animation),
//! [`Sprite`](super::sprite::Sprite) and
//! [`MapPosition`](super::mapposition::MapPosition). Tanks live for the whole
//! session.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Tank {
    /// Pixels moved per tick along each pressed axis.
    pub speed: f32,
    /// Whether the fire key was down on the previous tick.
    pub fire_held: bool,
}

impl Tank {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            fire_held: false,
        }
    }
}

impl Default for Tank {
    fn default() -> Self {
        Self::new(10.0)
    }
}
