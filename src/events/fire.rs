//! Tank fire notifications.
//!
//! The tank update writes a [`FireMessage`] whenever a tank's fire condition
//! is met. The message carries a snapshot of the firer, so the consumer
//! ([`crate::systems::bullet::spawn_bullets`]) never needs to look the tank up
//! and the tank never needs to know what a bullet is.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct FireMessage {
    pub firer: Entity,
    /// Firer position after its move this tick.
    pub x: f32,
    pub y: f32,
    /// Sum of the firer's pressed directional unit vectors.
    pub dx: i8,
    pub dy: i8,
}
