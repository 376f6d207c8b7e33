//! Per-entity key bindings.
//!
//! A [`KeyBinding`] maps the four directional roles and an optional fire role
//! to host key-codes. Bindings are fixed once the entity is spawned.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Host-platform integer identifier of a physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ENTER: KeyCode = KeyCode(13);
    pub const SPACE: KeyCode = KeyCode(32);
    pub const LEFT: KeyCode = KeyCode(37);
    pub const UP: KeyCode = KeyCode(38);
    pub const RIGHT: KeyCode = KeyCode(39);
    pub const DOWN: KeyCode = KeyCode(40);
    pub const A: KeyCode = KeyCode(65);
    pub const D: KeyCode = KeyCode(68);
    pub const S: KeyCode = KeyCode(83);
    pub const W: KeyCode = KeyCode(87);
}

/// The movement roles a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionalRole {
    Up,
    Down,
    Left,
    Right,
}

impl DirectionalRole {
    /// Binding order; also the order in which deltas are summed.
    pub const ALL: [DirectionalRole; 4] = [
        DirectionalRole::Up,
        DirectionalRole::Down,
        DirectionalRole::Left,
        DirectionalRole::Right,
    ];

    /// Unit screen-space vector for this role (y grows downwards).
    pub fn unit(self) -> (i8, i8) {
        match self {
            DirectionalRole::Up => (0, -1),
            DirectionalRole::Down => (0, 1),
            DirectionalRole::Left => (-1, 0),
            DirectionalRole::Right => (1, 0),
        }
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub fire: Option<KeyCode>,
}

impl KeyBinding {
    /// Arrow keys, Enter to fire.
    pub fn arrows() -> Self {
        Self {
            up: KeyCode::UP,
            down: KeyCode::DOWN,
            left: KeyCode::LEFT,
            right: KeyCode::RIGHT,
            fire: Some(KeyCode::ENTER),
        }
    }

    /// WASD, Space to fire.
    pub fn wasd() -> Self {
        Self {
            up: KeyCode::W,
            down: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
            fire: Some(KeyCode::SPACE),
        }
    }

    pub fn key_for(&self, role: DirectionalRole) -> KeyCode {
        match role {
            DirectionalRole::Up => self.up,
            DirectionalRole::Down => self.down,
            DirectionalRole::Left => self.left,
            DirectionalRole::Right => self.right,
        }
    }

    /// Every key-code this binding listens to, fire key last.
    pub fn codes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        DirectionalRole::ALL
            .into_iter()
            .map(|role| self.key_for(role))
            .chain(self.fire)
    }
}

impl Default for KeyBinding {
    fn default() -> Self {
        Self::arrows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binding_is_arrows_with_enter() {
        let b = KeyBinding::default();
        assert_eq!(b.up, KeyCode(38));
        assert_eq!(b.down, KeyCode(40));
        assert_eq!(b.left, KeyCode(37));
        assert_eq!(b.right, KeyCode(39));
        assert_eq!(b.fire, Some(KeyCode(13)));
    }

    #[test]
    fn codes_lists_fire_last_and_skips_missing_fire() {
        let mut b = KeyBinding::wasd();
        let codes: Vec<_> = b.codes().collect();
        assert_eq!(codes, vec![KeyCode::W, KeyCode::S, KeyCode::A, KeyCode::D, KeyCode::SPACE]);

        b.fire = None;
        assert_eq!(b.codes().count(), 4);
    }

    #[test]
    fn opposing_units_cancel() {
        let (ux, uy) = DirectionalRole::Up.unit();
        let (dx, dy) = DirectionalRole::Down.unit();
        assert_eq!((ux + dx, uy + dy), (0, 0));
    }
}
