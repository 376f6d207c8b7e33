//! Key-state tracker.
//!
//! [`KeyState`] records whether each host key-code is currently held. It is
//! written only by [`crate::systems::input::apply_key_events`] at the start of
//! a tick and read by the movement systems during the tick. Codes that were
//! never reported are treated as released.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::keybinding::KeyCode;

#[derive(Resource, Debug, Clone, Default)]
pub struct KeyState {
    keys: FxHashMap<KeyCode, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pressed(&mut self, code: KeyCode, pressed: bool) {
        self.keys.insert(code, pressed);
    }

    /// Missing codes read as `false`.
    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.keys.get(&code).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_is_not_pressed() {
        let keys = KeyState::new();
        assert!(!keys.is_pressed(KeyCode(999)));
    }

    #[test]
    fn press_then_release() {
        let mut keys = KeyState::new();
        keys.set_pressed(KeyCode::UP, true);
        assert!(keys.is_pressed(KeyCode::UP));
        keys.set_pressed(KeyCode::UP, false);
        assert!(!keys.is_pressed(KeyCode::UP));
    }
}
