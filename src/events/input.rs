//! Host keyboard notifications.
//!
//! The host reports every key-down and key-up as a [`KeyEvent`] through the
//! [`InputBridge`](crate::resources::input::InputBridge). Codes nobody is
//! bound to are still recorded but have no effect.

use crate::components::keybinding::KeyCode;

/// A key was pressed (`pressed == true`) or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(code: KeyCode) -> Self {
        Self {
            code,
            pressed: true,
        }
    }

    pub fn up(code: KeyCode) -> Self {
        Self {
            code,
            pressed: false,
        }
    }
}
