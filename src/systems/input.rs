//! Input system.
//!
//! [`apply_key_events`] drains the host events queued on the
//! [`InputBridge`](crate::resources::input::InputBridge) into
//! [`KeyState`](crate::resources::keystate::KeyState). It runs first in every
//! tick.
use bevy_ecs::prelude::*;
use log::trace;

use crate::resources::input::InputBridge;
use crate::resources::keystate::KeyState;

pub fn apply_key_events(bridge: Res<InputBridge>, mut keys: ResMut<KeyState>) {
    for event in bridge.drain() {
        trace!("key {:?} pressed={}", event.code, event.pressed);
        keys.set_pressed(event.code, event.pressed);
    }
}
