//! Bridge between the host's input callbacks and the ECS world.
//!
//! Host key-down/key-up callbacks push [`KeyEvent`]s into the sending half
//! returned by [`InputBridge::sender`]. The world drains the receiving half at
//! the start of every tick, so the key state seen by a tick reflects every
//! event delivered before it started, in delivery order.
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::input::KeyEvent;

#[derive(Resource, Debug)]
pub struct InputBridge {
    tx: Sender<KeyEvent>,
    rx: Receiver<KeyEvent>,
}

impl InputBridge {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// A handle the host can keep and clone into its callbacks.
    pub fn sender(&self) -> Sender<KeyEvent> {
        self.tx.clone()
    }

    /// Non-blocking drain of every pending event.
    pub fn drain(&self) -> impl Iterator<Item = KeyEvent> + '_ {
        self.rx.try_iter()
    }
}

impl Default for InputBridge {
    fn default() -> Self {
        Self::new()
    }
}
