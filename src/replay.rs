//! Scripted key events for headless sessions.
//!
//! A replay is a JSON array of key events, each tagged with the tick before
//! which it is delivered:
//!
//! ```json
//! [
//!   { "tick": 0, "code": 38, "pressed": true },
//!   { "tick": 3, "code": 13, "pressed": true },
//!   { "tick": 5, "code": 38, "pressed": false }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::keybinding::KeyCode;
use crate::events::input::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayEvent {
    pub tick: u64,
    pub code: KeyCode,
    pub pressed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replay {
    events: Vec<ReplayEvent>,
}

impl Replay {
    /// Events are ordered by tick; events sharing a tick keep their file order.
    pub fn new(mut events: Vec<ReplayEvent>) -> Self {
        events.sort_by_key(|e| e.tick);
        Self { events }
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let events: Vec<ReplayEvent> =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse replay: {}", e))?;
        Ok(Self::new(events))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read replay {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    /// Key events to deliver before tick `tick` runs.
    pub fn events_at(&self, tick: u64) -> impl Iterator<Item = KeyEvent> + '_ {
        self.events
            .iter()
            .filter(move |e| e.tick == tick)
            .map(|e| KeyEvent {
                code: e.code,
                pressed: e.pressed,
            })
    }

    pub fn last_tick(&self) -> Option<u64> {
        self.events.last().map(|e| e.tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_orders_by_tick() {
        let replay = Replay::from_json(
            r#"[
                {"tick": 4, "code": 38, "pressed": false},
                {"tick": 0, "code": 38, "pressed": true},
                {"tick": 0, "code": 37, "pressed": true}
            ]"#,
        )
        .expect("valid replay");

        let first: Vec<_> = replay.events_at(0).collect();
        assert_eq!(
            first,
            vec![KeyEvent::down(KeyCode::UP), KeyEvent::down(KeyCode::LEFT)]
        );
        assert_eq!(replay.events_at(1).count(), 0);
        assert_eq!(replay.last_tick(), Some(4));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Replay::from_json("[{\"tick\": \"soon\"}]").is_err());
    }
}
