//! Direction resolution.
//!
//! Maps the current [`KeyState`] and an entity's [`KeyBinding`] to a
//! [`Direction`]. The heading and the movement delta come from two separate
//! rules:
//!
//! 1. [`resolve_heading`] walks a fixed priority order: `up` (diagonals with
//!    `left` then `right`), then `down` (same), then `left`, then `right`.
//!    With no directional key held it yields `None`, and the previous heading
//!    is kept.
//! 2. [`compose_deltas`] sums the unit vector of every held role.
//!
//! The rules are deliberately independent. Holding `up` and `down` with
//! `left` gives a heading of 315° but a delta of `(-1, 0)`; holding `left` and
//! `right` gives a heading of 270° and a delta of `(0, 0)`.

use arrayvec::ArrayVec;

use crate::components::direction::{Direction, Heading};
use crate::components::keybinding::{DirectionalRole, KeyBinding};
use crate::resources::keystate::KeyState;

/// Roles whose bound key is held, in [`DirectionalRole::ALL`] order.
pub fn pressed_roles(keys: &KeyState, binding: &KeyBinding) -> ArrayVec<DirectionalRole, 4> {
    DirectionalRole::ALL
        .into_iter()
        .filter(|role| keys.is_pressed(binding.key_for(*role)))
        .collect()
}

/// Sum of the unit vectors of `roles`. Each axis stays within `-1..=1`.
pub fn compose_deltas(roles: impl IntoIterator<Item = DirectionalRole>) -> (i8, i8) {
    roles.into_iter().fold((0, 0), |(dx, dy), role| {
        let (ux, uy) = role.unit();
        (dx + ux, dy + uy)
    })
}

/// Heading selected by the priority order, `None` when no directional key is held.
pub fn resolve_heading(keys: &KeyState, binding: &KeyBinding) -> Option<Heading> {
    let held = |role| keys.is_pressed(binding.key_for(role));

    if held(DirectionalRole::Up) {
        if held(DirectionalRole::Left) {
            Some(Heading::NorthWest)
        } else if held(DirectionalRole::Right) {
            Some(Heading::NorthEast)
        } else {
            Some(Heading::North)
        }
    } else if held(DirectionalRole::Down) {
        if held(DirectionalRole::Left) {
            Some(Heading::SouthWest)
        } else if held(DirectionalRole::Right) {
            Some(Heading::SouthEast)
        } else {
            Some(Heading::South)
        }
    } else if held(DirectionalRole::Left) {
        Some(Heading::West)
    } else if held(DirectionalRole::Right) {
        Some(Heading::East)
    } else {
        None
    }
}

/// Resolve the new direction of an entity that previously had `previous`.
pub fn resolve_direction(keys: &KeyState, binding: &KeyBinding, previous: &Direction) -> Direction {
    let (dx, dy) = compose_deltas(pressed_roles(keys, binding));
    Direction {
        dx,
        dy,
        heading: resolve_heading(keys, binding).unwrap_or(previous.heading),
    }
}
