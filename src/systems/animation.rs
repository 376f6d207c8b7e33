//! Animation system.
//!
//! Runs after rendering: the frame that was just drawn stays on screen for
//! the whole tick, then every moving entity steps to its next frame and its
//! [`Sprite`] cell is updated for the next draw. Stationary entities hold
//! their current frame.
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::direction::Direction;
use crate::components::sprite::{SheetCell, Sprite};
use crate::resources::gameconfig::GameConfig;

pub fn animation_system(
    mut query: Query<(&mut Animation, &mut Sprite, &Direction)>,
    config: Res<GameConfig>,
) {
    for (mut animation, mut sprite, direction) in query.iter_mut() {
        if direction.is_stationary() {
            continue;
        }
        animation.advance();
        sprite.cell = SheetCell::from_frame(animation.current_frame(), config.sheet_columns);
    }
}
