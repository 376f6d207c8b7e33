//! Per-tick entity update.
//!
//! [`update_live_entities`] walks [`LiveEntities`] in order and moves each
//! entity according to what it is: tanks resolve input and may fire, bullets
//! fly straight. Fire messages are therefore written in list order.
use bevy_ecs::prelude::*;

use crate::components::bullet::Bullet;
use crate::components::direction::Direction;
use crate::components::keybinding::KeyBinding;
use crate::components::mapposition::MapPosition;
use crate::components::tank::Tank;
use crate::events::fire::FireMessage;
use crate::resources::gameconfig::GameConfig;
use crate::resources::keystate::KeyState;
use crate::resources::liveentities::LiveEntities;
use crate::systems::bullet::move_bullet;
use crate::systems::tank::move_tank;

pub fn update_live_entities(
    live: Res<LiveEntities>,
    keys: Res<KeyState>,
    config: Res<GameConfig>,
    mut tanks: Query<
        (&mut Tank, &KeyBinding, &mut Direction, &mut MapPosition),
        Without<Bullet>,
    >,
    mut bullets: Query<(&Bullet, &mut MapPosition), Without<Tank>>,
    mut fired: MessageWriter<FireMessage>,
) {
    for entity in live.iter() {
        if let Ok((mut tank, binding, mut direction, mut position)) = tanks.get_mut(entity) {
            if let Some(shot) = move_tank(
                entity,
                &mut tank,
                binding,
                &mut direction,
                &mut position,
                &keys,
                config.fire_mode,
            ) {
                fired.write(shot);
            }
        } else if let Ok((bullet, mut position)) = bullets.get_mut(entity) {
            move_bullet(bullet, &mut position);
        }
    }
}
