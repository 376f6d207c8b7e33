//! Bullet spawning and flight.
//!
//! - [`spawn_bullets`] is the only consumer of [`FireMessage`]. It creates one
//!   bullet per message at the firer's position and inserts it at the front
//!   of [`LiveEntities`], so new bullets draw beneath existing entities.
//! - [`move_bullet`] translates a bullet along its frozen travel vector.
//! - [`update_fire_messages`] advances the message queue once per tick.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::bullet::Bullet;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::{SheetCell, Sprite};
use crate::events::fire::FireMessage;
use crate::resources::gameconfig::GameConfig;
use crate::resources::liveentities::LiveEntities;

pub fn spawn_bullets(
    mut commands: Commands,
    mut reader: MessageReader<FireMessage>,
    mut live: ResMut<LiveEntities>,
    config: Res<GameConfig>,
) {
    let size = config.tile_size as f32;
    for shot in reader.read() {
        let entity = commands
            .spawn((
                Bullet {
                    dx: shot.dx,
                    dy: shot.dy,
                    speed: config.bullet_speed,
                    fired_by: shot.firer,
                },
                MapPosition::new(shot.x, shot.y),
                Sprite {
                    cell: SheetCell::from_frame(config.bullet_frame, config.sheet_columns),
                    width: size,
                    height: size,
                    rotates: false,
                },
            ))
            .id();
        live.push_front(entity);
        debug!(
            "{:?} fired {:?} from ({}, {}) heading ({}, {})",
            shot.firer, entity, shot.x, shot.y, shot.dx, shot.dy
        );
    }
}

pub fn move_bullet(bullet: &Bullet, position: &mut MapPosition) {
    position.translate(bullet.dx, bullet.dy, bullet.speed);
}

/// Advance the [`Messages<FireMessage>`] double buffer.
pub fn update_fire_messages(mut messages: ResMut<Messages<FireMessage>>) {
    messages.update();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_moves_along_frozen_vector() {
        let mut world = World::new();
        let firer = world.spawn_empty().id();
        let bullet = Bullet {
            dx: -1,
            dy: 1,
            speed: 20.0,
            fired_by: firer,
        };
        let mut pos = MapPosition::new(100.0, 100.0);
        move_bullet(&bullet, &mut pos);
        move_bullet(&bullet, &mut pos);
        assert_eq!(pos, MapPosition::new(60.0, 140.0));
    }
}
