//! Bullet lifetime policy.
//!
//! With [`BulletLifetime::Unbounded`] bullets live forever. With
//! [`BulletLifetime::OutOfBounds`], [`despawn_out_of_bounds_bullets`] removes
//! every bullet whose sprite no longer overlaps the arena, both from the world
//! and from [`LiveEntities`].
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::bullet::Bullet;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::drawlist::Rect;
use crate::resources::gameconfig::{BulletLifetime, GameConfig};
use crate::resources::liveentities::LiveEntities;
use crate::resources::tilemap::TileMap;

/// Arena rectangle: the tile map's pixel size, or the configured size without a map.
pub fn arena_rect(config: &GameConfig, map: Option<&TileMap>) -> Rect {
    let (width, height) = match map {
        Some(map) => map.pixel_size(),
        None => (config.arena_width as f32, config.arena_height as f32),
    };
    Rect::new(0.0, 0.0, width, height)
}

/// Whether a `width`×`height` box at `position` lies entirely outside `arena`.
pub fn is_outside(position: &MapPosition, width: f32, height: f32, arena: &Rect) -> bool {
    position.x + width <= arena.x
        || position.y + height <= arena.y
        || position.x >= arena.x + arena.width
        || position.y >= arena.y + arena.height
}

pub fn despawn_out_of_bounds_bullets(
    mut commands: Commands,
    config: Res<GameConfig>,
    map: Option<Res<TileMap>>,
    mut live: ResMut<LiveEntities>,
    bullets: Query<(Entity, &MapPosition, &Sprite), With<Bullet>>,
) {
    if config.bullet_lifetime == BulletLifetime::Unbounded {
        return;
    }
    let arena = arena_rect(&config, map.as_deref());
    for (entity, position, sprite) in bullets.iter() {
        if is_outside(position, sprite.width, sprite.height, &arena) {
            debug!("Despawning {:?} at ({}, {})", entity, position.x, position.y);
            live.remove(entity);
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partially_visible_box_is_inside() {
        let arena = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!is_outside(&MapPosition::new(-31.0, 10.0), 32.0, 32.0, &arena));
        assert!(!is_outside(&MapPosition::new(99.0, 99.0), 32.0, 32.0, &arena));
    }

    #[test]
    fn fully_past_an_edge_is_outside() {
        let arena = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(is_outside(&MapPosition::new(-32.0, 10.0), 32.0, 32.0, &arena));
        assert!(is_outside(&MapPosition::new(100.0, 10.0), 32.0, 32.0, &arena));
        assert!(is_outside(&MapPosition::new(10.0, 140.0), 32.0, 32.0, &arena));
    }

    #[test]
    fn arena_prefers_map_size() {
        let config = GameConfig::new();
        let map = TileMap::parse("###\n###");
        assert_eq!(arena_rect(&config, Some(&map)), Rect::new(0.0, 0.0, 96.0, 64.0));
        assert_eq!(arena_rect(&config, None), Rect::new(0.0, 0.0, 672.0, 544.0));
    }
}
