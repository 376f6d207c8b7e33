//! Tile map spawning.
//!
//! Turns the [`TileMap`] resource into one [`MapTile`] entity per non-empty
//! cell, positioned at `(col * tile_width, row * tile_height)`.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::mapposition::MapPosition;
use crate::components::maptile::MapTile;
use crate::components::sprite::Sprite;
use crate::resources::tilemap::TileMap;

/// Spawn the background tiles. Returns how many were spawned.
pub fn spawn_map_tiles(world: &mut World) -> usize {
    let Some(map) = world.get_resource::<TileMap>().cloned() else {
        return 0;
    };

    let width = map.tile_width as f32;
    let height = map.tile_height as f32;
    let mut count = 0;
    for (col, row, cell) in map.tiles() {
        world.spawn((
            MapTile { col, row },
            MapPosition::new(col as f32 * width, row as f32 * height),
            Sprite {
                cell,
                width,
                height,
                rotates: false,
            },
        ));
        count += 1;
    }

    info!(
        "Spawned {} map tiles ({}x{} grid)",
        count,
        map.width(),
        map.height()
    );
    count
}
