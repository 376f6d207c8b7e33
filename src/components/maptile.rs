use bevy_ecs::prelude::Component;

/// Background tile spawned from the [`TileMap`](crate::resources::tilemap::TileMap).
///
/// Tiles are drawn before every live entity, in row-major order, and never
/// move or change after spawning.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapTile {
    pub col: u32,
    pub row: u32,
}
