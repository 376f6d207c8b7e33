use bevy_ecs::prelude::*;

use crate::components::direction::Direction;
use crate::components::mapposition::MapPosition;
use crate::components::maptile::MapTile;
use crate::components::sprite::Sprite;
use crate::resources::drawlist::{DrawCommand, DrawList, Rect, Rgba};
use crate::resources::liveentities::LiveEntities;

/// Build this tick's [`DrawList`].
///
/// Paint order: clear, background tiles in row-major order, then every live
/// entity in [`LiveEntities`] order. Sprites that rotate are turned by their
/// heading about the centre of the destination rectangle.
pub fn render_system(
    live: Res<LiveEntities>,
    tiles: Query<(&MapTile, &MapPosition, &Sprite)>,
    drawables: Query<(&MapPosition, &Sprite, Option<&Direction>), Without<MapTile>>,
    mut draw_list: ResMut<DrawList>,
) {
    draw_list.clear();
    draw_list.push(DrawCommand::Clear { color: Rgba::BLACK });

    let mut background: Vec<(&MapTile, &MapPosition, &Sprite)> = tiles.iter().collect();
    background.sort_by_key(|(tile, _, _)| (tile.row, tile.col));
    for (_, position, sprite) in background {
        draw_list.push(blit(position, sprite, None));
    }

    for entity in live.iter() {
        if let Ok((position, sprite, direction)) = drawables.get(entity) {
            let rotation = if sprite.rotates {
                direction.map(|d| d.heading.radians())
            } else {
                None
            };
            draw_list.push(blit(position, sprite, rotation));
        }
    }
}

fn blit(position: &MapPosition, sprite: &Sprite, rotation: Option<f32>) -> DrawCommand {
    DrawCommand::Blit {
        src: sprite.source_rect(),
        dest: Rect::new(position.x, position.y, sprite.width, sprite.height),
        rotation,
    }
}
