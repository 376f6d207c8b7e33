//! Static background tile map.
//!
//! A [`TileMap`] is built once from a block of single-character glyphs, one
//! row per line, and never changes afterwards. Each glyph found in
//! [`TileMap::glyph_cell`] becomes a tile-sheet cell; any other character
//! leaves the grid cell empty and nothing is drawn there.
//!
//! # Map Format
//!
//! ```plaintext
//! #####
//! # @ #
//! #####
//! ```
//!
//! - `#` – wall
//! - `@` – decoration
//! - ` ` – floor

use std::path::Path;

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::sprite::SheetCell;

pub const DEFAULT_TILE_SIZE: u32 = 32;

/// The 21×17 arena the game starts with when no map file is configured.
pub const DEFAULT_ARENA: &str = "\
#####################
#  @                #
#  @                #
#                   #
#           @@      #
#           @       #
#   @@@     @       #
#   @               #
#             @@    #
#              @@   #
#       @@@@        #
#                   #
#    @         @    #
#   @@@      @@@    #
#           @@@     #
#                   #
#####################";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TileMap {
    rows: Vec<Vec<Option<SheetCell>>>,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl TileMap {
    /// Tile-sheet cell for a glyph, `None` for glyphs with no tile.
    pub fn glyph_cell(glyph: char) -> Option<SheetCell> {
        match glyph {
            '#' => Some(SheetCell::new(2, 3)),
            '@' => Some(SheetCell::new(0, 6)),
            ' ' => Some(SheetCell::new(0, 0)),
            _ => None,
        }
    }

    pub fn parse(map: &str) -> Self {
        Self::parse_with_tile_size(map, DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE)
    }

    pub fn parse_with_tile_size(map: &str, tile_width: u32, tile_height: u32) -> Self {
        let rows = map
            .split('\n')
            .enumerate()
            .map(|(row, line)| {
                let line = line.strip_suffix('\r').unwrap_or(line);
                line.chars()
                    .enumerate()
                    .map(|(col, glyph)| {
                        let cell = Self::glyph_cell(glyph);
                        if cell.is_none() {
                            debug!("Skipping unknown map glyph {glyph:?} at ({col}, {row})");
                        }
                        cell
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            tile_width,
            tile_height,
        }
    }

    /// Read and parse a map file.
    pub fn load(path: impl AsRef<Path>, tile_size: u32) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read map file {}: {}", path.display(), e))?;
        // editors leave a final newline; it is not an empty row
        let text = text.trim_end_matches(['\n', '\r']);
        Ok(Self::parse_with_tile_size(text, tile_size, tile_size))
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn pixel_size(&self) -> (f32, f32) {
        (
            (self.width() as u32 * self.tile_width) as f32,
            (self.height() as u32 * self.tile_height) as f32,
        )
    }

    /// Non-empty cells in row-major order as `(col, row, cell)`.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32, SheetCell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|c| (col as u32, row as u32, c)))
        })
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self::parse(DEFAULT_ARENA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_at(map: &TileMap, col: u32, row: u32) -> Option<SheetCell> {
        map.tiles()
            .find(|(c, r, _)| (*c, *r) == (col, row))
            .map(|(_, _, cell)| cell)
    }

    #[test]
    fn default_arena_is_21_by_17() {
        let map = TileMap::default();
        assert_eq!(map.width(), 21);
        assert_eq!(map.height(), 17);
        assert_eq!(map.pixel_size(), (672.0, 544.0));
    }

    #[test]
    fn glyphs_map_to_sheet_cells() {
        let map = TileMap::parse("#@ ");
        assert_eq!(cell_at(&map, 0, 0), Some(SheetCell::new(2, 3)));
        assert_eq!(cell_at(&map, 1, 0), Some(SheetCell::new(0, 6)));
        assert_eq!(cell_at(&map, 2, 0), Some(SheetCell::new(0, 0)));
    }

    #[test]
    fn unknown_glyphs_leave_empty_cells() {
        let map = TileMap::parse("#x#\n###");
        assert_eq!(cell_at(&map, 1, 0), None);
        assert_eq!(map.tiles().count(), 5);
    }

    #[test]
    fn tiles_are_row_major() {
        let map = TileMap::parse("##\n@#");
        let coords: Vec<_> = map.tiles().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let map = TileMap::parse("##\r\n##\r\n");
        assert_eq!(map.width(), 2);
        // trailing newline yields an empty last row
        assert_eq!(map.height(), 3);
        assert_eq!(map.tiles().count(), 4);
    }
}
