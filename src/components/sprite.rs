use bevy_ecs::prelude::Component;

use crate::resources::drawlist::Rect;

/// Column/row of a cell in the tile sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SheetCell {
    pub col: u32,
    pub row: u32,
}

impl SheetCell {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Cell of frame number `frame` on a sheet `columns` cells wide.
    pub fn from_frame(frame: u32, columns: u32) -> Self {
        let columns = columns.max(1);
        Self {
            col: frame % columns,
            row: frame / columns,
        }
    }
}

/// A tile-sheet cell drawn at the entity's [`MapPosition`](super::mapposition::MapPosition).
///
/// `rotates` selects whether the renderer applies the entity's heading.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub cell: SheetCell,
    pub width: f32,
    pub height: f32,
    pub rotates: bool,
}

impl Sprite {
    /// Source rectangle of the cell within the sheet, in pixels.
    pub fn source_rect(&self) -> Rect {
        Rect {
            x: self.cell.col as f32 * self.width,
            y: self.cell.row as f32 * self.height,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_21_on_8_columns_is_col_5_row_2() {
        assert_eq!(SheetCell::from_frame(21, 8), SheetCell::new(5, 2));
    }

    #[test]
    fn zero_columns_does_not_divide_by_zero() {
        assert_eq!(SheetCell::from_frame(3, 0), SheetCell::new(0, 3));
    }

    #[test]
    fn source_rect_scales_cell_by_size() {
        let sprite = Sprite {
            cell: SheetCell::new(2, 3),
            width: 32.0,
            height: 32.0,
            rotates: false,
        };
        assert_eq!(
            sprite.source_rect(),
            Rect {
                x: 64.0,
                y: 96.0,
                width: 32.0,
                height: 32.0
            }
        );
    }
}
