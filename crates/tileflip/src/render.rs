//! Draw-command seam between the engine and the display surface.

use crate::tile::Color;
use crate::Grid;

/// Whatever the host fills rectangles on. The engine only ever pushes
/// grid-aligned fills through this seam; it never reads pixels back.
pub trait Surface {
    fn fill_rect(&mut self, color: Color, x: f64, y: f64, w: f64, h: f64);
}

/// Paint every tile's current color at its grid-aligned rectangle,
/// column by column.
pub fn paint_tiles(grid: &Grid, tile_size: f64, surface: &mut dyn Surface) {
    for col in 0..grid.size as i32 {
        for row in 0..grid.size as i32 {
            if let Some(state) = grid.get(col, row) {
                surface.fill_rect(
                    state.color(),
                    f64::from(col) * tile_size,
                    f64::from(row) * tile_size,
                    tile_size,
                    tile_size,
                );
            }
        }
    }
}
