//! Rule engine for a floor-projected tile-traversal puzzle.
//!
//! An N×N grid of tiles must each be visited exactly once. The player's
//! position is sampled from an overhead sensor once per display frame; the
//! engine validates moves, detects win/loss, and plays a flood-fill reset
//! animation between puzzles. Rendering and sensing live in the host — this
//! crate only decides states and emits fill commands.

pub mod behavior;
pub mod config;
pub mod game;
pub mod render;
pub mod reset;
pub mod tile;

use tile::TileState;

/// The four orthogonal neighbor offsets, the only legal move directions.
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Map a continuous sensor coordinate pair to a grid cell.
///
/// The result may lie outside the grid; [`Grid::get`] resolves that to `None`.
#[must_use]
pub fn pixel_to_cell(x: f64, y: f64, tile_size: f64) -> (i32, i32) {
    ((x / tile_size).floor() as i32, (y / tile_size).floor() as i32)
}

/// N×N grid of tile states. Out-of-bounds reads return `None`, writes are
/// no-ops. Rebuilt wholesale on every configuration load, never patched.
#[derive(Debug)]
pub struct Grid {
    pub size: usize,
    pub tiles: Vec<TileState>,
}

impl Grid {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            tiles: vec![TileState::Uncleared; size * size],
        }
    }

    /// Fresh grid seeded for one puzzle: the start cell is activated, then
    /// each roadblock cell is marked. Out-of-range indices are skipped.
    #[must_use]
    pub fn build(size: usize, active_start: (i32, i32), roadblocks: &[(i32, i32)]) -> Self {
        let mut grid = Self::new(size);
        grid.set(active_start.0, active_start.1, TileState::Active);
        for &(col, row) in roadblocks {
            grid.set(col, row, TileState::Roadblock);
        }
        grid
    }

    #[must_use]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && (col as usize) < self.size && row >= 0 && (row as usize) < self.size
    }

    #[must_use]
    pub fn get(&self, col: i32, row: i32) -> Option<TileState> {
        if self.in_bounds(col, row) {
            Some(self.tiles[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    pub fn set(&mut self, col: i32, row: i32, state: TileState) {
        if self.in_bounds(col, row) {
            self.tiles[row as usize * self.size + col as usize] = state;
        }
    }

    /// A cell is a legal move target iff it exists, its state is neither
    /// Cleared nor Roadblock, and it sits exactly one orthogonal step from
    /// the active cell. Diagonal and non-adjacent cells are never legal; the
    /// active cell itself is never legal.
    #[must_use]
    pub fn is_legal_move(&self, target: (i32, i32), active: (i32, i32)) -> bool {
        let Some(state) = self.get(target.0, target.1) else {
            return false;
        };
        if state.blocks_movement() {
            return false;
        }
        let dc = (active.0 - target.0).abs();
        let dr = (active.1 - target.1).abs();
        (dc == 0 && dr == 1) || (dr == 0 && dc == 1)
    }

    /// True when the active cell is boxed in: none of its 4 orthogonal
    /// neighbors is a legal move target. Out-of-range neighbors count as
    /// absent, not as moves.
    #[must_use]
    pub fn active_has_no_moves(&self, active: (i32, i32)) -> bool {
        !ORTHOGONAL.iter().any(|&(dc, dr)| {
            self.is_legal_move((active.0 + dc, active.1 + dr), active)
        })
    }

    /// True when no cell anywhere is literally Uncleared. The active cell's
    /// own state never blocks this: a grid whose last non-cleared cell is the
    /// active one already counts as won.
    #[must_use]
    pub fn all_cleared(&self) -> bool {
        !self.tiles.iter().any(|&state| state == TileState::Uncleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn active_count(grid: &Grid) -> usize {
        grid.tiles
            .iter()
            .filter(|&&s| s == TileState::Active)
            .count()
    }

    #[test]
    fn grid_new_initializes_all_uncleared() {
        let grid = Grid::new(6);
        assert_eq!(grid.size, 6);
        assert_eq!(grid.tiles.len(), 36);
        for state in &grid.tiles {
            assert_eq!(*state, TileState::Uncleared);
        }
    }

    #[test]
    fn grid_get_set_in_bounds() {
        let mut grid = Grid::new(5);
        grid.set(1, 3, TileState::Cleared);
        assert_eq!(grid.get(1, 3), Some(TileState::Cleared));
    }

    #[test]
    fn grid_get_out_of_bounds_returns_none() {
        let grid = Grid::new(4);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn grid_set_out_of_bounds_is_noop() {
        let mut grid = Grid::new(4);
        let before = grid.tiles.clone();
        grid.set(-1, 0, TileState::Roadblock);
        grid.set(4, 0, TileState::Roadblock);
        grid.set(0, -1, TileState::Roadblock);
        grid.set(0, 4, TileState::Roadblock);
        assert_eq!(grid.tiles, before);
    }

    #[test]
    fn build_seeds_active_and_roadblocks() {
        let grid = Grid::build(4, (0, 0), &[(1, 0)]);
        assert_eq!(grid.get(0, 0), Some(TileState::Active));
        assert_eq!(grid.get(1, 0), Some(TileState::Roadblock));
        assert_eq!(grid.get(2, 2), Some(TileState::Uncleared));
        assert_eq!(active_count(&grid), 1);
    }

    #[test]
    fn build_skips_out_of_range_seeds() {
        let grid = Grid::build(4, (9, 9), &[(-1, 2), (2, 17)]);
        assert_eq!(active_count(&grid), 0);
        for state in &grid.tiles {
            assert_eq!(*state, TileState::Uncleared);
        }
    }

    #[test]
    fn build_roadblock_overrides_colliding_start() {
        // Seeding order: activation first, then roadblocks.
        let grid = Grid::build(4, (2, 2), &[(2, 2)]);
        assert_eq!(grid.get(2, 2), Some(TileState::Roadblock));
        assert_eq!(active_count(&grid), 0);
    }

    #[test]
    fn legal_move_requires_single_orthogonal_step() {
        let grid = Grid::new(5);
        let active = (2, 2);
        assert!(grid.is_legal_move((2, 3), active));
        assert!(grid.is_legal_move((2, 1), active));
        assert!(grid.is_legal_move((3, 2), active));
        assert!(grid.is_legal_move((1, 2), active));
        // Diagonal, same cell, and distance-2 cells never qualify.
        assert!(!grid.is_legal_move((3, 3), active));
        assert!(!grid.is_legal_move((2, 2), active));
        assert!(!grid.is_legal_move((2, 4), active));
        assert!(!grid.is_legal_move((0, 2), active));
    }

    #[test]
    fn legal_move_rejects_blocked_states() {
        let mut grid = Grid::new(5);
        grid.set(2, 3, TileState::Cleared);
        grid.set(3, 2, TileState::Roadblock);
        let active = (2, 2);
        assert!(!grid.is_legal_move((2, 3), active));
        assert!(!grid.is_legal_move((3, 2), active));
        assert!(grid.is_legal_move((1, 2), active));
    }

    #[test]
    fn legal_move_rejects_out_of_range_target() {
        let grid = Grid::new(4);
        assert!(!grid.is_legal_move((-1, 0), (0, 0)));
        assert!(!grid.is_legal_move((0, 4), (0, 3)));
    }

    #[test]
    fn boxed_in_corner_has_no_moves() {
        let mut grid = Grid::new(4);
        grid.set(0, 0, TileState::Active);
        grid.set(1, 0, TileState::Cleared);
        grid.set(0, 1, TileState::Cleared);
        assert!(grid.active_has_no_moves((0, 0)));

        grid.set(0, 1, TileState::Uncleared);
        assert!(!grid.active_has_no_moves((0, 0)));
    }

    #[test]
    fn roadblocks_box_in_like_cleared_tiles() {
        let mut grid = Grid::new(3);
        grid.set(1, 1, TileState::Active);
        grid.set(0, 1, TileState::Roadblock);
        grid.set(2, 1, TileState::Roadblock);
        grid.set(1, 0, TileState::Cleared);
        grid.set(1, 2, TileState::Cleared);
        assert!(grid.active_has_no_moves((1, 1)));
    }

    #[test]
    fn all_cleared_ignores_the_active_cell() {
        let mut grid = Grid::new(3);
        for state in &mut grid.tiles {
            *state = TileState::Cleared;
        }
        grid.set(1, 1, TileState::Active);
        // The win check scans for literal Uncleared only, so the lone
        // active cell does not hold up victory.
        assert!(grid.all_cleared());

        grid.set(0, 0, TileState::Uncleared);
        assert!(!grid.all_cleared());
    }

    #[test]
    fn all_cleared_counts_roadblocks_as_done() {
        let mut grid = Grid::new(2);
        grid.set(0, 0, TileState::Active);
        grid.set(0, 1, TileState::Roadblock);
        grid.set(1, 0, TileState::Cleared);
        grid.set(1, 1, TileState::Cleared);
        assert!(grid.all_cleared());
    }

    #[test]
    fn pixel_mapping_floors_per_axis() {
        assert_eq!(pixel_to_cell(0.0, 0.0, 48.0), (0, 0));
        assert_eq!(pixel_to_cell(47.9, 0.0, 48.0), (0, 0));
        assert_eq!(pixel_to_cell(48.0, 95.9, 48.0), (1, 1));
        // Negative coordinates floor below zero, landing out of range.
        assert_eq!(pixel_to_cell(-0.1, 10.0, 48.0), (-1, 0));
    }

    // Property: build never seeds more than one Active cell, even for
    // malformed configurations with out-of-range indices.
    proptest! {
        #[test]
        fn prop_build_seeds_at_most_one_active(
            size in 1usize..=8,
            start in (-2i32..10, -2i32..10),
            roadblocks in proptest::collection::vec((-2i32..10, -2i32..10), 0..12),
        ) {
            let grid = Grid::build(size, start, &roadblocks);
            prop_assert!(active_count(&grid) <= 1);
        }
    }

    // Property: in-bounds get/set round trip.
    proptest! {
        #[test]
        fn prop_grid_in_bounds_get_set_round_trip(
            col in 0i32..7,
            row in 0i32..7,
        ) {
            let mut grid = Grid::new(7);
            grid.set(col, row, TileState::Cleared);
            prop_assert_eq!(grid.get(col, row), Some(TileState::Cleared));
        }
    }

    // Property: out-of-bounds get is None and set leaves the grid untouched.
    proptest! {
        #[test]
        fn prop_grid_out_of_bounds_none_and_unchanged(
            col in prop_oneof![(-100i32..0), (7i32..100)],
            row in prop_oneof![(-100i32..0), (7i32..100)],
        ) {
            let mut grid = Grid::new(7);
            let before = grid.tiles.clone();
            prop_assert_eq!(grid.get(col, row), None);
            grid.set(col, row, TileState::GameOver);
            prop_assert_eq!(grid.tiles, before);
        }
    }

    // Property: any pixel inside a cell's rectangle maps back to that cell.
    proptest! {
        #[test]
        fn prop_pixel_maps_to_containing_cell(
            col in 0i32..7,
            row in 0i32..7,
            fx in 0.0f64..0.99,
            fy in 0.0f64..0.99,
        ) {
            let tile_size = 576.0 / 7.0;
            let x = (f64::from(col) + fx) * tile_size;
            let y = (f64::from(row) + fy) * tile_size;
            prop_assert_eq!(pixel_to_cell(x, y, tile_size), (col, row));
        }
    }
}
