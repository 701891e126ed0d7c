//! Terminal-state flood animation: an expanding diamond of Victory or
//! GameOver color radiating from the active cell.
//!
//! The per-frame enumeration overlaps itself — rays from the four sign
//! quadrants revisit cells, and re-marks repeat the same color. The sequence
//! is kept exactly as the floor installation plays it; reducing it to a
//! minimal ring would change which cells light up on which frame.

use crate::config::LoadTrigger;
use crate::tile::TileState;
use crate::Grid;

/// Frames 0..=24 play; a frame counter reaching this value signals
/// completion and the next configuration loads.
pub const RESET_FRAMES: u32 = 25;

/// Diagonal sign quadrants, in propagation order.
const QUADRANTS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Which terminal state a reset animation is flooding.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResetReason {
    Victory,
    GameOver,
}

impl ResetReason {
    #[must_use]
    pub fn terminal_state(self) -> TileState {
        match self {
            Self::Victory => TileState::Victory,
            Self::GameOver => TileState::GameOver,
        }
    }
}

impl From<ResetReason> for LoadTrigger {
    fn from(reason: ResetReason) -> Self {
        match reason {
            ResetReason::Victory => Self::Victory,
            ResetReason::GameOver => Self::GameOver,
        }
    }
}

/// Enumerate the cells marked on one animation frame, in mark order.
///
/// Frame 0 is the origin alone. Frame k ≥ 1 walks `progress` through [0, k):
/// for each sign quadrant the base point sits `progress` steps along that
/// diagonal, and four axis rays of length k extend from it. Coordinates may
/// fall outside any grid; callers resolve them.
#[must_use]
pub fn frame_cells(origin: (i32, i32), frame: u32) -> Vec<(i32, i32)> {
    if frame == 0 {
        return vec![origin];
    }
    let reach = frame as i32;
    let (col, row) = origin;
    let mut cells = Vec::with_capacity((reach * reach * 16) as usize);
    for progress in 0..reach {
        for (sign_col, sign_row) in QUADRANTS {
            let base_col = col + sign_col * progress;
            let base_row = row + sign_row * progress;
            for i in 0..reach {
                cells.push((base_col, base_row + i));
                cells.push((base_col, base_row - i));
                cells.push((base_col + i, base_row));
                cells.push((base_col - i, base_row));
            }
        }
    }
    cells
}

/// Mark one frame's cells with the terminal color. Cells outside the grid
/// are skipped; existing cells are overwritten whatever their state.
pub fn advance(grid: &mut Grid, origin: (i32, i32), frame: u32, reason: ResetReason) {
    let state = reason.terminal_state();
    for (col, row) in frame_cells(origin, frame) {
        grid.set(col, row, state);
    }
}
