//! Per-tick session logic: move validation, win/loss detection, and reset
//! orchestration between puzzles.

use crate::config::{self, LoadTrigger, PuzzleConfig, CATALOG};
use crate::render::{self, Surface};
use crate::reset::{self, ResetReason, RESET_FRAMES};
use crate::tile::TileState;
use crate::{pixel_to_cell, Grid};

/// Whether the session is accepting moves or playing the reset flood.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    Resetting { reason: ResetReason, frames_played: u32 },
}

/// One puzzle session. Owns the grid and all round state; the host drives it
/// with exactly one `tick` per display frame, never concurrently.
#[derive(Debug)]
pub struct Game {
    grid: Grid,
    catalog: &'static [PuzzleConfig],
    config_index: usize,
    /// Coordinate cache of the Active cell. `None` only when a malformed
    /// config seeded its start out of range.
    active: Option<(i32, i32)>,
    phase: Phase,
    display_width: f64,
    tile_size: f64,
}

impl Game {
    /// Session over the bundled catalog. `display_width` is the square
    /// display's pixel width; tile size is derived from it per puzzle.
    #[must_use]
    pub fn new(display_width: f64) -> Self {
        Self::with_catalog(display_width, &CATALOG)
    }

    /// Session over a custom catalog. Must be non-empty.
    #[must_use]
    pub fn with_catalog(display_width: f64, catalog: &'static [PuzzleConfig]) -> Self {
        debug_assert!(!catalog.is_empty());
        Self {
            grid: Grid::new(0),
            catalog,
            config_index: 0,
            active: None,
            phase: Phase::Playing,
            display_width,
            tile_size: 0.0,
        }
    }

    /// Load the first catalog entry. The host calls this exactly once
    /// before ticking.
    pub fn init(&mut self) {
        self.load(LoadTrigger::Init);
    }

    /// Advance one sensor frame. `positions` are pixel-space (x, y) samples
    /// in sensor order; at most one move is applied per tick, first legal
    /// match wins. Every tick repaints the whole grid into `surface`.
    pub fn tick(&mut self, positions: &[(f64, f64)], surface: &mut dyn Surface) {
        if let Phase::Resetting {
            reason,
            frames_played,
        } = self.phase
        {
            if frames_played == RESET_FRAMES {
                self.load(reason.into());
            } else {
                if let Some(active) = self.active {
                    reset::advance(&mut self.grid, active, frames_played, reason);
                }
                self.phase = Phase::Resetting {
                    reason,
                    frames_played: frames_played + 1,
                };
            }
            render::paint_tiles(&self.grid, self.tile_size, surface);
            return;
        }

        let reason = self.terminal_reason();

        if reason.is_none() {
            if let Some(active) = self.active {
                for &(x, y) in positions {
                    let target = pixel_to_cell(x, y, self.tile_size);
                    if self.grid.is_legal_move(target, active) {
                        self.grid.set(active.0, active.1, TileState::Cleared);
                        self.grid.set(target.0, target.1, TileState::Active);
                        self.active = Some(target);
                        break;
                    }
                }
            }
        }

        render::paint_tiles(&self.grid, self.tile_size, surface);

        // Latched after the render so the first flood frame plays next tick.
        if let Some(reason) = reason {
            self.phase = Phase::Resetting {
                reason,
                frames_played: 0,
            };
        }
    }

    /// Victory outranks game over when both hold on the same tick. A session
    /// with no active cell counts as having no moves.
    fn terminal_reason(&self) -> Option<ResetReason> {
        if self.grid.all_cleared() {
            return Some(ResetReason::Victory);
        }
        let boxed_in = self
            .active
            .map_or(true, |active| self.grid.active_has_no_moves(active));
        boxed_in.then_some(ResetReason::GameOver)
    }

    fn load(&mut self, trigger: LoadTrigger) {
        log::info!("loading tile config after {trigger}");
        self.config_index = config::select(trigger, self.config_index, self.catalog.len());
        let config = &self.catalog[self.config_index];
        self.tile_size = self.display_width / config.size as f64;
        self.grid = Grid::build(config.size, config.active_start, config.roadblocks);
        self.active = self
            .grid
            .in_bounds(config.active_start.0, config.active_start.1)
            .then_some(config.active_start);
        self.phase = Phase::Playing;
        log::info!("loaded tile config {}", config.name);
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn active(&self) -> Option<(i32, i32)> {
        self.active
    }

    #[must_use]
    pub fn config_index(&self) -> usize {
        self.config_index
    }

    #[must_use]
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }
}
