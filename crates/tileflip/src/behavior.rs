//! Host-facing behavior descriptor exported over the WASM boundary.
//!
//! The display host constructs one [`Behavior`] with its pixel width, calls
//! `init` once, then `tick` once per sensor frame. Draw output crosses the
//! boundary as a flat buffer of 5-float records.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::render::Surface;
use crate::tile::Color;

/// Title the host shim displays for this behavior.
pub const TITLE: &str = "Flip the Tiles";

/// Render cadence requested from the host: driven by sensor updates rather
/// than a fixed clock.
pub const FRAME_RATE: &str = "sensor";

/// Floats per draw-command record in the tick buffer.
pub const DRAW_STRIDE: usize = 5;

/// Buffer-backed surface: each fill becomes a `[color_code, x, y, w, h]`
/// record.
#[derive(Debug, Default)]
struct DrawBuffer {
    commands: Vec<f32>,
}

impl Surface for DrawBuffer {
    fn fill_rect(&mut self, color: Color, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(f32::from(color.code()));
        self.commands.push(x as f32);
        self.commands.push(y as f32);
        self.commands.push(w as f32);
        self.commands.push(h as f32);
    }
}

/// The embedded interactive-display behavior.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Behavior {
    game: Game,
}

#[wasm_bindgen]
impl Behavior {
    /// `display_width` is the square display's pixel width.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(display_width: f64) -> Self {
        Self {
            game: Game::new(display_width),
        }
    }

    /// Load the first puzzle. Called exactly once before any tick.
    pub fn init(&mut self) {
        self.game.init();
    }

    /// One sensor frame. `positions` is a flat `[x0, y0, x1, y1, ...]`
    /// array of player positions in pixel space; a trailing unpaired value
    /// is ignored. Returns the frame's draw commands as flat
    /// `[color_code, x, y, w, h]` records.
    pub fn tick(&mut self, positions: &[f64]) -> Vec<f32> {
        let pairs: Vec<(f64, f64)> = positions
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        let mut buffer = DrawBuffer::default();
        self.game.tick(&pairs, &mut buffer);
        buffer.commands
    }

    #[must_use]
    pub fn title() -> String {
        TITLE.into()
    }

    #[must_use]
    pub fn frame_rate() -> String {
        FRAME_RATE.into()
    }
}
