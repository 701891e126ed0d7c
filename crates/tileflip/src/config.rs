//! Puzzle configurations and the selection policy between rounds.

use std::fmt;

/// One puzzle definition. The name is diagnostic only.
#[derive(Clone, Copy, Debug)]
pub struct PuzzleConfig {
    pub name: &'static str,
    pub size: usize,
    pub active_start: (i32, i32),
    pub roadblocks: &'static [(i32, i32)],
}

/// The bundled catalog, played in order. Victory advances (wrapping),
/// game over replays the current entry.
pub const CATALOG: [PuzzleConfig; 4] = [
    PuzzleConfig {
        name: "helloWorld",
        size: 4,
        active_start: (0, 0),
        roadblocks: &[(1, 0)],
    },
    PuzzleConfig {
        name: "spiralPower",
        size: 5,
        active_start: (2, 3),
        roadblocks: &[(2, 2)],
    },
    PuzzleConfig {
        name: "aroundTheWorld",
        size: 6,
        active_start: (0, 5),
        roadblocks: &[(1, 2), (4, 2), (1, 3), (4, 3)],
    },
    PuzzleConfig {
        name: "deliciousPi",
        size: 7,
        active_start: (2, 6),
        roadblocks: &[
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 1),
            (5, 1),
            (2, 2),
            (2, 3),
            (2, 4),
            (2, 5),
            (4, 2),
            (4, 3),
            (4, 4),
            (4, 5),
        ],
    },
];

/// Why a configuration load was requested.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadTrigger {
    Init,
    GameOver,
    Victory,
}

impl fmt::Display for LoadTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::GameOver => write!(f, "gameOver"),
            Self::Victory => write!(f, "gameVictory"),
        }
    }
}

/// Pick the next catalog index. Init starts over at 0, GameOver replays the
/// current puzzle, Victory advances and wraps past the last entry.
#[must_use]
pub fn select(trigger: LoadTrigger, current: usize, len: usize) -> usize {
    match trigger {
        LoadTrigger::Init => 0,
        LoadTrigger::GameOver => current,
        LoadTrigger::Victory => {
            if current + 1 >= len {
                0
            } else {
                current + 1
            }
        }
    }
}
