//! Tile state and display-color types for the puzzle grid.

use std::fmt;

/// Visitation state of one grid cell. Discriminants are stable — the
/// draw-command color codes in [`Color`] line up with them.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TileState {
    Uncleared = 0,
    Cleared = 1,
    Active = 2,
    Roadblock = 3,
    Victory = 4,
    GameOver = 5,
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncleared => write!(f, "Uncleared"),
            Self::Cleared => write!(f, "Cleared"),
            Self::Active => write!(f, "Active"),
            Self::Roadblock => write!(f, "Roadblock"),
            Self::Victory => write!(f, "Victory"),
            Self::GameOver => write!(f, "GameOver"),
        }
    }
}

impl TileState {
    /// Display color for this state.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Uncleared => Color::Blue,
            Self::Cleared => Color::Red,
            Self::Active => Color::Yellow,
            Self::Roadblock => Color::Magenta,
            Self::Victory => Color::Green,
            Self::GameOver => Color::Black,
        }
    }

    /// A cell in this state can never become a move target until the grid
    /// is rebuilt.
    #[must_use]
    pub fn blocks_movement(self) -> bool {
        matches!(self, Self::Cleared | Self::Roadblock)
    }
}

/// Fill colors understood by the display surface.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Blue = 0,
    Red = 1,
    Yellow = 2,
    Magenta = 3,
    Green = 4,
    Black = 5,
}

impl Color {
    /// Wire value used in the flat draw-command buffer.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// CSS color name, for hosts that fill by name.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Green => "green",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_name())
    }
}
