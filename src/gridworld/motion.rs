use serde::Serialize;
use std::fmt;

/// Compass moves, enumerated in the fixed order greedy ties resolve by.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Motion {
    Left,
    Up,
    Right,
    Down,
}

impl Motion {
    pub const fn all() -> &'static [Self] {
        &[Self::Left, Self::Up, Self::Right, Self::Down]
    }
    /// (row, col) displacement of one step; row 0 is the top edge.
    pub const fn offset(&self) -> (isize, isize) {
        match self {
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "←"),
            Self::Up => write!(f, "↑"),
            Self::Right => write!(f, "→"),
            Self::Down => write!(f, "↓"),
        }
    }
}
