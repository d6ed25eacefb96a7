//! Grid cell coordinates.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Integer cell coordinate on the maze grid.
///
/// Ground truth only: the environment and the Explorer use positions for
/// bookkeeping, but relocalization never consumes them; it operates purely
/// on signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridPos {
    /// Create a new cell coordinate.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> GridPos {
        let (dx, dy) = direction.offset();
        GridPos::new(self.x + dx, self.y + dy)
    }

    /// The 4 cardinal neighbors in heading order (up, right, down, left).
    #[inline]
    pub fn neighbors(self) -> [GridPos; 4] {
        [
            self.neighbor(Direction::Up),
            self.neighbor(Direction::Right),
            self.neighbor(Direction::Down),
            self.neighbor(Direction::Left),
        ]
    }

    /// Manhattan distance to another cell.
    #[inline]
    pub fn manhattan_distance(self, other: GridPos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
