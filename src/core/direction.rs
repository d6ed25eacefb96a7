//! Cardinal headings and the wall-following side convention.

use serde::{Deserialize, Serialize};

/// A cardinal heading on the grid.
///
/// Headings are indexed 0..4 in the order up, right, down, left so that
/// adding 1 (mod 4) rotates clockwise. All scanning and hugging rules in
/// [`Side`] are defined in terms of this ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// +Y
    Up = 0,
    /// +X
    Right = 1,
    /// -Y
    Down = 2,
    /// -X
    Left = 3,
}

impl Direction {
    /// All headings in index order (up, right, down, left).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Heading index in 0..4.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Heading from an index (taken mod 4).
    #[inline]
    pub fn from_index(index: usize) -> Direction {
        Self::ALL[index % 4]
    }

    /// Rotate 90° clockwise (up → right → down → left → up).
    #[inline]
    pub fn rotated_cw(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    /// Rotate 90° counter-clockwise.
    #[inline]
    pub fn rotated_ccw(self) -> Direction {
        Self::from_index(self.index() + 3)
    }

    /// Opposite heading.
    #[inline]
    pub fn opposite(self) -> Direction {
        Self::from_index(self.index() + 2)
    }

    /// Unit step (dx, dy) for one cell of travel in this heading.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }

    /// Lowercase name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which wall the agent hugs while corridor-following.
///
/// The side fixes two derived rotations used by the motion primitives:
/// the *hug* direction (where the wall is expected, relative to the current
/// heading) and the *scan* rotation (the order candidate headings are tried
/// in when the corridor turns).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    /// Hug the wall on the counter-clockwise side of travel; scan clockwise.
    Clockwise,
    /// Hug the wall on the clockwise side of travel; scan counter-clockwise.
    CounterClockwise,
}

impl Side {
    /// Direction of the hugged wall relative to a heading.
    #[inline]
    pub fn hug_of(self, heading: Direction) -> Direction {
        match self {
            Side::Clockwise => heading.rotated_ccw(),
            Side::CounterClockwise => heading.rotated_cw(),
        }
    }

    /// Next candidate heading when scanning for an exit.
    #[inline]
    pub fn scan_step(self, heading: Direction) -> Direction {
        match self {
            Side::Clockwise => heading.rotated_cw(),
            Side::CounterClockwise => heading.rotated_ccw(),
        }
    }

    /// The other side convention.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Clockwise => Side::CounterClockwise,
            Side::CounterClockwise => Side::Clockwise,
        }
    }

    /// Name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Side::Clockwise => "clockwise",
            Side::CounterClockwise => "counter-clockwise",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
