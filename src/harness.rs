//! Simulated grid environment for tests and offline runs.
//!
//! [`GridMaze`] implements [`Environment`] over a rectangular boolean wall
//! matrix. The
//! effectors here stand in for a real actuator: [`NoopEffector`] succeeds
//! silently, [`RecordingEffector`] additionally records every commanded
//! transition so tests can assert on the travelled path.

use crate::core::{Direction, GridPos, Signature};
use crate::env::{Effector, Environment};
use crate::error::{Result, TopoError};

/// Rectangular grid maze backed by a boolean wall matrix.
///
/// Cell (x, y) is wall when `walls[y][x]` is true; anything outside the
/// rectangle counts as wall. Row 0 is y = 0 and y grows upward, matching
/// the heading convention in [`Direction`].
#[derive(Clone, Debug)]
pub struct GridMaze {
    width: usize,
    height: usize,
    /// Row-major wall flags, indexed `[y * width + x]`.
    walls: Vec<bool>,
}

impl GridMaze {
    /// Build from rows of wall flags, `rows[y][x]`, true = wall.
    ///
    /// Rows shorter than the widest row are padded with walls.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut walls = vec![true; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, &wall) in row.iter().enumerate() {
                walls[y * width + x] = wall;
            }
        }
        Self {
            width,
            height,
            walls,
        }
    }

    /// Build from an ASCII sketch, `'#'` = wall, anything else = free.
    ///
    /// The first line is the *top* row of the maze (highest y), so the
    /// sketch reads the way the maze looks.
    pub fn parse(sketch: &str) -> Self {
        let rows: Vec<Vec<bool>> = sketch
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| line.chars().map(|c| c == '#').collect())
            .rev()
            .collect();
        Self::from_rows(&rows)
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is this cell a wall or outside the grid?
    #[inline]
    pub fn is_wall(&self, position: GridPos) -> bool {
        if position.x < 0
            || position.y < 0
            || position.x >= self.width as i32
            || position.y >= self.height as i32
        {
            return true;
        }
        self.walls[position.y as usize * self.width + position.x as usize]
    }

    /// All free cells in row-major order (deterministic).
    pub fn free_cells(&self) -> Vec<GridPos> {
        let mut cells = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let p = GridPos::new(x, y);
                if !self.is_wall(p) {
                    cells.push(p);
                }
            }
        }
        cells
    }

    /// Brute-force signature of every free cell.
    ///
    /// This is the independent re-derivation the round-trip property in the
    /// test suite compares the explored graph against.
    pub fn signature_census(&self) -> Vec<(GridPos, Signature)> {
        self.free_cells()
            .into_iter()
            .map(|p| (p, self.sense_openings(p)))
            .collect()
    }
}

impl Environment for GridMaze {
    fn sense_openings(&self, position: GridPos) -> Signature {
        let mut bits = [false; 4];
        for d in Direction::ALL {
            bits[d.index()] = !self.is_wall(position.neighbor(d));
        }
        Signature::from_bits(bits)
    }

    fn step(&self, position: GridPos, direction: Direction) -> Result<GridPos> {
        let target = position.neighbor(direction);
        if self.is_wall(target) {
            return Err(TopoError::Blocked {
                position,
                direction,
            });
        }
        Ok(target)
    }
}

/// Effector that succeeds without doing anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEffector;

impl Effector for NoopEffector {
    fn execute(&mut self, _from: GridPos, _to: GridPos) -> Result<()> {
        Ok(())
    }
}

/// Effector that records every commanded transition.
#[derive(Clone, Debug, Default)]
pub struct RecordingEffector {
    /// Executed transitions in order.
    pub moves: Vec<(GridPos, GridPos)>,
}

impl RecordingEffector {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells visited, starting from the first transition's origin.
    pub fn trajectory(&self) -> Vec<GridPos> {
        let mut cells = Vec::with_capacity(self.moves.len() + 1);
        if let Some(&(from, _)) = self.moves.first() {
            cells.push(from);
        }
        cells.extend(self.moves.iter().map(|&(_, to)| to));
        cells
    }
}

impl Effector for RecordingEffector {
    fn execute(&mut self, from: GridPos, to: GridPos) -> Result<()> {
        self.moves.push((from, to));
        Ok(())
    }
}

/// The 4×4 test maze: walls at (1,0), (2,0), (1,1), (2,1), free cells
/// forming a ring corridor.
#[cfg(test)]
pub(crate) fn reference_maze() -> GridMaze {
    GridMaze::from_rows(&[
        vec![false, true, true, false],
        vec![false, true, true, false],
        vec![false, false, false, false],
        vec![false, false, false, false],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_walls() {
        let maze = reference_maze();
        assert!(maze.is_wall(GridPos::new(-1, 0)));
        assert!(maze.is_wall(GridPos::new(0, -1)));
        assert!(maze.is_wall(GridPos::new(4, 0)));
        assert!(maze.is_wall(GridPos::new(0, 4)));
    }

    #[test]
    fn test_reference_maze_layout() {
        let maze = reference_maze();
        assert!(maze.is_wall(GridPos::new(1, 0)));
        assert!(maze.is_wall(GridPos::new(2, 1)));
        assert!(!maze.is_wall(GridPos::new(0, 0)));
        assert!(!maze.is_wall(GridPos::new(3, 3)));
        assert_eq!(maze.free_cells().len(), 12);
    }

    #[test]
    fn test_sense_openings_at_origin() {
        let maze = reference_maze();
        let sig = maze.sense_openings(GridPos::new(0, 0));
        // Open up; walled right (wall cell), down and left (boundary).
        assert_eq!(sig, Signature::from_bits([true, false, false, false]));
    }

    #[test]
    fn test_step_blocked_is_typed() {
        let maze = reference_maze();
        let err = maze
            .step(GridPos::new(0, 0), Direction::Right)
            .unwrap_err();
        assert_eq!(
            err,
            TopoError::Blocked {
                position: GridPos::new(0, 0),
                direction: Direction::Right,
            }
        );
    }

    #[test]
    fn test_parse_matches_from_rows() {
        // Same ring corridor as the reference maze, sketched top-down.
        let maze = GridMaze::parse(
            "....\n\
             ....\n\
             .##.\n\
             .##.",
        );
        let reference = reference_maze();
        for y in 0..4 {
            for x in 0..4 {
                let p = GridPos::new(x, y);
                assert_eq!(maze.is_wall(p), reference.is_wall(p), "cell {}", p);
            }
        }
    }

    #[test]
    fn test_recording_effector_trajectory() {
        let mut eff = RecordingEffector::new();
        eff.execute(GridPos::new(0, 0), GridPos::new(0, 1)).unwrap();
        eff.execute(GridPos::new(0, 1), GridPos::new(0, 2)).unwrap();
        assert_eq!(
            eff.trajectory(),
            vec![GridPos::new(0, 0), GridPos::new(0, 1), GridPos::new(0, 2)]
        );
    }

    #[test]
    fn test_census_covers_free_cells() {
        let maze = reference_maze();
        let census = maze.signature_census();
        assert_eq!(census.len(), 12);
        for (pos, sig) in census {
            assert_eq!(sig, maze.sense_openings(pos));
        }
    }
}
