//! Collaborator contracts: the sensed environment and the motion effector.
//!
//! The mapping and relocalization core never touches a physics engine or a
//! real robot directly. It consumes two constructor-injected interfaces:
//! [`Environment`] for pure openness sensing and single-cell transitions,
//! and [`Effector`] for the physical/simulated actuator that carries the
//! agent between cells. This keeps the core unit-testable without any
//! simulator (see [`crate::harness`] for a grid-backed implementation).

use crate::core::{Direction, GridPos, Signature};
use crate::error::Result;

/// Static grid environment the agent moves through.
///
/// Both operations are pure, synchronous, deterministic functions of the
/// wall layout. The only failure mode is stepping into a blocked cell,
/// which callers are responsible for avoiding via
/// [`Environment::sense_openings`]; if it happens anyway the implementation
/// must fail with [`TopoError::Blocked`](crate::TopoError::Blocked).
pub trait Environment {
    /// The 4-bit openness vector for the four neighbors of `position`.
    /// Pure, no side effects; may be queried for any cell.
    fn sense_openings(&self, position: GridPos) -> Signature;

    /// The cell reached by moving one step in `direction`.
    ///
    /// # Errors
    /// [`TopoError::Blocked`](crate::TopoError::Blocked) if the target cell
    /// is a wall or outside the grid.
    fn step(&self, position: GridPos, direction: Direction) -> Result<GridPos>;
}

/// Motion executor that performs the physical transition between two cells.
///
/// The core treats execution as blocking: the move has completed (or failed)
/// by the time the call returns, so sensing at the new cell is always valid
/// afterwards. Failures surface as
/// [`TopoError::Motion`](crate::TopoError::Motion).
pub trait Effector {
    /// Carry the agent from `from` to the adjacent cell `to`.
    fn execute(&mut self, from: GridPos, to: GridPos) -> Result<()>;
}
