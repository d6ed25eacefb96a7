//! Exploration session state and motion primitives.
//!
//! A [`Session`] owns all mutable traversal state:
//! the agent's current cell, the heading memory left behind by the last
//! wall-following turn, and the motion step counter with its budget. The
//! Explorer and Localizer thread a session through every motion primitive
//! call, so the same primitives serve both mapping and relocalization.

use log::{debug, trace};

use crate::core::{Direction, GridPos, Side, Signature};
use crate::env::{Effector, Environment};
use crate::error::{Result, TopoError};

/// Agent state threaded through all motion primitives.
///
/// The heading memory persists across [`follow_wall`](Session::follow_wall)
/// calls: each accepted turn rewinds it to the hug side of the chosen
/// heading so the next scan starts from a consistent reference. This is what
/// makes the wall-following traversal deterministic and reproducible.
pub struct Session<'a, E: Environment, F: Effector> {
    env: &'a E,
    effector: &'a mut F,
    position: GridPos,
    heading: Direction,
    steps_taken: usize,
    max_steps: usize,
}

impl<'a, E: Environment, F: Effector> Session<'a, E, F> {
    /// Start a session at `start` with the given heading memory and step
    /// budget.
    pub fn new(
        env: &'a E,
        effector: &'a mut F,
        start: GridPos,
        initial_heading: Direction,
        max_steps: usize,
    ) -> Self {
        Self {
            env,
            effector,
            position: start,
            heading: initial_heading,
            steps_taken: 0,
            max_steps,
        }
    }

    /// Current cell.
    #[inline]
    pub fn position(&self) -> GridPos {
        self.position
    }

    /// Current heading memory (last direction-of-travel reference).
    #[inline]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Motion steps taken so far.
    #[inline]
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Signature at the current cell.
    #[inline]
    pub fn sense(&self) -> Signature {
        self.env.sense_openings(self.position)
    }

    /// Take one step in `direction` through the effector.
    ///
    /// Counts against the step budget. The environment rejects blocked
    /// targets with [`TopoError::Blocked`]; callers must have checked
    /// openness already, so that error is a logic fault, not a retry.
    fn advance(&mut self, direction: Direction) -> Result<()> {
        if self.steps_taken >= self.max_steps {
            return Err(TopoError::StepBudgetExhausted {
                limit: self.max_steps,
            });
        }
        let next = self.env.step(self.position, direction)?;
        self.effector.execute(self.position, next)?;
        trace!("[Session] step {} -> {}", self.position, next);
        self.position = next;
        self.steps_taken += 1;
        Ok(())
    }

    /// Travel straight in `direction` until the next cell is a wall.
    ///
    /// Stops inclusive at the last open cell; returns the number of cells
    /// moved (zero if already against a wall). Used to establish an initial
    /// reference wall to hug.
    pub fn move_until_wall(&mut self, direction: Direction) -> Result<usize> {
        let mut moved = 0;
        while self.sense().is_open(direction) {
            self.advance(direction)?;
            moved += 1;
        }
        debug!(
            "[Session] move_until_wall {}: {} cells, now at {}",
            direction, moved, self.position
        );
        Ok(moved)
    }

    /// Follow the hugged wall for exactly one corridor segment.
    ///
    /// Scans candidate headings starting at the heading memory, rotating in
    /// the side's scan order, until it finds a heading whose forward cell is
    /// open and whose forward cell has a wall on the hugged side. It then
    /// rewinds the heading memory to the hug side of that heading, takes one
    /// step, and continues straight via [`keep_moving`](Session::keep_moving).
    ///
    /// Returns the constraint direction the segment ended against.
    ///
    /// # Errors
    /// [`TopoError::DeadEnd`] if a full 360° scan finds no valid heading:
    /// the agent is enclosed or the map is inconsistent. Callers must
    /// surface this, not retry.
    pub fn follow_wall(&mut self, side: Side) -> Result<Direction> {
        let mut candidate = self.heading;
        for _ in 0..4 {
            let hug = side.hug_of(candidate);
            if self.sense().is_open(candidate) {
                let ahead = self.position.neighbor(candidate);
                // Hug check is on the cell ahead: accepting a heading whose
                // forward cell has open space on the hug side would veer
                // away from the wall instead of following it.
                if !self.env.sense_openings(ahead).is_open(hug) {
                    self.heading = hug;
                    debug!(
                        "[Session] follow_wall {}: heading {} from {}",
                        side, candidate, self.position
                    );
                    self.advance(candidate)?;
                    return self.keep_moving(candidate, side);
                }
            }
            candidate = side.scan_step(candidate);
        }
        Err(TopoError::DeadEnd {
            position: self.position,
        })
    }

    /// Continue straight in `direction` while the corridor constraint holds.
    ///
    /// Steps forward as long as the forward cell is open and the hug-side
    /// cell of the current position is a wall; stops the instant either
    /// condition breaks (a junction or a dead straightaway end). Returns the
    /// constraint direction for the caller to act on next.
    pub fn keep_moving(&mut self, direction: Direction, side: Side) -> Result<Direction> {
        let hug = side.hug_of(direction);
        loop {
            let sig = self.sense();
            if !sig.is_open(direction) || sig.is_open(hug) {
                break;
            }
            self.advance(direction)?;
        }
        debug!(
            "[Session] segment done at {} (constraint {})",
            self.position, hug
        );
        Ok(hug)
    }
}
