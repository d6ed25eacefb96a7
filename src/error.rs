//! Error types for vastu-topo.

use thiserror::Error;

use crate::core::{Direction, GridPos};

/// vastu-topo error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopoError {
    /// A motion primitive was asked to step into a wall or the grid boundary.
    /// Callers are required to check openness first, so this is a
    /// programming-logic fault and is never retried.
    #[error("blocked: cannot step {direction} from {position}")]
    Blocked {
        /// Cell the step was attempted from.
        position: GridPos,
        /// Requested heading.
        direction: Direction,
    },

    /// A full 360° wall-following scan found no valid heading. Recoverable
    /// for the Explorer (the sweep terminates); fatal for the Localizer
    /// (the environment is inconsistent with the recorded graph).
    #[error("dead end: no wall-following exit from {position}")]
    DeadEnd {
        /// Cell the scan was performed at.
        position: GridPos,
    },

    /// Disambiguation probes exceeded the configured ceiling without
    /// converging to a single candidate.
    #[error("ambiguity unresolved after {probes} probes ({candidates} candidates remain)")]
    AmbiguityBoundExceeded {
        /// Probes performed.
        probes: usize,
        /// Candidates still alive.
        candidates: usize,
    },

    /// The current signature matched no recorded node even after bounded
    /// exploratory probing. The caller decides whether this is new territory
    /// to map or an aborted localization.
    #[error("signature not found in graph after {probes} probes")]
    SignatureNotFound {
        /// Probes performed.
        probes: usize,
    },

    /// The per-session motion step ceiling was reached. Guards against
    /// unbounded wall-following on malformed or disconnected maps.
    #[error("step budget exhausted ({limit} steps)")]
    StepBudgetExhausted {
        /// Configured ceiling.
        limit: usize,
    },

    /// The motion effector failed to execute a commanded transition.
    #[error("motion failure: {0}")]
    Motion(String),

    /// `add_node` was called for a cell that is already mapped.
    #[error("position {position} is already mapped")]
    PositionAlreadyMapped {
        /// Offending cell.
        position: GridPos,
    },

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for TopoError {
    fn from(e: toml::de::Error) -> Self {
        TopoError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TopoError>;
