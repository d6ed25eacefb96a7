//! Signature-based relocalization against a recorded topology graph.
//!
//! The Localizer is dropped at an unknown cell and works purely from
//! signatures: it matches the current observation against the graph and,
//! while more than one node fits, performs controlled wall-following moves
//! to gather distinguishing information. Ground-truth position flows only
//! through the session's environment bookkeeping, never into matching.

use std::collections::HashSet;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Direction, GridPos, Side, Signature};
use crate::env::{Effector, Environment};
use crate::error::{Result, TopoError};
use crate::graph::{NodeId, TopoGraph};
use crate::session::Session;

/// Configuration for a relocalization run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalizerConfig {
    /// Wall-following side convention for disambiguation probes. Must match
    /// the convention the graph was explored with for edge narrowing to
    /// apply.
    /// Default: clockwise
    #[serde(default = "default_side")]
    pub side: Side,

    /// Heading memory at the start of the run.
    /// Default: up
    #[serde(default = "default_heading")]
    pub initial_heading: Direction,

    /// First travel direction when the initial signature matches nothing.
    /// Default: up
    #[serde(default = "default_heading")]
    pub initial_probe_direction: Direction,

    /// Ceiling on disambiguation/search probes before failing fast.
    /// Default: 32
    #[serde(default = "default_max_probes")]
    pub max_probes: usize,

    /// Motion step ceiling for the whole run.
    /// Default: 10000
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_side() -> Side {
    Side::Clockwise
}
fn default_heading() -> Direction {
    Direction::Up
}
fn default_max_probes() -> usize {
    32
}
fn default_max_steps() -> usize {
    10_000
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            initial_heading: default_heading(),
            initial_probe_direction: default_heading(),
            max_probes: default_max_probes(),
            max_steps: default_max_steps(),
        }
    }
}

impl LocalizerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the side convention.
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Builder-style setter for the probe ceiling.
    pub fn with_max_probes(mut self, max_probes: usize) -> Self {
        self.max_probes = max_probes;
        self
    }

    /// Builder-style setter for the step ceiling.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Builder-style setter for the first unmatched-probe direction.
    pub fn with_initial_probe_direction(mut self, direction: Direction) -> Self {
        self.initial_probe_direction = direction;
        self
    }
}

/// Phase of the relocalization state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalizerPhase {
    /// Current signature matches no recorded node.
    Unmatched,
    /// Two or more candidates fit; probing to disambiguate.
    Ambiguous,
    /// Exactly one candidate remains (terminal).
    Resolved,
}

impl LocalizerPhase {
    /// Phase implied by a candidate count.
    pub fn from_candidates(count: usize) -> Self {
        match count {
            0 => LocalizerPhase::Unmatched,
            1 => LocalizerPhase::Resolved,
            _ => LocalizerPhase::Ambiguous,
        }
    }

    /// Phase name for logging.
    pub fn name(self) -> &'static str {
        match self {
            LocalizerPhase::Unmatched => "Unmatched",
            LocalizerPhase::Ambiguous => "Ambiguous",
            LocalizerPhase::Resolved => "Resolved",
        }
    }
}

/// Outcome of a successful relocalization.
#[derive(Clone, Debug)]
pub struct LocalizeResult {
    /// The resolved node.
    pub node: NodeId,
    /// Signature observed at the final cell.
    pub signature: Signature,
    /// Ground-truth cell the agent ended at (debug metadata; matching never
    /// used it).
    pub position: GridPos,
    /// Disambiguation/search probes performed.
    pub probes: usize,
    /// Motion steps spent.
    pub steps: usize,
}

/// Among open headings, pick one suited to start corridor-following.
///
/// Prefers a heading with a wall on an adjacent side, returning that
/// heading together with the side convention that hugs the wall (the
/// counter-clockwise neighbor is checked first, matching the exploration
/// scan order). An open heading with no adjacent wall comes back without a
/// side; the caller probes it with straight travel instead. `None` means
/// the cell is fully enclosed.
pub fn pick_one_direction(signature: Signature) -> Option<(Direction, Option<Side>)> {
    let mut fallback = None;
    for d in Direction::ALL {
        if !signature.is_open(d) {
            continue;
        }
        if !signature.is_open(d.rotated_ccw()) {
            return Some((d, Some(Side::Clockwise)));
        }
        if !signature.is_open(d.rotated_cw()) {
            return Some((d, Some(Side::CounterClockwise)));
        }
        if fallback.is_none() {
            fallback = Some(d);
        }
    }
    fallback.map(|d| (d, None))
}

/// Relocalizer over a finished topology graph.
///
/// Read-only with respect to the graph; a single run owns its own session
/// state and can be repeated at will.
pub struct Localizer<'g> {
    graph: &'g TopoGraph,
    config: LocalizerConfig,
}

impl<'g> Localizer<'g> {
    /// Create a localizer over `graph`.
    pub fn new(graph: &'g TopoGraph, config: LocalizerConfig) -> Self {
        Self { graph, config }
    }

    /// Create with default configuration.
    pub fn with_defaults(graph: &'g TopoGraph) -> Self {
        Self::new(graph, LocalizerConfig::default())
    }

    /// Resolve the agent's topological state starting from `start`.
    ///
    /// `start` is the agent's true cell, threaded through only so the
    /// environment adapter can answer sensing and stepping; the matching
    /// logic consumes signatures exclusively.
    ///
    /// # Errors
    /// - [`TopoError::SignatureNotFound`] if no recorded signature matches
    ///   within the probe ceiling (new territory or stale graph).
    /// - [`TopoError::AmbiguityBoundExceeded`] if ≥2 candidates survive the
    ///   probe ceiling.
    /// - [`TopoError::DeadEnd`] if wall-following finds no exit: here the
    ///   environment is inconsistent with the recorded graph, so this is
    ///   fatal rather than recoverable.
    pub fn locate<E: Environment, F: Effector>(
        &self,
        env: &E,
        effector: &mut F,
        start: GridPos,
    ) -> Result<LocalizeResult> {
        let cfg = &self.config;
        let mut session = Session::new(env, effector, start, cfg.initial_heading, cfg.max_steps);
        let mut probes = 0;

        let mut signature = session.sense();
        let mut candidates = self.graph.find_by_signature(signature).to_vec();
        debug!(
            "[Localizer] initial signature {} -> {} candidate(s), phase {}",
            signature,
            candidates.len(),
            LocalizerPhase::from_candidates(candidates.len()).name()
        );

        if candidates.is_empty() {
            // Establish a reference wall first, then probe corridor by
            // corridor until some recorded signature appears.
            session.move_until_wall(cfg.initial_probe_direction)?;
            signature = session.sense();
            candidates = self.graph.find_by_signature(signature).to_vec();
            while candidates.is_empty() {
                if probes >= cfg.max_probes {
                    return Err(TopoError::SignatureNotFound { probes });
                }
                match pick_one_direction(signature) {
                    Some((direction, Some(side))) => {
                        debug!(
                            "[Localizer] unmatched probe: corridor {} hugging {}",
                            direction, side
                        );
                        session.keep_moving(direction, side)?;
                    }
                    Some((direction, None)) => {
                        debug!("[Localizer] unmatched probe: straight {}", direction);
                        session.move_until_wall(direction)?;
                    }
                    None => {
                        return Err(TopoError::DeadEnd {
                            position: session.position(),
                        })
                    }
                }
                probes += 1;
                signature = session.sense();
                candidates = self.graph.find_by_signature(signature).to_vec();
            }
            debug!(
                "[Localizer] matched {} after {} probe(s): {} candidate(s)",
                signature,
                probes,
                candidates.len()
            );
        }

        while candidates.len() != 1 {
            if probes >= cfg.max_probes {
                return Err(TopoError::AmbiguityBoundExceeded {
                    probes,
                    candidates: candidates.len(),
                });
            }
            let constraint = session.follow_wall(cfg.side)?;
            probes += 1;
            signature = session.sense();
            candidates = self.narrow(&candidates, constraint, signature);
            debug!(
                "[Localizer] probe {} ({}): signature {} -> {} candidate(s)",
                probes,
                constraint,
                signature,
                candidates.len()
            );
        }

        let node = candidates[0];
        info!(
            "[Localizer] resolved {} after {} probe(s), {} step(s)",
            node,
            probes,
            session.steps_taken()
        );
        Ok(LocalizeResult {
            node,
            signature,
            position: session.position(),
            probes,
            steps: session.steps_taken(),
        })
    }

    /// Shrink the candidate set using the new observation.
    ///
    /// A candidate survives when its signature matches the fresh observation
    /// and some previous candidate reaches it through an edge labeled with
    /// the constraint direction the probe just reported. If the edge filter
    /// empties the set (the probe crossed a transition the exploration sweep
    /// never recorded), the signature match alone is kept so the probe bound
    /// still governs termination.
    fn narrow(
        &self,
        previous: &[NodeId],
        constraint: Direction,
        signature: Signature,
    ) -> Vec<NodeId> {
        let by_signature = self.graph.find_by_signature(signature);
        let reachable: HashSet<NodeId> = previous
            .iter()
            .flat_map(|&c| self.graph.successors_via(c, constraint))
            .collect();
        let narrowed: Vec<NodeId> = by_signature
            .iter()
            .copied()
            .filter(|id| reachable.contains(id))
            .collect();
        if narrowed.is_empty() {
            by_signature.to_vec()
        } else {
            narrowed
        }
    }
}
