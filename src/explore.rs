//! Full-coverage wall-following exploration.
//!
//! The Explorer runs one continuous wall-following sweep from the start
//! cell, sensing at every stop and growing the topology graph until the
//! sweep closes its cycle. Optionally a second sweep with the opposite side
//! convention picks up stops the first side never produces.

use std::collections::HashSet;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Direction, GridPos, Side};
use crate::env::{Effector, Environment};
use crate::error::{Result, TopoError};
use crate::graph::TopoGraph;
use crate::session::Session;

/// Configuration for the mapping sweep.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Wall-following side convention.
    /// Default: clockwise
    #[serde(default = "default_side")]
    pub side: Side,

    /// Heading memory at the start of the sweep.
    /// Default: up
    #[serde(default = "default_heading")]
    pub initial_heading: Direction,

    /// Also run a sweep with the opposite side after the primary sweep
    /// closes, merging its stops into the same graph. Regions reachable
    /// only via the opposite hugging side are missed otherwise.
    /// Default: false (single-side sweep)
    #[serde(default)]
    pub sweep_both_sides: bool,

    /// Motion step ceiling for the whole mapping session.
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
fn default_max_steps() -> usize {
    10_000
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            initial_heading: default_heading(),
            sweep_both_sides: false,
            max_steps: default_max_steps(),
        }
    }
}

impl ExplorerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the side convention.
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Builder-style setter for the initial heading memory.
    pub fn with_initial_heading(mut self, heading: Direction) -> Self {
        self.initial_heading = heading;
        self
    }

    /// Builder-style setter for the opposite-side sweep.
    pub fn with_sweep_both_sides(mut self, enabled: bool) -> Self {
        self.sweep_both_sides = enabled;
        self
    }

    /// Builder-style setter for the step ceiling.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

/// Outcome of a mapping run.
#[derive(Clone, Debug)]
pub struct MappingResult {
    /// The finished topology graph.
    pub graph: TopoGraph,
    /// Motion steps spent over the whole run.
    pub steps: usize,
    /// Cell the agent ended the run at.
    pub end_position: GridPos,
    /// Whether the primary sweep closed its cycle. False means the sweep
    /// hit a dead end (the start cell is enclosed).
    pub closed_loop: bool,
}

/// Wall-following maze mapper.
pub struct Explorer {
    config: ExplorerConfig,
}

impl Explorer {
    /// Create an explorer with the given configuration.
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ExplorerConfig::default())
    }

    /// Active configuration.
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Map the maze starting from `start`.
    ///
    /// Senses at the start cell, then alternates wall-following segments and
    /// sensing: an unmapped stop becomes a new node plus an edge from the
    /// previous stop; arriving back at a mapped cell records the closing
    /// edge and ends the sweep. A dead end (enclosed start) terminates the
    /// sweep without an error; all other failures propagate.
    pub fn map<E: Environment, F: Effector>(
        &self,
        env: &E,
        effector: &mut F,
        start: GridPos,
    ) -> Result<MappingResult> {
        let mut session = Session::new(
            env,
            effector,
            start,
            self.config.initial_heading,
            self.config.max_steps,
        );
        let mut graph = TopoGraph::new();

        let signature = session.sense();
        let mut last = graph.add_node(signature, start)?;
        debug!("[Explorer] start node {} at {} ({})", last, start, signature);

        let mut closed_loop = false;
        loop {
            let constraint = match session.follow_wall(self.config.side) {
                Ok(c) => c,
                Err(TopoError::DeadEnd { position }) => {
                    debug!("[Explorer] dead end at {}, sweep terminated", position);
                    break;
                }
                Err(e) => return Err(e),
            };
            let position = session.position();
            let signature = session.sense();
            if let Some(existing) = graph.node_at(position) {
                graph.add_edge(last, existing, constraint);
                debug!(
                    "[Explorer] cycle closed: {} -> {} via {}",
                    last, existing, constraint
                );
                closed_loop = true;
                break;
            }
            let node = graph.add_node(signature, position)?;
            graph.add_edge(last, node, constraint);
            debug!(
                "[Explorer] node {} at {} ({}), edge {} -> {} via {}",
                node, position, signature, last, node, constraint
            );
            last = node;
        }

        if self.config.sweep_both_sides {
            self.reverse_sweep(&mut session, &mut graph)?;
        }

        info!(
            "[Explorer] mapped {} nodes, {} edges in {} steps ({})",
            graph.node_count(),
            graph.edge_count(),
            session.steps_taken(),
            self.config.side
        );
        Ok(MappingResult {
            steps: session.steps_taken(),
            end_position: session.position(),
            closed_loop,
            graph,
        })
    }

    /// Sweep with the opposite side convention, merging into `graph`.
    ///
    /// Continues from wherever the primary sweep stopped. Terminates when a
    /// (position, heading-memory) state repeats: wall-following is a
    /// deterministic function of that state, so a repeat means the sweep has
    /// entered its cycle and no new stop can appear.
    fn reverse_sweep<E: Environment, F: Effector>(
        &self,
        session: &mut Session<'_, E, F>,
        graph: &mut TopoGraph,
    ) -> Result<()> {
        let side = self.config.side.opposite();
        let mut last = match graph.node_at(session.position()) {
            Some(id) => id,
            // The primary sweep always stops on a mapped cell.
            None => return Ok(()),
        };
        let mut seen: HashSet<(GridPos, Direction)> = HashSet::new();
        loop {
            if !seen.insert((session.position(), session.heading())) {
                break;
            }
            let constraint = match session.follow_wall(side) {
                Ok(c) => c,
                Err(TopoError::DeadEnd { position }) => {
                    debug!("[Explorer] reverse sweep dead end at {}", position);
                    break;
                }
                Err(e) => return Err(e),
            };
            let position = session.position();
            let node = match graph.node_at(position) {
                Some(id) => id,
                None => {
                    let signature = session.sense();
                    let id = graph.add_node(signature, position)?;
                    debug!(
                        "[Explorer] reverse node {} at {} ({})",
                        id, position, signature
                    );
                    id
                }
            };
            graph.add_edge(last, node, constraint);
            last = node;
        }
        Ok(())
    }
}
