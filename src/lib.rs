//! # Vastu-Topo: Topological Grid Mapping and Relocalization
//!
//! A mapping and relocalization library for an agent that has no absolute
//! position sensor: its only observation is which of the four cardinal
//! neighbors of its current cell are open. From that 4-bit signature alone
//! the agent explores an unknown grid maze by deterministic wall-following,
//! records a directed graph of distinct observed states, and later, dropped
//! at an unknown cell, resolves where it is by matching signatures against
//! the graph and moving to break ties.
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_topo::{Explorer, GridPos, Localizer};
//! use vastu_topo::harness::{GridMaze, NoopEffector};
//!
//! // A 4x4 ring corridor: outer cells free, a 2x2 wall block inside.
//! let maze = GridMaze::parse(
//!     "....\n\
//!      ....\n\
//!      .##.\n\
//!      .##.",
//! );
//!
//! // Map it once with a clockwise wall-following sweep.
//! let mut effector = NoopEffector;
//! let mapped = Explorer::with_defaults()
//!     .map(&maze, &mut effector, GridPos::new(0, 0))
//!     .unwrap();
//!
//! // Later: dropped somewhere unknown, resolve the topological state.
//! let result = Localizer::with_defaults(&mapped.graph)
//!     .locate(&maze, &mut effector, GridPos::new(3, 0))
//!     .unwrap();
//! println!("resolved {} after {} probes", result.node, result.probes);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (`Direction`, `Side`, `GridPos`,
//!   `Signature`)
//! - [`env`]: collaborator contracts (`Environment`, `Effector`)
//! - [`session`]: exploration session state and the motion primitives
//!   (straight travel, single-segment wall-following)
//! - [`graph`]: the append-only topology graph keyed by signature
//! - [`explore`]: the mapping sweep that populates the graph
//! - [`localize`]: the signature-matching state machine with bounded
//!   disambiguation probing
//! - [`config`]: TOML file configuration
//! - [`harness`]: simulated grid environment for tests and offline runs
//!
//! ## Data Flow
//!
//! ```text
//!  ┌─────────────┐  sense/step   ┌─────────────┐
//!  │ Environment │◄──────────────│   Session   │  position, heading
//!  │  (adapter)  │               │  (motion    │  memory, step budget
//!  └─────────────┘               │  primitives)│
//!  ┌─────────────┐  execute      └──────┬──────┘
//!  │  Effector   │◄───────────┬─────────┤
//!  │ (actuator)  │            │         │
//!  └─────────────┘     ┌──────┴───┐ ┌───┴──────┐
//!                      │ Explorer │ │ Localizer│
//!                      └──────┬───┘ └───┬──────┘
//!                      writes │         │ reads
//!                             ▼         ▼
//!                          ┌──────────────┐
//!                          │  TopoGraph   │──► consumer (counts,
//!                          │ (signatures) │    signatures, edges)
//!                          └──────────────┘
//! ```
//!
//! ## Determinism
//!
//! Wall-following scans candidate headings in a strict rotation order from
//! the heading memory, so the same maze, start cell, and side convention
//! always produce the same graph, node for node and edge for edge. That is
//! what makes signature-based relocalization against the recorded graph
//! sound.

pub mod config;
pub mod core;
pub mod env;
pub mod error;
pub mod explore;
pub mod graph;
pub mod harness;
pub mod localize;
pub mod session;

// Re-export main types at crate root
pub use config::TopoConfig;
pub use crate::core::{Direction, GridPos, Side, Signature};
pub use env::{Effector, Environment};
pub use error::{Result, TopoError};
pub use explore::{Explorer, ExplorerConfig, MappingResult};
pub use graph::{Edge, Node, NodeId, TopoGraph};
pub use localize::{
    pick_one_direction, LocalizeResult, Localizer, LocalizerConfig, LocalizerPhase,
};
pub use session::Session;
