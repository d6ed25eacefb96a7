//! The topology graph built during exploration.
//!
//! Nodes are discovered local states, not raw coordinates: a node's identity
//! is its discovery sequence index, and matching is keyed purely by
//! signature. The discovery position is retained as auxiliary debug
//! metadata only; relocalization never consults it. Two nodes may
//! legitimately share a signature (distinct cells with identical local wall
//! patterns); that is the designed-for ambiguity the Localizer resolves.
//!
//! The graph is append-only: the Explorer is its only writer and the
//! Localizer only reads. No deletion is supported.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GridPos, Signature};
use crate::error::{Result, TopoError};

/// Identifier of a discovered node: its discovery sequence index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A discovered topological state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier (discovery sequence index).
    pub id: NodeId,
    /// The local openness signature observed at discovery.
    pub signature: Signature,
    /// Ground-truth discovery cell. Debug metadata only: matching is keyed
    /// by signature, never by position.
    pub position: GridPos,
}

/// A directed transition recorded during exploration, labeled with the
/// constraint direction the traversal segment ended against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node.
    pub from: NodeId,
    /// Destination node.
    pub to: NodeId,
    /// Constraint direction reported by the wall-following segment.
    pub constraint: Direction,
}

/// Append-only store of discovered nodes and transitions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TopoGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Signature → discovery-ordered node ids sharing it.
    #[serde(skip)]
    by_signature: HashMap<Signature, Vec<NodeId>>,
    /// Discovery position → node id (Explorer bookkeeping).
    #[serde(skip)]
    by_position: HashMap<GridPos, NodeId>,
}

impl TopoGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node discovered at `position` with `signature`.
    ///
    /// # Errors
    /// [`TopoError::PositionAlreadyMapped`] if a node was already recorded
    /// for this cell; callers are expected to check
    /// [`node_at`](TopoGraph::node_at) first.
    pub fn add_node(&mut self, signature: Signature, position: GridPos) -> Result<NodeId> {
        if self.by_position.contains_key(&position) {
            return Err(TopoError::PositionAlreadyMapped { position });
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            signature,
            position,
        });
        self.by_signature.entry(signature).or_default().push(id);
        self.by_position.insert(position, id);
        Ok(id)
    }

    /// Append a directed edge labeled with its constraint direction.
    ///
    /// Edges are recorded once per discovered transition; revisits via
    /// different headings produce distinct entries.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, constraint: Direction) {
        self.edges.push(Edge {
            from,
            to,
            constraint,
        });
    }

    /// All node ids whose recorded signature equals `signature`, in
    /// discovery order. May be empty, a single id, or many.
    pub fn find_by_signature(&self, signature: Signature) -> &[NodeId] {
        self.by_signature
            .get(&signature)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Node recorded at a discovery position, if any.
    pub fn node_at(&self, position: GridPos) -> Option<NodeId> {
        self.by_position.get(&position).copied()
    }

    /// Node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// All nodes in discovery order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Destinations of edges leaving `from` whose label is `constraint`.
    pub fn successors_via(
        &self,
        from: NodeId,
        constraint: Direction,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.edges
            .iter()
            .filter(move |e| e.from == from && e.constraint == constraint)
            .map(|e| e.to)
    }

    /// Rebuild the signature and position indexes from the node list.
    ///
    /// Needed after deserializing, since the indexes are derived data and
    /// are skipped by serde.
    pub fn rebuild_index(&mut self) {
        self.by_signature.clear();
        self.by_position.clear();
        for node in &self.nodes {
            self.by_signature
                .entry(node.signature)
                .or_default()
                .push(node.id);
            self.by_position.insert(node.position, node.id);
        }
    }
}

impl std::fmt::Display for TopoGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TopoGraph({} nodes, {} edges)",
            self.node_count(),
            self.edge_count()
        )
    }
}
