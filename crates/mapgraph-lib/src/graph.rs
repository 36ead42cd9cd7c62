use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};

/// Numeric identifier for a graph node. Maps are expected to index their
/// nodes densely from zero; the resolver relies on that range.
pub type NodeId = usize;

/// Cartesian coordinates for a node on the map plane.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    ///
    /// Used as the A* heuristic. It is admissible only while edge weights
    /// stay at or above straight-line scale, which is a caller guarantee.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A named, positioned location on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub position: Position,
}

/// Directed weighted edge stored in a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// Mutable accumulator for graph loading. Consumed by [`GraphBuilder::build`]
/// so nothing can mutate a [`Graph`] once queries start.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: BTreeMap<NodeId, Node>,
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any previous node with the same index.
    ///
    /// Idempotent insert by index: the loader may legitimately restate a
    /// node, and the last statement wins.
    pub fn add_node(&mut self, id: NodeId, name: impl Into<String>, position: Position) {
        let node = Node {
            id,
            name: name.into(),
            position,
        };
        if let Some(previous) = self.nodes.insert(id, node) {
            debug!(id, previous = %previous.name, "node overwritten during load");
        }
        self.adjacency.entry(id).or_default();
    }

    /// Insert a directed weighted edge between two existing nodes.
    ///
    /// Restating an ordered pair replaces the stored weight (last-write-wins
    /// rather than multigraph semantics).
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight { source_node: source, target });
        }
        if !self.nodes.contains_key(&source) {
            return Err(Error::UnknownNode { index: source });
        }
        if !self.nodes.contains_key(&target) {
            return Err(Error::UnknownNode { index: target });
        }

        let edges = self.adjacency.entry(source).or_default();
        if let Some(existing) = edges.iter_mut().find(|edge| edge.target == target) {
            debug!(source, target, old = existing.weight, new = weight, "edge weight replaced");
            existing.weight = weight;
        } else {
            edges.push(Edge { target, weight });
        }
        Ok(())
    }

    /// Freeze the builder into an immutable graph.
    pub fn build(self) -> Graph {
        Graph {
            nodes: Arc::new(self.nodes),
            adjacency: Arc::new(self.adjacency),
        }
    }
}

/// Immutable weighted directed graph shared by every algorithm and the
/// resolver. Cloning is cheap; the node and adjacency tables are shared.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Arc<BTreeMap<NodeId, Node>>,
    adjacency: Arc<BTreeMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Lookup a node by index.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Lookup a node's display name by index.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|node| node.name.as_str())
    }

    /// Iterate all nodes in ascending index order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Return the outgoing edges for a node, in insertion order.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the directed edge `source -> target`, if present.
    pub fn edge_weight(&self, source: NodeId, target: NodeId) -> Option<f64> {
        self.neighbours(source)
            .iter()
            .find(|edge| edge.target == target)
            .map(|edge| edge.weight)
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Node names similar to `token`, best match first, for "did you mean"
    /// hints. Scores below the similarity floor are dropped.
    pub fn fuzzy_name_matches(&self, token: &str, limit: usize) -> Vec<String> {
        const SIMILARITY_FLOOR: f64 = 0.7;

        let needle = token.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .values()
            .map(|node| {
                let score = strsim::jaro_winkler(&needle, &node.name.to_lowercase());
                (score, node.name.as_str())
            })
            .filter(|(score, _)| *score >= SIMILARITY_FLOOR)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);
        scored.into_iter().map(|(_, name)| name.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position { x: 0.0, y: 0.0 };
        let b = Position { x: 3.0, y: 4.0 };
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn add_edge_requires_known_endpoints() {
        let mut builder = GraphBuilder::new();
        builder.add_node(0, "Origin", Position { x: 0.0, y: 0.0 });

        let error = builder.add_edge(0, 7, 1.0).expect_err("missing target");
        assert!(matches!(error, Error::UnknownNode { index: 7 }));
    }

    #[test]
    fn add_edge_rejects_non_finite_weight() {
        let mut builder = GraphBuilder::new();
        builder.add_node(0, "Origin", Position { x: 0.0, y: 0.0 });
        builder.add_node(1, "Target", Position { x: 1.0, y: 0.0 });

        let error = builder.add_edge(0, 1, f64::NAN).expect_err("nan weight");
        assert!(matches!(error, Error::NonFiniteWeight { .. }));
    }
}
