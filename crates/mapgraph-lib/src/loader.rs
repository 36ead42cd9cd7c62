use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, GraphBuilder, NodeId, Position};

/// On-disk graph description: a flat node list plus a directed edge list.
///
/// Node records may appear in any order and may restate an index (the last
/// record wins); edges may only reference declared nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphFile {
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One node in the graph description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub index: NodeId,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// One directed weighted edge in the graph description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

/// Load a graph description file into an immutable [`Graph`].
///
/// Nodes are inserted before edges so forward references inside the edge
/// list are fine; an edge naming an undeclared node fails the whole load.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let file = File::open(path)?;
    let description: GraphFile = serde_json::from_reader(BufReader::new(file))?;
    let graph = build_from_description(&description)?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Build a graph from an already-parsed description.
pub fn build_from_description(description: &GraphFile) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    for node in &description.nodes {
        builder.add_node(
            node.index,
            node.name.clone(),
            Position {
                x: node.x,
                y: node.y,
            },
        );
    }
    for edge in &description.edges {
        builder.add_edge(edge.source, edge.target, edge.weight)?;
    }
    Ok(builder.build())
}
