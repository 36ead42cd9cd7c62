use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Token that asks for the node roster instead of naming a node.
pub const LIST_SENTINEL: &str = "list";

/// How many near-miss names to suggest on a failed resolution.
const MAX_SUGGESTIONS: usize = 3;

/// Outcome of resolving a user-supplied token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The token named a concrete node.
    Node(NodeId),
    /// The token was the listing sentinel; the caller should present the
    /// roster and ask again.
    ListRequested,
}

/// Translate a textual or numeric token into a node index.
///
/// Resolution order:
/// 1. the literal `"list"` signals [`Resolution::ListRequested`];
/// 2. an integer inside `[0, node_count)` is taken as an index directly;
/// 3. anything else is matched against node names, first hit in ascending
///    index order wins. An out-of-range integer token deliberately falls
///    through to the name scan instead of being accepted.
///
/// The resolver never loops or re-prompts; retry policy belongs to the
/// caller. Resolving the same valid token twice yields the same index.
pub fn resolve(graph: &Graph, token: &str) -> Result<Resolution> {
    let token = token.trim();

    if token == LIST_SENTINEL {
        return Ok(Resolution::ListRequested);
    }

    if let Ok(index) = token.parse::<NodeId>() {
        if index < graph.node_count() && graph.node(index).is_some() {
            return Ok(Resolution::Node(index));
        }
    }

    for node in graph.nodes() {
        if node.name == token {
            return Ok(Resolution::Node(node.id));
        }
    }

    Err(Error::Resolution {
        token: token.to_string(),
        suggestions: graph.fuzzy_name_matches(token, MAX_SUGGESTIONS),
    })
}

/// All `(index, name)` pairs in ascending index order, ready for a caller
/// to print next to a re-prompt.
pub fn node_roster(graph: &Graph) -> Vec<(NodeId, &str)> {
    graph
        .nodes()
        .map(|node| (node.id, node.name.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, Position};

    fn two_node_graph() -> Graph {
        let mut builder = GraphBuilder::new();
        builder.add_node(0, "Harbour", Position { x: 0.0, y: 0.0 });
        builder.add_node(1, "Market", Position { x: 1.0, y: 0.0 });
        builder.build()
    }

    #[test]
    fn numeric_token_wins_over_name_lookup() {
        let graph = two_node_graph();
        assert_eq!(resolve(&graph, "1").unwrap(), Resolution::Node(1));
    }

    #[test]
    fn list_sentinel_is_never_a_name() {
        let graph = two_node_graph();
        assert_eq!(resolve(&graph, "list").unwrap(), Resolution::ListRequested);
    }

    #[test]
    fn out_of_range_integer_falls_through_to_names() {
        let graph = two_node_graph();
        let error = resolve(&graph, "9").expect_err("no node named 9");
        assert!(matches!(error, Error::Resolution { .. }));
    }
}
