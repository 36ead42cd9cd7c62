use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the mapgraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge or query references a node index that is not in
    /// the graph.
    #[error("unknown node index: {index}")]
    UnknownNode { index: NodeId },

    /// Raised when a user-supplied token resolves to no node.
    #[error("unknown node: {token}{}", format_suggestions(.suggestions))]
    Resolution {
        token: String,
        suggestions: Vec<String>,
    },

    /// Raised when the listing sentinel reaches an API that expects a
    /// concrete node token. Interactive callers should invoke the resolver
    /// directly and handle `Resolution::ListRequested` themselves.
    #[error("node listing requested instead of a concrete node token")]
    ListRequested,

    /// Raised when no directed path connects start and goal.
    #[error("no path found between {start} and {goal}")]
    NoPathFound { start: String, goal: String },

    /// Raised by Dijkstra and A*, which require non-negative edge weights.
    #[error("negative edge weight {weight} on {source_node} -> {target}")]
    NegativeWeight {
        source_node: NodeId,
        target: NodeId,
        weight: f64,
    },

    /// Raised by Bellman-Ford when a negative cycle can taint the
    /// start-to-goal distance.
    #[error("negative cycle reachable on the route between {start} and {goal}")]
    NegativeCycle { start: String, goal: String },

    /// Raised when a computed route contains no steps.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when an edge carries a NaN or infinite weight.
    #[error("non-finite weight on edge {source_node} -> {target}")]
    NonFiniteWeight { source_node: NodeId, target: NodeId },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for graph description parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
