//! Route planning over a loaded map graph.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - the supported pathfinding algorithms
//! - [`RouteRequest`] - a start/goal query expressed as user tokens
//! - [`RoutePlan`] - the planned route with its exported edge list
//! - [`plan_route`] / [`plan_route_between`] - the planning entry points
//!
//! Each algorithm is wrapped in its own [`PathPlanner`] strategy so new
//! algorithms can be added without touching the orchestration here.

mod planner;

pub use planner::{
    select_planner, AStarPlanner, BellmanFordPlanner, DijkstraPlanner, FirstPathPlanner,
    PathPlanner,
};

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::{path_weight, to_edge_list};
use crate::resolve::{resolve, Resolution};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (non-negative weights, shortest by weight).
    #[default]
    Dijkstra,
    /// A* search guided by the Euclidean heuristic.
    #[serde(rename = "a-star")]
    AStar,
    /// Bellman-Ford (tolerates negative acyclic weights).
    BellmanFord,
    /// First simple path found by depth-first enumeration; not optimal.
    FirstPath,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
            RouteAlgorithm::BellmanFord => "bellman-ford",
            RouteAlgorithm::FirstPath => "first-path",
        };
        f.write_str(value)
    }
}

/// High-level route planning request. Start and goal are raw user tokens;
/// [`plan_route`] resolves them through the node resolver.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    pub fn new(
        start: impl Into<String>,
        goal: impl Into<String>,
        algorithm: RouteAlgorithm,
    ) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm,
        }
    }

    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, RouteAlgorithm::Dijkstra)
    }

    /// Convenience constructor for A* routes.
    pub fn astar(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, RouteAlgorithm::AStar)
    }

    /// Convenience constructor for Bellman-Ford routes.
    pub fn bellman_ford(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, RouteAlgorithm::BellmanFord)
    }

    /// Convenience constructor for first-simple-path routes.
    pub fn first_path(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, RouteAlgorithm::FirstPath)
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    /// Ordered node sequence, start first.
    pub steps: Vec<NodeId>,
    /// Ordered `(source, target)` pairs traversed, one per hop.
    pub edges: Vec<(NodeId, NodeId)>,
    /// Sum of traversed edge weights; zero for a single-node route.
    pub total_weight: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route from user tokens.
///
/// Resolves both tokens, dispatches to the requested planner, and converts
/// the node sequence into a [`RoutePlan`] with its exported edge list. A
/// literal `"list"` token surfaces [`Error::ListRequested`]; interactive
/// callers should run the resolver themselves first.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_endpoint(graph, &request.start)?;
    let goal = resolve_endpoint(graph, &request.goal)?;
    plan_route_between(graph, request.algorithm, start, goal)
}

/// Compute a route between pre-resolved node indices.
pub fn plan_route_between(
    graph: &Graph,
    algorithm: RouteAlgorithm,
    start: NodeId,
    goal: NodeId,
) -> Result<RoutePlan> {
    let planner = select_planner(algorithm);
    tracing::debug!(%algorithm, start, goal, "planning route");

    let steps = planner
        .find_path(graph, start, goal)?
        .ok_or_else(|| Error::NoPathFound {
            start: endpoint_label(graph, start),
            goal: endpoint_label(graph, goal),
        })?;

    let total_weight = path_weight(graph, &steps).unwrap_or(0.0);
    let edges = to_edge_list(&steps);

    Ok(RoutePlan {
        algorithm,
        start,
        goal,
        steps,
        edges,
        total_weight,
    })
}

fn resolve_endpoint(graph: &Graph, token: &str) -> Result<NodeId> {
    match resolve(graph, token)? {
        Resolution::Node(id) => Ok(id),
        Resolution::ListRequested => Err(Error::ListRequested),
    }
}

fn endpoint_label(graph: &Graph, id: NodeId) -> String {
    graph
        .node_name(id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}
