//! Pathfinding strategies behind the route planner.
//!
//! Each algorithm lives in its own planner struct implementing
//! [`PathPlanner`], so `plan_route` dispatches without knowing algorithm
//! internals.

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::path::{find_path_astar, find_path_bellman_ford, find_path_dfs, find_path_dijkstra};

use super::RouteAlgorithm;

/// Trait for pathfinding strategies.
pub trait PathPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search. `Ok(Some(path))` when a route exists, `Ok(None)`
    /// when the goal is unreachable, `Err` for typed failures such as
    /// negative-weight rejection.
    fn find_path(&self, graph: &Graph, start: NodeId, goal: NodeId)
        -> Result<Option<Vec<NodeId>>>;

    /// Whether the planner guarantees a weight-optimal result under its
    /// documented preconditions.
    fn is_optimal(&self) -> bool {
        true
    }
}

/// Dijkstra planner; shortest path over non-negative weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl PathPlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Option<Vec<NodeId>>> {
        find_path_dijkstra(graph, start, goal)
    }
}

/// A* planner; Dijkstra guided by the Euclidean heuristic.
///
/// Optimal only while edge weights are consistent with straight-line
/// distances between node positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl PathPlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Option<Vec<NodeId>>> {
        find_path_astar(graph, start, goal)
    }
}

/// Bellman-Ford planner; handles negative acyclic weights and reports
/// negative cycles that would taint the route.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordPlanner;

impl PathPlanner for BellmanFordPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::BellmanFord
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Option<Vec<NodeId>>> {
        find_path_bellman_ford(graph, start, goal)
    }
}

/// First-simple-path planner; returns the first path the depth-first
/// enumeration discovers, with no optimality claim at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPathPlanner;

impl PathPlanner for FirstPathPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::FirstPath
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Option<Vec<NodeId>>> {
        find_path_dfs(graph, start, goal)
    }

    fn is_optimal(&self) -> bool {
        false
    }
}

/// Select the planner for a given algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn PathPlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
        RouteAlgorithm::BellmanFord => Box::new(BellmanFordPlanner),
        RouteAlgorithm::FirstPath => Box::new(FirstPathPlanner),
    }
}
