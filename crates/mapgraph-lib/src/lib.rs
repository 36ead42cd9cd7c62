//! Mapgraph library entry points.
//!
//! This crate stores a weighted directed map graph (named, positioned
//! nodes with directed traversal costs), resolves user tokens to nodes,
//! and answers start/goal path queries with a suite of algorithms
//! (Dijkstra, A*, Bellman-Ford, first-simple-path DFS). Higher-level
//! consumers (CLI, renderers) should only depend on the functions exported
//! here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod output;
pub mod path;
pub mod resolve;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder, Node, NodeId, Position};
pub use loader::load_graph;
pub use output::{RenderMode, RouteSummary};
pub use path::{
    find_path_astar, find_path_bellman_ford, find_path_dfs, find_path_dijkstra, path_weight,
    to_edge_list,
};
pub use resolve::{node_roster, resolve, Resolution, LIST_SENTINEL};
pub use routing::{plan_route, plan_route_between, RouteAlgorithm, RoutePlan, RouteRequest};
