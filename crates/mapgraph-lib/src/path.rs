use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Run Dijkstra's algorithm over non-negative weights, stopping as soon as
/// the goal is finalised.
///
/// Any negative edge weight anywhere in the graph is rejected with
/// [`Error::NegativeWeight`] before the search starts; silent miscomputation
/// is not an option here. Returns `Ok(None)` when the goal is unreachable.
pub fn find_path_dijkstra(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Option<Vec<NodeId>>> {
    ensure_endpoints(graph, start, goal)?;
    ensure_non_negative_weights(graph)?;

    if start == goal {
        return Ok(Some(vec![start]));
    }

    let mut distances: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0, next_seq(&mut sequence)));

    while let Some(entry) = queue.pop() {
        match distances.get(&entry.node) {
            Some(distance) if *distance < entry.key.0 => continue,
            Some(_) => {}
            None => continue,
        }

        if entry.node == goal {
            return Ok(Some(reconstruct_path(&parents, start, goal)));
        }

        let current_distance = distances[&entry.node];
        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = current_distance + edge.weight;
            if next_cost < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost, next_seq(&mut sequence)));
            }
        }
    }

    Ok(None)
}

/// Run A* with the Euclidean straight-line heuristic between node positions.
///
/// Optimality holds only while the heuristic never overestimates the real
/// remaining cost; with weights below straight-line scale the search still
/// terminates and returns a valid, possibly suboptimal, path.
pub fn find_path_astar(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Option<Vec<NodeId>>> {
    ensure_endpoints(graph, start, goal)?;
    ensure_non_negative_weights(graph)?;

    if start == goal {
        return Ok(Some(vec![start]));
    }

    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    g_score.insert(start, 0.0);
    parents.insert(start, None);
    let estimate = heuristic_distance(graph, start, goal);
    queue.push(AStarEntry::new(start, 0.0, estimate, next_seq(&mut sequence)));

    while let Some(entry) = queue.pop() {
        match g_score.get(&entry.node) {
            Some(score) if *score < entry.cost.0 => continue,
            Some(_) => {}
            None => continue,
        }

        if entry.node == goal {
            return Ok(Some(reconstruct_path(&parents, start, goal)));
        }

        let current_score = g_score[&entry.node];
        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let tentative_g = current_score + edge.weight;
            if tentative_g < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative_g);
                parents.insert(next, Some(entry.node));
                let heuristic = heuristic_distance(graph, next, goal);
                queue.push(AStarEntry::new(next, tentative_g, heuristic, next_seq(&mut sequence)));
            }
        }
    }

    Ok(None)
}

/// Run Bellman-Ford, which tolerates negative (acyclic) edge weights.
///
/// Edges are relaxed for at most `|V| - 1` rounds, stopping early once a
/// round changes nothing. A final pass looks for edges that would still
/// relax; such an edge proves a negative cycle, and the query fails with
/// [`Error::NegativeCycle`] only when the tainted node can reach the goal.
/// A negative cycle elsewhere in the graph leaves the answer intact.
pub fn find_path_bellman_ford(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<Vec<NodeId>>> {
    ensure_endpoints(graph, start, goal)?;

    if start == goal {
        return Ok(Some(vec![start]));
    }

    let mut distances: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    distances.insert(start, 0.0);
    parents.insert(start, None);

    let rounds = graph.node_count().saturating_sub(1);
    for _ in 0..rounds {
        let mut changed = false;
        for node in graph.nodes() {
            let Some(&from_distance) = distances.get(&node.id) else {
                continue;
            };
            for edge in graph.neighbours(node.id) {
                let candidate = from_distance + edge.weight;
                if candidate < *distances.get(&edge.target).unwrap_or(&f64::INFINITY) {
                    distances.insert(edge.target, candidate);
                    parents.insert(edge.target, Some(node.id));
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    // One more pass: anything still relaxable sits on or behind a negative
    // cycle reachable from the start.
    let mut tainted: Vec<NodeId> = Vec::new();
    for node in graph.nodes() {
        let Some(&from_distance) = distances.get(&node.id) else {
            continue;
        };
        for edge in graph.neighbours(node.id) {
            if from_distance + edge.weight < *distances.get(&edge.target).unwrap_or(&f64::INFINITY)
            {
                tainted.push(edge.target);
            }
        }
    }

    if !tainted.is_empty() {
        let reaches_goal = reverse_reachable(graph, goal);
        if tainted.iter().any(|node| reaches_goal.contains(node)) {
            return Err(Error::NegativeCycle {
                start: display_name(graph, start),
                goal: display_name(graph, goal),
            });
        }
    }

    if !distances.contains_key(&goal) {
        return Ok(None);
    }

    Ok(Some(reconstruct_path(&parents, start, goal)))
}

/// Return the first simple path from `start` to `goal` found by depth-first
/// search in neighbour insertion order.
///
/// This mirrors taking the head of an exhaustive simple-path enumeration:
/// the result is first-found, NOT shortest by weight. Weights are ignored
/// entirely, so negative edges are acceptable here.
pub fn find_path_dfs(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Option<Vec<NodeId>>> {
    ensure_endpoints(graph, start, goal)?;

    if start == goal {
        return Ok(Some(vec![start]));
    }

    let mut path: Vec<NodeId> = vec![start];
    let mut on_path: HashSet<NodeId> = HashSet::from([start]);
    // Per-frame cursor into the node's neighbour list.
    let mut cursors: Vec<usize> = vec![0];

    while let Some(&current) = path.last() {
        let cursor = cursors.last_mut().expect("cursor per path frame");
        let neighbours = graph.neighbours(current);

        if *cursor >= neighbours.len() {
            path.pop();
            cursors.pop();
            on_path.remove(&current);
            continue;
        }

        let next = neighbours[*cursor].target;
        *cursor += 1;

        if on_path.contains(&next) {
            continue;
        }
        if next == goal {
            path.push(goal);
            return Ok(Some(path));
        }

        path.push(next);
        on_path.insert(next);
        cursors.push(0);
    }

    Ok(None)
}

/// Convert a node sequence into its ordered list of traversed directed
/// edges. Empty and single-node paths yield an empty list.
pub fn to_edge_list(path: &[NodeId]) -> Vec<(NodeId, NodeId)> {
    path.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Total weight accumulated along a path. `None` if any consecutive pair is
/// not an edge of the graph; a single-node path weighs zero.
pub fn path_weight(graph: &Graph, path: &[NodeId]) -> Option<f64> {
    path.windows(2)
        .map(|pair| graph.edge_weight(pair[0], pair[1]))
        .sum()
}

fn ensure_endpoints(graph: &Graph, start: NodeId, goal: NodeId) -> Result<()> {
    for index in [start, goal] {
        if graph.node(index).is_none() {
            return Err(Error::UnknownNode { index });
        }
    }
    Ok(())
}

fn ensure_non_negative_weights(graph: &Graph) -> Result<()> {
    for node in graph.nodes() {
        for edge in graph.neighbours(node.id) {
            if edge.weight < 0.0 {
                return Err(Error::NegativeWeight {
                    source_node: node.id,
                    target: edge.target,
                    weight: edge.weight,
                });
            }
        }
    }
    Ok(())
}

fn heuristic_distance(graph: &Graph, from: NodeId, to: NodeId) -> f64 {
    match (graph.node(from), graph.node(to)) {
        (Some(a), Some(b)) => a.position.distance_to(&b.position),
        _ => 0.0,
    }
}

/// Set of nodes from which `goal` is reachable, via breadth-first search
/// over reversed edges.
fn reverse_reachable(graph: &Graph, goal: NodeId) -> HashSet<NodeId> {
    let mut incoming: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for node in graph.nodes() {
        for edge in graph.neighbours(node.id) {
            incoming.entry(edge.target).or_default().push(node.id);
        }
    }

    let mut visited = HashSet::from([goal]);
    let mut queue = VecDeque::from([goal]);
    while let Some(current) = queue.pop_front() {
        for &source in incoming.get(&current).map(Vec::as_slice).unwrap_or(&[]) {
            if visited.insert(source) {
                queue.push_back(source);
            }
        }
    }
    visited
}

fn reconstruct_path(
    parents: &HashMap<NodeId, Option<NodeId>>,
    start: NodeId,
    goal: NodeId,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

fn display_name(graph: &Graph, id: NodeId) -> String {
    graph
        .node_name(id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}

fn next_seq(sequence: &mut u64) -> u64 {
    let value = *sequence;
    *sequence += 1;
    value
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    key: FloatOrd,
    seq: u64,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64, seq: u64) -> Self {
        Self {
            node,
            key: FloatOrd(cost),
            seq,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap; ties go to the
        // entry pushed first, keeping traversal order stable.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: NodeId,
    cost: FloatOrd,
    estimate: FloatOrd,
    seq: u64,
}

impl AStarEntry {
    fn new(node: NodeId, cost: f64, heuristic: f64, seq: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
            seq,
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
