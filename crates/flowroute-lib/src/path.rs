use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{Network, NodeId};

/// Ordered walk from origin to destination together with its total weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub nodes: Vec<String>,
    pub cost: f64,
}

impl Route {
    pub(crate) fn from_ids(network: &Network, ids: &[NodeId], cost: f64) -> Self {
        let nodes = ids
            .iter()
            .map(|&id| network.node_names()[id].clone())
            .collect();
        Self { nodes, cost }
    }

    pub(crate) fn trivial(node: &str) -> Self {
        Self {
            nodes: vec![node.to_string()],
            cost: 0.0,
        }
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nodes.join(" → "))
    }
}

/// Find the minimum-weight route between two named nodes with a label-setting search.
///
/// Edges are traversed in both directions. Equal-distance candidates are
/// settled in node-id order so repeated calls return the same route.
pub fn shortest_path(network: &Network, origin: &str, destination: &str) -> Result<Route> {
    let unreachable = || Error::Unreachable {
        origin: origin.to_string(),
        destination: destination.to_string(),
    };

    let (Some(start), Some(goal)) = (
        network.node_id_by_name(origin),
        network.node_id_by_name(destination),
    ) else {
        return Err(unreachable());
    };

    if start == goal {
        return Ok(Route::trivial(origin));
    }

    let (ids, cost) = find_route_dijkstra(network, start, goal).ok_or_else(unreachable)?;
    tracing::debug!(
        origin,
        destination,
        cost,
        hops = ids.len() - 1,
        "shortest path settled"
    );
    Ok(Route::from_ids(network, &ids, cost))
}

/// Run Dijkstra's algorithm over node identifiers, returning the path and its weight.
fn find_route_dijkstra(
    network: &Network,
    start: NodeId,
    goal: NodeId,
) -> Option<(Vec<NodeId>, f64)> {
    let node_count = network.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<NodeId>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;

        if entry.node == goal {
            let path = reconstruct_path(&parents, start, goal);
            return Some((path, distances[goal]));
        }

        let current_distance = distances[entry.node];
        for neighbour in network.neighbours(entry.node) {
            if visited[neighbour.node] {
                continue;
            }
            let next_cost = current_distance + neighbour.weight;
            if next_cost < distances[neighbour.node] {
                distances[neighbour.node] = next_cost;
                parents[neighbour.node] = Some(entry.node);
                queue.push(QueueEntry::new(neighbour.node, next_cost));
            }
        }
    }

    None
}

fn reconstruct_path(parents: &[Option<NodeId>], start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
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
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
