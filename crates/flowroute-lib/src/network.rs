use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dense node identifier assigned in first-seen order.
pub type NodeId = usize;

/// Minimum Jaro-Winkler similarity for a node name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// One `(from, to, weight)` triple as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B, f64)> for EdgeSpec {
    fn from((from, to, weight): (A, B, f64)) -> Self {
        Self::new(from, to, weight)
    }
}

/// On-disk network description.
///
/// ```json
/// { "edges": [ { "from": "Origin", "to": "A", "weight": 40 } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDefinition {
    pub edges: Vec<EdgeSpec>,
}

/// Declared edge, keeping the orientation it was supplied in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

/// Entry of an adjacency list; orientation is not recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    pub node: NodeId,
    pub weight: f64,
}

/// Immutable weighted network shared by both solvers.
#[derive(Debug, Clone, Default)]
pub struct Network {
    names: Arc<Vec<String>>,
    name_to_id: Arc<HashMap<String, NodeId>>,
    edges: Arc<Vec<Edge>>,
    adjacency: Arc<Vec<Vec<Neighbour>>>,
}

impl Network {
    /// Every distinct endpoint, in first-seen order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        0..self.names.len()
    }

    /// Node labels, indexed by [`NodeId`].
    pub fn node_names(&self) -> &[String] {
        &self.names
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_id_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    pub fn node_name(&self, node: NodeId) -> Option<&str> {
        self.names.get(node).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// Every declared edge with its original orientation and weight.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes one edge away from `node` in either declared direction.
    pub fn neighbours(&self, node: NodeId) -> &[Neighbour] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Edge joining `a` and `b`, whichever way it was declared.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| {
            (edge.source == a && edge.target == b) || (edge.source == b && edge.target == a)
        })
    }

    /// Convert the network back into caller-facing triples, in declaration order.
    pub fn edge_specs(&self) -> Vec<EdgeSpec> {
        self.edges
            .iter()
            .map(|edge| {
                EdgeSpec::new(
                    self.names[edge.source].clone(),
                    self.names[edge.target].clone(),
                    edge.weight,
                )
            })
            .collect()
    }

    /// Copy of this network with no edge leading into `name`.
    ///
    /// The search reads every edge both ways, so an edge declared out of
    /// `name` also leads into it and is dropped too. Nodes referenced only by
    /// the removed edges disappear with them.
    pub fn without_edges_into(&self, name: &str) -> Network {
        let mut builder = NetworkBuilder::default();
        for edge in self.edges.iter() {
            if self.names[edge.source] == name || self.names[edge.target] == name {
                continue;
            }
            builder.push_edge(
                &self.names[edge.source],
                &self.names[edge.target],
                edge.weight,
            );
        }
        builder.build()
    }

    /// Known node names that look like `name`, best match first.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .names
            .iter()
            .map(|candidate| {
                (
                    strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                    candidate,
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

/// Incremental constructor for a [`Network`].
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    names: Vec<String>,
    name_to_id: HashMap<String, NodeId>,
    edges: Vec<Edge>,
    pairs: HashSet<(NodeId, NodeId)>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an undirected edge `from - to`.
    ///
    /// Nothing is recorded when validation fails.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<&mut Self> {
        if from.is_empty() || to.is_empty() {
            return Err(Error::invalid_edge(from, to, "node labels must not be empty"));
        }
        if from == to {
            return Err(Error::invalid_edge(from, to, "self-loops are not allowed"));
        }
        if !weight.is_finite() {
            return Err(Error::invalid_edge(from, to, "weight must be a finite number"));
        }
        if weight < 0.0 {
            return Err(Error::invalid_edge(
                from,
                to,
                format!("weight {weight} is negative"),
            ));
        }
        if let (Some(&a), Some(&b)) = (self.name_to_id.get(from), self.name_to_id.get(to)) {
            if self.pairs.contains(&unordered(a, b)) {
                return Err(Error::invalid_edge(
                    from,
                    to,
                    "an edge between these nodes already exists",
                ));
            }
        }

        self.push_edge(from, to, weight);
        Ok(self)
    }

    pub fn build(self) -> Network {
        let mut adjacency = vec![Vec::new(); self.names.len()];
        for edge in &self.edges {
            adjacency[edge.source].push(Neighbour {
                node: edge.target,
                weight: edge.weight,
            });
            adjacency[edge.target].push(Neighbour {
                node: edge.source,
                weight: edge.weight,
            });
        }

        tracing::debug!(
            nodes = self.names.len(),
            edges = self.edges.len(),
            "built network"
        );

        Network {
            names: Arc::new(self.names),
            name_to_id: Arc::new(self.name_to_id),
            edges: Arc::new(self.edges),
            adjacency: Arc::new(adjacency),
        }
    }

    fn push_edge(&mut self, from: &str, to: &str, weight: f64) {
        let source = self.intern(from);
        let target = self.intern(to);
        self.pairs.insert(unordered(source, target));
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.name_to_id.insert(name.to_string(), id);
        id
    }
}

fn unordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Build an immutable network from an ordered edge list.
pub fn build_network<I, E>(edges: I) -> Result<Network>
where
    I: IntoIterator<Item = E>,
    E: Into<EdgeSpec>,
{
    let mut builder = NetworkBuilder::new();
    for edge in edges {
        let edge = edge.into();
        builder.add_edge(&edge.from, &edge.to, edge.weight)?;
    }
    Ok(builder.build())
}

/// Load a JSON [`NetworkDefinition`] from disk and build it.
pub fn load_network(path: &Path) -> Result<Network> {
    let contents = fs::read_to_string(path)?;
    let definition: NetworkDefinition = serde_json::from_str(&contents)?;
    tracing::debug!(
        path = %path.display(),
        edges = definition.edges.len(),
        "loaded network definition"
    );
    build_network(definition.edges)
}
