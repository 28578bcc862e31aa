#![allow(dead_code)]

use flowroute_lib::{build_network, EdgeSpec, Network};

/// Minimum weight over every simple path, found by exhaustive depth-first enumeration.
///
/// With `directed` set, edges may only be walked in their declared orientation.
pub fn brute_force_optimum(
    network: &Network,
    origin: &str,
    destination: &str,
    directed: bool,
) -> Option<(f64, Vec<Vec<String>>)> {
    let start = network.node_id_by_name(origin)?;
    let goal = network.node_id_by_name(destination)?;
    let mut best: Option<(f64, Vec<Vec<String>>)> = None;
    let mut visited = vec![false; network.node_count()];
    let mut stack = vec![start];
    visited[start] = true;
    explore(
        network, goal, directed, 0.0, &mut visited, &mut stack, &mut best,
    );
    best
}

fn explore(
    network: &Network,
    goal: usize,
    directed: bool,
    cost: f64,
    visited: &mut Vec<bool>,
    stack: &mut Vec<usize>,
    best: &mut Option<(f64, Vec<Vec<String>>)>,
) {
    let current = *stack.last().expect("stack starts non-empty");
    if current == goal {
        let names: Vec<String> = stack
            .iter()
            .map(|&id| network.node_name(id).unwrap().to_string())
            .collect();
        match best {
            Some((weight, paths)) if (*weight - cost).abs() < 1e-9 => paths.push(names),
            Some((weight, _)) if *weight < cost => {}
            _ => *best = Some((cost, vec![names])),
        }
        return;
    }

    for edge in network.edges() {
        let next = if edge.source == current {
            edge.target
        } else if !directed && edge.target == current {
            edge.source
        } else {
            continue;
        };
        if visited[next] {
            continue;
        }
        visited[next] = true;
        stack.push(next);
        explore(network, goal, directed, cost + edge.weight, visited, stack, best);
        stack.pop();
        visited[next] = false;
    }
}

/// Deterministic pseudo-random connected network.
///
/// A spanning chain `N0 - N1 - ... - Nn-1` guarantees connectivity; extra
/// edges are added between random pairs. Weights are small integers.
pub fn generated_network(seed: u64, nodes: usize, extra_edges: usize) -> Network {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move |bound: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    let mut edges: Vec<EdgeSpec> = Vec::new();
    let mut pairs = std::collections::HashSet::new();
    for i in 1..nodes {
        let weight = (next(20) + 1) as f64;
        // Alternate declared orientation along the chain.
        let (a, b) = if next(2) == 0 { (i - 1, i) } else { (i, i - 1) };
        pairs.insert((i - 1, i));
        edges.push(EdgeSpec::new(format!("N{a}"), format!("N{b}"), weight));
    }
    let mut attempts = 0;
    while edges.len() < nodes - 1 + extra_edges && attempts < extra_edges * 20 {
        attempts += 1;
        let a = next(nodes as u64) as usize;
        let b = next(nodes as u64) as usize;
        if a == b || pairs.contains(&(a.min(b), a.max(b))) {
            continue;
        }
        pairs.insert((a.min(b), a.max(b)));
        let weight = (next(30) + 1) as f64;
        edges.push(EdgeSpec::new(format!("N{a}"), format!("N{b}"), weight));
    }

    build_network(edges).expect("generated edges are valid")
}
