//! Route solving strategies.
//!
//! Each method (label-setting search, unit-flow program) sits behind the
//! `RouteSolver` trait so `plan_route` can dispatch without knowing which
//! one it runs.

use crate::error::Result;
use crate::flow::{FlowOptimizer, FlowOptions};
use crate::network::Network;
use crate::path::{shortest_path, Route};

use super::{RouteMethod, RouteRequest};

/// Trait for route solving strategies.
pub trait RouteSolver: Send + Sync {
    /// The method identifier for this solver.
    fn method(&self) -> RouteMethod;

    /// Compute a complete route or fail; there are no partial results.
    fn solve(&self, network: &Network, origin: &str, destination: &str) -> Result<Route>;
}

/// Dijkstra-style search over the undirected network.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathSolver;

impl RouteSolver for ShortestPathSolver {
    fn method(&self) -> RouteMethod {
        RouteMethod::ShortestPath
    }

    fn solve(&self, network: &Network, origin: &str, destination: &str) -> Result<Route> {
        shortest_path(network, origin, destination)
    }
}

/// Binary unit-flow program over the declared (or doubled) arcs.
#[derive(Debug, Clone, Default)]
pub struct FlowSolver {
    optimizer: FlowOptimizer,
}

impl FlowSolver {
    pub fn new(options: FlowOptions) -> Self {
        Self {
            optimizer: FlowOptimizer::with_options(options),
        }
    }

    pub fn options(&self) -> FlowOptions {
        self.optimizer.options()
    }
}

impl RouteSolver for FlowSolver {
    fn method(&self) -> RouteMethod {
        RouteMethod::FlowOptimization
    }

    fn solve(&self, network: &Network, origin: &str, destination: &str) -> Result<Route> {
        self.optimizer.solve(network, origin, destination)
    }
}

/// Select the solver for a given request.
pub fn select_solver(request: &RouteRequest) -> Box<dyn RouteSolver> {
    match request.method {
        RouteMethod::ShortestPath => Box::new(ShortestPathSolver),
        RouteMethod::FlowOptimization => Box::new(FlowSolver::new(request.flow)),
    }
}
