//! Route planning over a [`Network`].
//!
//! This module provides:
//! - [`RouteMethod`] - the two independent solving methods
//! - [`RouteRequest`] - a single-method planning request
//! - [`RoutePlan`] - the planned route and the method that produced it
//! - [`plan_route`] - dispatch a request to its [`RouteSolver`]
//! - [`compare_routes`] - run both methods and reconcile their answers
//!
//! # Example
//!
//! ```ignore
//! use flowroute_lib::{compare_routes, sample_network, FlowOptions};
//!
//! let network = sample_network()?;
//! let comparison = compare_routes(&network, "Origin", "Destination", FlowOptions::default())?;
//! println!("{}", comparison.reconciliation.status());
//! ```

mod solver;

pub use solver::{select_solver, FlowSolver, RouteSolver, ShortestPathSolver};

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::flow::FlowOptions;
use crate::network::Network;
use crate::path::Route;
use crate::reconcile::{reconcile, Reconciliation};

/// Supported solving methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteMethod {
    /// Label-setting search (Dijkstra).
    #[default]
    ShortestPath,
    /// Binary unit-flow program.
    #[serde(rename = "flow")]
    FlowOptimization,
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMethod::ShortestPath => "shortest-path",
            RouteMethod::FlowOptimization => "flow",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub method: RouteMethod,
    /// Only consulted by the flow method.
    pub flow: FlowOptions,
}

impl RouteRequest {
    /// Convenience constructor for a label-setting search.
    pub fn shortest_path(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            method: RouteMethod::ShortestPath,
            flow: FlowOptions::default(),
        }
    }

    /// Convenience constructor for the flow program over declared orientations.
    pub fn flow(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            method: RouteMethod::FlowOptimization,
            ..Self::shortest_path(origin, destination)
        }
    }

    pub fn with_flow_options(mut self, options: FlowOptions) -> Self {
        self.flow = options;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub method: RouteMethod,
    pub route: Route,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.route.hop_count()
    }

    pub fn cost(&self) -> f64 {
        self.route.cost
    }
}

/// Both routes plus their reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteComparison {
    pub shortest: Route,
    pub optimal: Route,
    pub reconciliation: Reconciliation,
}

impl RouteComparison {
    /// Turn a weight disagreement into an error.
    pub fn ensure_consistent(&self) -> Result<()> {
        self.reconciliation.ensure_consistent()
    }
}

/// Compute a route using the requested method.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<RoutePlan> {
    let solver = select_solver(request);
    let route = solver.solve(network, &request.origin, &request.destination)?;
    tracing::info!(
        method = %solver.method(),
        cost = route.cost,
        hops = route.hop_count(),
        "planned route {}",
        route
    );

    Ok(RoutePlan {
        method: solver.method(),
        route,
    })
}

/// Run both methods against the same network and reconcile the results.
///
/// A weight disagreement is reported in the returned
/// [`Reconciliation`], not as an error; call
/// [`RouteComparison::ensure_consistent`] to make it fatal.
pub fn compare_routes(
    network: &Network,
    origin: &str,
    destination: &str,
    flow: FlowOptions,
) -> Result<RouteComparison> {
    let shortest = ShortestPathSolver.solve(network, origin, destination)?;
    let optimal = FlowSolver::new(flow).solve(network, origin, destination)?;
    let reconciliation = reconcile(&shortest, &optimal);

    Ok(RouteComparison {
        shortest,
        optimal,
        reconciliation,
    })
}
