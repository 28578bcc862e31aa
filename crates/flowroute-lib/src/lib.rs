//! flowroute library entry points.
//!
//! This crate builds immutable weighted networks and finds minimum-cost
//! routes through them in two independent ways: a label-setting search and
//! a binary unit-flow program. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod flow;
pub mod network;
pub mod output;
pub mod path;
pub mod reconcile;
pub mod routing;
pub mod sample;

pub use error::{Error, Result};
pub use flow::{optimal_path, FlowAssignment, FlowOptimizer, FlowOptions, FlowOrientation};
pub use network::{
    build_network, load_network, EdgeSpec, Network, NetworkBuilder, NetworkDefinition, NodeId,
};
pub use output::{ComparisonSummary, RouteSummary};
pub use path::{shortest_path, Route};
pub use reconcile::{reconcile, Reconciliation, ReconciliationStatus};
pub use routing::{
    compare_routes, plan_route, RouteComparison, RouteMethod, RoutePlan, RouteRequest,
};
pub use sample::{sample_edges, sample_network, SAMPLE_DESTINATION, SAMPLE_ORIGIN};
