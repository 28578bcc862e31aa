//! Route command handler for solving with a single method.

use anyhow::{Context, Result};
use clap::ValueEnum;

use flowroute_cli::network_source::ensure_known_node;
use flowroute_cli::output::{print_route, OutputFormat};
use flowroute_lib::{plan_route, FlowOptions, Network, RouteMethod, RouteRequest, RouteSummary};

/// Solving method as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MethodArg {
    /// Label-setting (Dijkstra) search.
    #[default]
    ShortestPath,
    /// Binary unit-flow program.
    Flow,
}

impl From<MethodArg> for RouteMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::ShortestPath => RouteMethod::ShortestPath,
            MethodArg::Flow => RouteMethod::FlowOptimization,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub to: String,
    pub method: MethodArg,
    pub flow: FlowOptions,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            origin: self.from.clone(),
            destination: self.to.clone(),
            method: self.method.into(),
            flow: self.flow,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route(network: &Network, format: OutputFormat, args: &RouteCommandArgs) -> Result<()> {
    ensure_known_node(network, &args.from)?;
    ensure_known_node(network, &args.to)?;

    let request = args.to_request();
    let plan = plan_route(network, &request).with_context(|| {
        format!(
            "No route found between {} and {} using {}",
            args.from, args.to, request.method
        )
    })?;

    print_route(&RouteSummary::from_plan(&plan), format)
}
