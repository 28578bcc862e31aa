//! Compare command handler: run both methods and reconcile.

use anyhow::{Context, Result};

use flowroute_cli::network_source::ensure_known_node;
use flowroute_cli::output::{print_comparison, OutputFormat};
use flowroute_lib::{compare_routes, ComparisonSummary, FlowOptions, Network};

/// Handle the compare subcommand.
///
/// The comparison is always printed; a weight disagreement then fails the command.
pub fn handle_compare(
    network: &Network,
    format: OutputFormat,
    from: &str,
    to: &str,
    flow: FlowOptions,
) -> Result<()> {
    ensure_known_node(network, from)?;
    ensure_known_node(network, to)?;

    let comparison = compare_routes(network, from, to, flow)
        .with_context(|| format!("failed to compare routes between {from} and {to}"))?;

    print_comparison(&ComparisonSummary::from_comparison(&comparison), format)?;

    comparison.ensure_consistent().with_context(|| {
        if flow.orientation == flowroute_lib::FlowOrientation::Declared {
            "route weights differ; the declared edge orientations may not admit the undirected optimum (try --bidirectional)".to_string()
        } else {
            "route weights differ".to_string()
        }
    })
}
