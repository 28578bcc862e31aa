//! Nodes command handler.

use anyhow::Result;
use serde::Serialize;

use flowroute_cli::output::{print_json, OutputFormat};
use flowroute_lib::Network;

#[derive(Debug, Serialize)]
struct NodeEntry<'a> {
    name: &'a str,
    neighbours: usize,
}

/// Handle the nodes subcommand.
pub fn handle_nodes(network: &Network, format: OutputFormat) -> Result<()> {
    let entries: Vec<NodeEntry<'_>> = network
        .nodes()
        .map(|node| NodeEntry {
            name: &network.node_names()[node],
            neighbours: network.neighbours(node).len(),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            println!(
                "{} nodes, {} edges",
                network.node_count(),
                network.edge_count()
            );
            for entry in &entries {
                println!("- {} ({} neighbours)", entry.name, entry.neighbours);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&entries),
    }
}
