//! Resolve which network the CLI operates on.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use flowroute_lib::{load_network, sample_network, Network};

/// Environment variable naming a default network definition file.
pub const NETWORK_ENV_VAR: &str = "FLOWROUTE_NETWORK";

/// Where the active network came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkSource {
    File(PathBuf),
    BuiltInSample,
}

impl fmt::Display for NetworkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkSource::File(path) => write!(f, "{}", path.display()),
            NetworkSource::BuiltInSample => f.write_str("built-in sample network"),
        }
    }
}

/// `--network` wins over `FLOWROUTE_NETWORK`; with neither the sample is used.
pub fn resolve_network_source(cli_path: Option<&Path>) -> NetworkSource {
    if let Some(path) = cli_path {
        return NetworkSource::File(path.to_path_buf());
    }
    match env::var_os(NETWORK_ENV_VAR) {
        Some(value) if !value.is_empty() => NetworkSource::File(PathBuf::from(value)),
        _ => NetworkSource::BuiltInSample,
    }
}

pub fn load_from_source(source: &NetworkSource) -> Result<Network> {
    let network = match source {
        NetworkSource::File(path) => load_network(path)
            .with_context(|| format!("failed to load network from {}", path.display()))?,
        NetworkSource::BuiltInSample => {
            sample_network().context("failed to build the sample network")?
        }
    };
    tracing::debug!(
        source = %source,
        nodes = network.node_count(),
        edges = network.edge_count(),
        "network ready"
    );
    Ok(network)
}

/// Fail with a friendly message when `name` is not a node of `network`.
pub fn ensure_known_node(network: &Network, name: &str) -> Result<()> {
    if network.contains(name) {
        return Ok(());
    }
    let suggestions = network.fuzzy_node_matches(name, 3);
    bail!("Unknown node '{}'{}", name, format_suggestions(&suggestions));
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
