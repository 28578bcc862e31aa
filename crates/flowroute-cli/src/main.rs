use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flowroute_cli::network_source::{load_from_source, resolve_network_source};
use flowroute_cli::output::OutputFormat;
use flowroute_lib::{FlowOptions, FlowOrientation, SAMPLE_DESTINATION, SAMPLE_ORIGIN};

mod commands;

use commands::route::MethodArg;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Cross-validated minimum-cost routing through a weighted network"
)]
struct Cli {
    /// JSON network definition. Falls back to $FLOWROUTE_NETWORK, then the built-in sample.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve for a route with a single method.
    Route {
        #[command(flatten)]
        endpoints: EndpointArgs,
        /// Solving method.
        #[arg(long, value_enum, default_value_t = MethodArg::ShortestPath)]
        method: MethodArg,
        #[command(flatten)]
        flow: FlowArgs,
    },
    /// Solve with both methods and reconcile the answers.
    Compare {
        #[command(flatten)]
        endpoints: EndpointArgs,
        #[command(flatten)]
        flow: FlowArgs,
    },
    /// List the network's nodes.
    Nodes,
}

#[derive(Args, Debug)]
struct EndpointArgs {
    /// Origin node name.
    #[arg(long = "from", default_value = SAMPLE_ORIGIN)]
    from: String,
    /// Destination node name.
    #[arg(long = "to", default_value = SAMPLE_DESTINATION)]
    to: String,
}

#[derive(Args, Debug)]
struct FlowArgs {
    /// Give the flow program a variable for both directions of every edge.
    #[arg(long)]
    bidirectional: bool,
    /// Abandon the flow solve after this many milliseconds.
    #[arg(long = "time-limit-ms")]
    time_limit_ms: Option<u64>,
}

impl FlowArgs {
    fn to_options(&self) -> FlowOptions {
        FlowOptions {
            orientation: if self.bidirectional {
                FlowOrientation::Bidirectional
            } else {
                FlowOrientation::Declared
            },
            time_limit: self.time_limit_ms.map(Duration::from_millis),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = resolve_network_source(cli.network.as_deref());
    let network = load_from_source(&source)?;

    match cli.command {
        Command::Route {
            endpoints,
            method,
            flow,
        } => commands::route::handle_route(
            &network,
            cli.format,
            &commands::route::RouteCommandArgs {
                from: endpoints.from,
                to: endpoints.to,
                method,
                flow: flow.to_options(),
            },
        ),
        Command::Compare { endpoints, flow } => commands::compare::handle_compare(
            &network,
            cli.format,
            &endpoints.from,
            &endpoints.to,
            flow.to_options(),
        ),
        Command::Nodes => commands::nodes::handle_nodes(&network, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
