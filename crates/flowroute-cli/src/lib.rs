//! flowroute CLI library.
//!
//! Network resolution and output formatting shared by the `flowroute-cli`
//! binary's subcommands.

pub mod network_source;
pub mod output;
