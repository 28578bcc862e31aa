//! Built-in seven-town road network used by the CLI demo and the tests.

use crate::error::Result;
use crate::network::{build_network, EdgeSpec, Network};

pub const SAMPLE_ORIGIN: &str = "Origin";
pub const SAMPLE_DESTINATION: &str = "Destination";

/// Road distances between towns, in declaration order.
pub fn sample_edges() -> Vec<EdgeSpec> {
    [
        ("Origin", "A", 40.0),
        ("Origin", "B", 60.0),
        ("Origin", "C", 50.0),
        ("A", "B", 10.0),
        ("A", "D", 70.0),
        ("B", "C", 20.0),
        ("B", "D", 55.0),
        ("B", "E", 40.0),
        ("C", "E", 50.0),
        ("D", "E", 10.0),
        ("D", "Destination", 60.0),
        ("E", "Destination", 80.0),
    ]
    .into_iter()
    .map(|(from, to, weight)| EdgeSpec::new(from, to, weight))
    .collect()
}

pub fn sample_network() -> Result<Network> {
    build_network(sample_edges())
}
