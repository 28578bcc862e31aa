use std::time::Duration;

use thiserror::Error;

/// Convenient result alias for the flowroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an input edge is malformed (negative weight, self-loop, duplicate pair).
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    /// Raised when the label-setting search exhausts its frontier.
    #[error("no path found between {origin} and {destination}")]
    Unreachable { origin: String, destination: String },

    /// Raised when the flow program has no feasible binary assignment.
    #[error("flow program is infeasible for {origin} -> {destination}")]
    Infeasible { origin: String, destination: String },

    /// Raised when the selected flow arcs do not chain into a single simple path.
    #[error("flow solution could not be decoded into a path: {reason}")]
    Decode { reason: String },

    /// Raised by the bounded-time flow solve.
    #[error("flow solve exceeded the time limit of {}ms", .limit.as_millis())]
    Timeout { limit: Duration },

    /// Raised when the two solvers disagree on the optimal weight.
    #[error("solvers disagree on route weight: shortest path {shortest}, flow optimisation {optimal}")]
    CostMismatch { shortest: f64, optimal: f64 },

    /// Any other failure reported by the linear programming backend.
    #[error("linear programming backend failed: {0}")]
    Solver(String),

    /// Raised when a network definition file cannot be parsed.
    #[error("malformed network definition: {0}")]
    NetworkFormat(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_edge(from: &str, to: &str, reason: impl Into<String>) -> Self {
        Error::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.into(),
        }
    }
}
