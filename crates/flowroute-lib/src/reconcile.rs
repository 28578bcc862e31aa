use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::Route;

/// Relative tolerance used when comparing floating route weights.
pub const COST_TOLERANCE: f64 = 1e-9;

/// Outcome of comparing two independently computed routes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reconciliation {
    pub costs_match: bool,
    pub paths_match: bool,
    /// Weight of the first route passed to [`reconcile`].
    pub first_cost: f64,
    /// Weight of the second route passed to [`reconcile`].
    pub second_cost: f64,
    /// `second_cost - first_cost`.
    pub cost_delta: f64,
}

/// Coarse classification of a [`Reconciliation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciliationStatus {
    /// Same route, same weight.
    Agree,
    /// Different route of the same weight.
    AlternateOptimum,
    /// Weights differ; one of the solvers is wrong for this input.
    Inconsistent,
}

impl fmt::Display for ReconciliationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ReconciliationStatus::Agree => "agree",
            ReconciliationStatus::AlternateOptimum => "alternate optimum",
            ReconciliationStatus::Inconsistent => "inconsistent",
        };
        f.write_str(value)
    }
}

impl Reconciliation {
    pub fn status(&self) -> ReconciliationStatus {
        match (self.costs_match, self.paths_match) {
            (true, true) => ReconciliationStatus::Agree,
            (true, false) => ReconciliationStatus::AlternateOptimum,
            (false, _) => ReconciliationStatus::Inconsistent,
        }
    }

    /// Fail with [`Error::CostMismatch`] when the weights disagree.
    ///
    /// Differing paths of equal weight pass.
    pub fn ensure_consistent(&self) -> Result<()> {
        if self.costs_match {
            return Ok(());
        }
        Err(Error::CostMismatch {
            shortest: self.first_cost,
            optimal: self.second_cost,
        })
    }
}

/// Compare two routes by weight and by node sequence.
pub fn reconcile(a: &Route, b: &Route) -> Reconciliation {
    let costs_match = costs_equal(a.cost, b.cost);
    let paths_match = a.nodes == b.nodes;

    if !costs_match {
        tracing::warn!(
            first = a.cost,
            second = b.cost,
            "route weights disagree between solvers"
        );
    } else if !paths_match {
        tracing::debug!(
            first = %a,
            second = %b,
            "solvers chose different routes of equal weight"
        );
    }

    Reconciliation {
        costs_match,
        paths_match,
        first_cost: a.cost,
        second_cost: b.cost,
        cost_delta: b.cost - a.cost,
    }
}

fn costs_equal(a: f64, b: f64) -> bool {
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= COST_TOLERANCE * scale
}
