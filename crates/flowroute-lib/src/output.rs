use std::fmt::Write;

use serde::Serialize;

use crate::path::Route;
use crate::reconcile::ReconciliationStatus;
use crate::routing::{RouteComparison, RouteMethod, RoutePlan};

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub method: RouteMethod,
    pub origin: String,
    pub destination: String,
    pub hops: usize,
    pub cost: f64,
    pub steps: Vec<String>,
}

impl RouteSummary {
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self::from_route(plan.method, &plan.route)
    }

    fn from_route(method: RouteMethod, route: &Route) -> Self {
        Self {
            method,
            origin: route.origin().unwrap_or_default().to_string(),
            destination: route.destination().unwrap_or_default().to_string(),
            hops: route.hop_count(),
            cost: route.cost,
            steps: route.nodes.clone(),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, method: {})",
            self.origin, self.destination, self.hops, self.method
        );
        let _ = writeln!(buffer, "Path: {}", self.steps.join(" → "));
        let _ = writeln!(buffer, "Total weight: {}", format_weight(self.cost));
        buffer
    }
}

/// Side-by-side summary of both methods.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonSummary {
    pub shortest_path: RouteSummary,
    pub flow: RouteSummary,
    pub costs_match: bool,
    pub paths_match: bool,
    pub status: ReconciliationStatus,
}

impl ComparisonSummary {
    pub fn from_comparison(comparison: &RouteComparison) -> Self {
        Self {
            shortest_path: RouteSummary::from_route(
                RouteMethod::ShortestPath,
                &comparison.shortest,
            ),
            flow: RouteSummary::from_route(RouteMethod::FlowOptimization, &comparison.optimal),
            costs_match: comparison.reconciliation.costs_match,
            paths_match: comparison.reconciliation.paths_match,
            status: comparison.reconciliation.status(),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        for summary in [&self.shortest_path, &self.flow] {
            let _ = writeln!(
                buffer,
                "{:<14} {} (weight {})",
                format!("{}:", summary.method),
                summary.steps.join(" → "),
                format_weight(summary.cost)
            );
        }
        let _ = writeln!(
            buffer,
            "Costs match: {}, paths match: {} ({})",
            yes_no(self.costs_match),
            yes_no(self.paths_match),
            self.status
        );
        buffer
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Print whole weights without a trailing `.0`.
pub fn format_weight(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
