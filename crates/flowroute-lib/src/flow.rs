//! Minimum-cost routing as a unit-flow binary program.
//!
//! Every flow arc gets a binary selection variable. The origin must emit one
//! unit of net flow, the destination must absorb it, and every other node
//! must balance. Minimising the selected weight then leaves exactly one
//! simple path switched on, which [`FlowAssignment::decode`] walks back into
//! a [`Route`].
//!
//! Arcs follow the orientation each edge was declared in. Callers that want
//! the flow model to match the undirected search must opt in with
//! [`FlowOrientation::Bidirectional`].

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use good_lp::solvers::microlp::microlp;
use good_lp::{variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::network::{Network, NodeId};
use crate::path::Route;

/// Distance from 0 or 1 still accepted as a binary value.
const BINARY_TOLERANCE: f64 = 1e-6;

/// Which arcs receive a flow variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowOrientation {
    /// One arc per edge, in the orientation it was declared.
    #[default]
    Declared,
    /// One arc per edge and direction.
    Bidirectional,
}

/// Tuning for a flow solve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowOptions {
    pub orientation: FlowOrientation,
    /// Wall-clock cap for the integer program; `None` waits indefinitely.
    pub time_limit: Option<Duration>,
}

/// Directed arc carrying a selection variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowArc {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

/// Solver-independent description of the unit-flow program.
#[derive(Debug, Clone)]
struct FlowProblem {
    node_count: usize,
    arcs: Vec<FlowArc>,
    origin: NodeId,
    destination: NodeId,
}

impl FlowProblem {
    fn new(
        network: &Network,
        origin: NodeId,
        destination: NodeId,
        orientation: FlowOrientation,
    ) -> Self {
        let mut arcs = Vec::with_capacity(match orientation {
            FlowOrientation::Declared => network.edge_count(),
            FlowOrientation::Bidirectional => network.edge_count() * 2,
        });
        for edge in network.edges() {
            arcs.push(FlowArc {
                source: edge.source,
                target: edge.target,
                weight: edge.weight,
            });
            if orientation == FlowOrientation::Bidirectional {
                arcs.push(FlowArc {
                    source: edge.target,
                    target: edge.source,
                    weight: edge.weight,
                });
            }
        }

        Self {
            node_count: network.node_count(),
            arcs,
            origin,
            destination,
        }
    }

    /// Solve the binary program and return one value per arc.
    fn solve_values(&self) -> SolveOutcome {
        let mut vars = ProblemVariables::new();
        let mut objective = Expression::with_capacity(self.arcs.len());
        let mut inflow = vec![Expression::default(); self.node_count];
        let mut outflow = vec![Expression::default(); self.node_count];

        let select: Vec<_> = self
            .arcs
            .iter()
            .map(|arc| {
                let var = vars.add(variable().binary());
                objective.add_mul(arc.weight, var);
                inflow[arc.target].add_mul(1.0, var);
                outflow[arc.source].add_mul(1.0, var);
                var
            })
            .collect();

        let mut problem = vars.minimise(objective).using(microlp);
        for (node, (inflow, outflow)) in inflow.into_iter().zip(outflow).enumerate() {
            let constraint = if node == self.origin {
                (outflow - inflow).eq(1.0)
            } else if node == self.destination {
                (inflow - outflow).eq(1.0)
            } else {
                (inflow - outflow).eq(0.0)
            };
            problem = problem.with(constraint);
        }

        tracing::debug!(
            variables = select.len(),
            constraints = self.node_count,
            "solving unit-flow program"
        );

        let solution = problem.solve()?;
        Ok(select.iter().map(|&var| solution.value(var)).collect())
    }

    /// Solve on a worker thread, giving up after `limit`.
    fn solve_values_within(&self, limit: Duration) -> Result<SolveOutcome> {
        let (sender, receiver) = mpsc::channel();
        let problem = self.clone();
        thread::Builder::new()
            .name("flowroute-lp".to_string())
            .spawn(move || {
                // The receiver is gone once the caller timed out.
                let _ = sender.send(problem.solve_values());
            })?;

        await_outcome(&receiver, limit)
    }
}

/// Raw arc values from the backend, or the reason it gave up.
type SolveOutcome = std::result::Result<Vec<f64>, ResolutionError>;

/// Wait up to `limit` for the worker to report.
fn await_outcome(receiver: &Receiver<SolveOutcome>, limit: Duration) -> Result<SolveOutcome> {
    match receiver.recv_timeout(limit) {
        Ok(outcome) => Ok(outcome),
        Err(RecvTimeoutError::Timeout) => {
            tracing::warn!(limit_ms = limit.as_millis() as u64, "flow solve timed out");
            Err(Error::Timeout { limit })
        }
        Err(RecvTimeoutError::Disconnected) => Err(Error::Solver(
            "solver thread stopped without reporting a result".to_string(),
        )),
    }
}

/// Binary selection value for every flow arc of a solved program.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowAssignment {
    origin: NodeId,
    destination: NodeId,
    arcs: Vec<FlowArc>,
    selected: Vec<bool>,
}

impl FlowAssignment {
    fn from_values(problem: FlowProblem, values: &[f64]) -> Result<Self> {
        let selected = problem
            .arcs
            .iter()
            .zip(values)
            .map(|(arc, &value)| {
                if (value - 1.0).abs() <= BINARY_TOLERANCE {
                    Ok(true)
                } else if value.abs() <= BINARY_TOLERANCE {
                    Ok(false)
                } else {
                    Err(Error::Decode {
                        reason: format!(
                            "arc {} -> {} has non-binary value {value}",
                            arc.source, arc.target
                        ),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            origin: problem.origin,
            destination: problem.destination,
            arcs: problem.arcs,
            selected,
        })
    }

    /// Every arc the program was built over.
    pub fn arcs(&self) -> &[FlowArc] {
        &self.arcs
    }

    /// Arcs switched on by the solution, in variable order.
    pub fn selected_arcs(&self) -> impl Iterator<Item = &FlowArc> {
        self.arcs
            .iter()
            .zip(&self.selected)
            .filter_map(|(arc, &on)| on.then_some(arc))
    }

    /// Total weight of the selected arcs.
    pub fn cost(&self) -> f64 {
        self.selected_arcs().map(|arc| arc.weight).sum()
    }

    /// Chain the selected arcs into a single ordered route from origin to destination.
    pub fn decode(&self, network: &Network) -> Result<Route> {
        let name = |node: NodeId| network.node_name(node).unwrap_or("<unknown>").to_string();
        let mut leaving: Vec<Vec<&FlowArc>> = vec![Vec::new(); network.node_count()];
        let mut selected_count = 0usize;
        for arc in self.selected_arcs() {
            leaving[arc.source].push(arc);
            selected_count += 1;
        }

        let mut visited = vec![false; network.node_count()];
        let mut path = vec![self.origin];
        let mut cost = 0.0;
        let mut current = self.origin;
        visited[current] = true;

        while current != self.destination {
            let arc = match leaving[current].as_slice() {
                [arc] => *arc,
                [] => {
                    return Err(Error::Decode {
                        reason: format!("selected arcs stop at {}", name(current)),
                    })
                }
                _ => {
                    return Err(Error::Decode {
                        reason: format!("more than one selected arc leaves {}", name(current)),
                    })
                }
            };
            if visited[arc.target] {
                return Err(Error::Decode {
                    reason: format!("selected arcs revisit {}", name(arc.target)),
                });
            }
            visited[arc.target] = true;
            path.push(arc.target);
            cost += arc.weight;
            current = arc.target;
        }

        let used = path.len() - 1;
        if used != selected_count {
            return Err(Error::Decode {
                reason: format!(
                    "{} selected arcs lie outside the origin-destination chain",
                    selected_count - used
                ),
            });
        }

        Ok(Route::from_ids(network, &path, cost))
    }
}

/// Builds and solves the unit-flow program for a network.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowOptimizer {
    options: FlowOptions,
}

impl FlowOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FlowOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FlowOptions {
        self.options
    }

    /// Solve the program and return the raw arc selection.
    pub fn assignment(
        &self,
        network: &Network,
        origin: &str,
        destination: &str,
    ) -> Result<FlowAssignment> {
        let infeasible = || Error::Infeasible {
            origin: origin.to_string(),
            destination: destination.to_string(),
        };

        // A node without arcs has an empty balance row, so the program cannot hold.
        let (Some(start), Some(goal)) = (
            network.node_id_by_name(origin),
            network.node_id_by_name(destination),
        ) else {
            return Err(infeasible());
        };

        let problem = FlowProblem::new(network, start, goal, self.options.orientation);
        let outcome = match self.options.time_limit {
            Some(limit) => problem.solve_values_within(limit)?,
            None => problem.solve_values(),
        };
        let values = outcome.map_err(|err| match err {
            ResolutionError::Infeasible => infeasible(),
            other => Error::Solver(other.to_string()),
        })?;

        FlowAssignment::from_values(problem, &values)
    }

    /// Solve the program and decode it into a route.
    pub fn solve(&self, network: &Network, origin: &str, destination: &str) -> Result<Route> {
        if origin == destination && network.contains(origin) {
            return Ok(Route::trivial(origin));
        }

        let assignment = self.assignment(network, origin, destination)?;
        let route = assignment.decode(network)?;
        tracing::debug!(
            origin,
            destination,
            cost = route.cost,
            orientation = ?self.options.orientation,
            "flow optimisation decoded"
        );
        Ok(route)
    }
}

/// Solve the unit-flow program over declared edge orientations.
pub fn optimal_path(network: &Network, origin: &str, destination: &str) -> Result<Route> {
    FlowOptimizer::new().solve(network, origin, destination)
}
