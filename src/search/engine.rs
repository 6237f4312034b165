//! Best-first branch-and-bound over partial schedules.
//!
//! # Algorithm
//!
//! 1. Push the empty prefix with its bound onto a max-priority frontier.
//! 2. Pop the node with the greatest bound and record it in the trace.
//! 3. If its bound does not exceed the incumbent profit, mark it pruned.
//! 4. Otherwise evaluate the prefix, update the incumbent on strict
//!    improvement, and push one child per unscheduled task that fits at its
//!    earliest start after the prefix.
//! 5. Repeat until the frontier is empty (or a termination condition fires).
//!
//! Children start at `max(finish of last task, window start)`, so every
//! prefix is a non-overlapping, window-feasible schedule.
//!
//! # Complexity
//! Worst case visits every ordered subset of the tasks; the bound keeps the
//! explored part small in practice.
//!
//! # Reference
//! Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::node::{Candidate, Frontier};
use super::termination::TerminationCondition;
use super::{SearchConfig, SearchTrace};
use crate::models::{Schedule, TaskModel};
use crate::validation::{validate_model, ValidationError};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// The frontier was exhausted; the schedule is optimal for the bound
    /// strategy used.
    Exhausted,
    /// A termination condition stopped the search; the schedule is the best
    /// found so far.
    Terminated,
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Best schedule found.
    pub schedule: Schedule,
    /// Profit of `schedule`.
    pub profit: f64,
    /// Popped nodes in order.
    pub trace: SearchTrace,
    /// Why the search stopped.
    pub status: SearchStatus,
}

impl SearchOutcome {
    /// Whether the search ran to exhaustion.
    pub fn is_exhausted(&self) -> bool {
        self.status == SearchStatus::Exhausted
    }
}

/// Errors from [`BranchAndBound::solve_validated`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The model failed strict validation.
    #[error("invalid task model: {} problem(s)", .0.len())]
    InvalidModel(Vec<ValidationError>),
}

/// Best-first branch-and-bound solver.
///
/// # Example
/// ```
/// use u_select::models::TaskModel;
/// use u_select::search::BranchAndBound;
///
/// let mut model = TaskModel::new();
/// model.add_task(10.0, 5.0, 0.0, 10.0, [0.0; 3]);
/// model.add_task(8.0, 4.0, 0.0, 8.0, [0.0; 3]);
/// model.add_task(12.0, 3.0, 5.0, 12.0, [0.0; 3]);
///
/// let outcome = BranchAndBound::new().solve(&model);
/// assert_eq!(outcome.profit, 30.0);
/// assert_eq!(outcome.schedule.as_pairs(), vec![(1, 0.0), (0, 4.0), (2, 9.0)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBound {
    config: SearchConfig,
}

impl BranchAndBound {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search with the limits from the configuration.
    pub fn solve(&self, model: &TaskModel) -> SearchOutcome {
        let mut termination = self.config.termination();
        self.solve_until(model, &mut termination)
    }

    /// Validates the model first and refuses malformed input.
    pub fn solve_validated(&self, model: &TaskModel) -> Result<SearchOutcome, SolveError> {
        validate_model(model).map_err(SolveError::InvalidModel)?;
        Ok(self.solve(model))
    }

    /// Runs the search under an external termination condition.
    ///
    /// Configured node/time limits are ignored; `termination` alone decides.
    pub fn solve_until<T: TerminationCondition>(
        &self,
        model: &TaskModel,
        termination: &mut T,
    ) -> SearchOutcome {
        let bound = self.config.bound;
        let task_count = model.len();
        info!(
            "Branch-and-bound over {task_count} tasks with {} bound",
            bound.name()
        );

        let mut best_profit = 0.0;
        let mut best_schedule = Schedule::new();
        let mut trace = SearchTrace::new();
        let mut frontier = Frontier::new();
        let mut status = SearchStatus::Exhausted;

        frontier.push(Candidate::root(bound.upper_bound(model, &[], &[])));

        while !frontier.is_empty() {
            if termination.should_stop() {
                debug!(
                    "Search terminated early with {} open nodes, best profit {best_profit}",
                    frontier.len()
                );
                status = SearchStatus::Terminated;
                break;
            }
            let Some(candidate) = frontier.pop() else {
                break;
            };
            termination.node_explored();

            if candidate.upper_bound <= best_profit {
                trace!(
                    "Pruned {:?} (bound {} <= {best_profit})",
                    candidate.sequence,
                    candidate.upper_bound
                );
                let mut node = candidate.into_node();
                node.pruned = true;
                trace.record(node, self.config.record_trace);
                continue;
            }

            let profit = model.profit_of(candidate.sequence.iter().copied());
            if profit > best_profit {
                best_profit = profit;
                best_schedule = Schedule::from_parts(&candidate.sequence, &candidate.start_times);
                debug!(
                    "New incumbent {:?} with profit {best_profit}",
                    candidate.sequence
                );
            }

            if candidate.sequence.len() < task_count {
                self.expand(model, &candidate, &mut frontier);
            }

            trace.record(candidate.into_node(), self.config.record_trace);
        }

        let stats = trace.stats();
        info!(
            "Search {:?}: profit {best_profit}, {} tasks scheduled, {} nodes explored, {} pruned",
            status,
            best_schedule.len(),
            stats.explored,
            stats.pruned
        );

        SearchOutcome {
            schedule: best_schedule,
            profit: best_profit,
            trace,
            status,
        }
    }

    /// Pushes one child per unscheduled task that fits after the prefix.
    fn expand(&self, model: &TaskModel, parent: &Candidate, frontier: &mut Frontier) {
        let ready = model.finish_time(&parent.sequence, &parent.start_times);

        for (id, task) in model.tasks().iter().enumerate() {
            if parent.sequence.contains(&id) {
                continue;
            }
            let start = task.earliest_start(ready);
            if !task.fits_at(start) {
                continue;
            }

            let (sequence, start_times) = parent.child(id, start);
            let upper_bound = self.config.bound.upper_bound(model, &sequence, &start_times);
            trace!("Push {sequence:?} with bound {upper_bound}");
            frontier.push(Candidate {
                upper_bound,
                sequence,
                start_times,
            });
        }
    }
}

/// Solves with the default configuration and returns the best schedule and
/// the search trace.
pub fn solve(model: &TaskModel) -> (Schedule, SearchTrace) {
    let outcome = BranchAndBound::new().solve(model);
    (outcome.schedule, outcome.trace)
}
