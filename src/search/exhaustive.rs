//! Exhaustive enumeration of feasible orderings.
//!
//! Visits every ordering of every subset of tasks, chaining starts with the
//! same earliest-start rule as the branch-and-bound engine. Exponential;
//! meant as a reference for verifying the engine on small instances.

use crate::models::{Schedule, TaskModel};

/// Reference solver that tries every feasible ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch;

impl ExhaustiveSearch {
    /// Returns the most profitable schedule and its profit.
    ///
    /// Ties keep the first schedule found in depth-first, id-ascending order.
    pub fn solve(model: &TaskModel) -> (Schedule, f64) {
        let mut state = Enumeration {
            model,
            used: vec![false; model.len()],
            sequence: Vec::with_capacity(model.len()),
            start_times: Vec::with_capacity(model.len()),
            best_profit: 0.0,
            best: Schedule::new(),
        };
        state.visit(None, 0.0);
        (state.best, state.best_profit)
    }
}

struct Enumeration<'a> {
    model: &'a TaskModel,
    used: Vec<bool>,
    sequence: Vec<usize>,
    start_times: Vec<f64>,
    best_profit: f64,
    best: Schedule,
}

impl Enumeration<'_> {
    fn visit(&mut self, ready: Option<f64>, profit: f64) {
        if profit > self.best_profit {
            self.best_profit = profit;
            self.best = Schedule::from_parts(&self.sequence, &self.start_times);
        }

        let model = self.model;
        for (id, task) in model.tasks().iter().enumerate() {
            if self.used[id] {
                continue;
            }
            let start = task.earliest_start(ready);
            if !task.fits_at(start) {
                continue;
            }

            self.used[id] = true;
            self.sequence.push(id);
            self.start_times.push(start);

            self.visit(Some(task.finish_time(start)), profit + task.profit);

            self.start_times.pop();
            self.sequence.pop();
            self.used[id] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_task_optimum() {
        let model = TaskModel::new()
            .with_task(10.0, 5.0, 0.0, 10.0, [0.0; 3])
            .with_task(8.0, 4.0, 0.0, 8.0, [0.0; 3])
            .with_task(12.0, 3.0, 5.0, 12.0, [0.0; 3]);
        let (schedule, profit) = ExhaustiveSearch::solve(&model);
        assert!((profit - 30.0).abs() < 1e-12);
        assert_eq!(schedule.as_pairs(), vec![(1, 0.0), (0, 4.0), (2, 9.0)]);
    }

    #[test]
    fn test_empty() {
        let (schedule, profit) = ExhaustiveSearch::solve(&TaskModel::new());
        assert!(schedule.is_empty());
        assert_eq!(profit, 0.0);
    }

    #[test]
    fn test_result_is_feasible() {
        let model = TaskModel::new()
            .with_task(5.0, 3.0, 0.0, 4.0, [0.0; 3])
            .with_task(6.0, 3.0, 1.0, 5.0, [0.0; 3])
            .with_task(2.0, 1.0, 3.0, 9.0, [0.0; 3]);
        let (schedule, profit) = ExhaustiveSearch::solve(&model);
        assert!(schedule.is_feasible(&model));
        assert!((schedule.profit(&model) - profit).abs() < 1e-12);
    }
}
