//! Task model (problem instance).
//!
//! An ordered, append-only collection of tasks. Ids are indices: the n-th
//! added task has id `n - 1`.

use serde::{Deserialize, Serialize};

use super::{Position, ScheduledTask, Task, TimeWindow};

/// A problem instance: the candidate tasks for one resource.
///
/// # Example
/// ```
/// use u_select::models::{ScheduledTask, TaskModel};
///
/// let mut model = TaskModel::new();
/// let a = model.add_task(10.0, 5.0, 0.0, 10.0, [0.0; 3]);
/// let b = model.add_task(8.0, 4.0, 0.0, 8.0, [0.0; 3]);
/// assert_eq!((a, b), (0, 1));
///
/// let picked = [ScheduledTask::new(b, 0.0), ScheduledTask::new(a, 4.0)];
/// assert_eq!(model.profit(&picked), 18.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskModel {
    tasks: Vec<Task>,
}

impl TaskModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task and returns its id.
    ///
    /// No validation is performed: malformed tasks (inverted windows,
    /// non-positive durations) are accepted and are simply never feasible
    /// during search. See [`validate_model`](crate::validation::validate_model)
    /// for a strict check.
    pub fn add_task(
        &mut self,
        profit: f64,
        duration: f64,
        window_start: f64,
        window_end: f64,
        position: Position,
    ) -> usize {
        let id = self.tasks.len();
        self.tasks.push(
            Task::new(id, profit, duration, TimeWindow::new(window_start, window_end))
                .with_position(position),
        );
        id
    }

    /// Builder form of [`add_task`](Self::add_task).
    pub fn with_task(
        mut self,
        profit: f64,
        duration: f64,
        window_start: f64,
        window_end: f64,
        position: Position,
    ) -> Self {
        self.add_task(profit, duration, window_start, window_end, position);
        self
    }

    /// All tasks in id order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    pub fn task(&self, id: usize) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the model has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sums the profit of every task referenced in `schedule`.
    ///
    /// Start times, overlaps, duplicates and windows are ignored; only
    /// feasible selections should be passed. Unknown ids contribute nothing.
    pub fn profit(&self, schedule: &[ScheduledTask]) -> f64 {
        self.profit_of(schedule.iter().map(|s| s.task_id))
    }

    /// Sums the profit of the given task ids.
    pub fn profit_of(&self, ids: impl IntoIterator<Item = usize>) -> f64 {
        ids.into_iter()
            .filter_map(|id| self.tasks.get(id))
            .map(|t| t.profit)
            .sum()
    }

    /// Time at which the resource becomes free after executing `sequence`
    /// with the given start times. `None` for an empty prefix.
    pub fn finish_time(&self, sequence: &[usize], start_times: &[f64]) -> Option<f64> {
        let last = *sequence.last()?;
        let start = *start_times.last()?;
        self.tasks.get(last).map(|t| t.finish_time(start))
    }
}
