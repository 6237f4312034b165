//! Schedule (solution) model.
//!
//! A schedule is an ordered selection of tasks with start times on the
//! single resource. Order is execution order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::TaskModel;

/// A selected task and its start time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScheduledTask {
    /// Selected task id.
    pub task_id: usize,
    /// Start time.
    pub start: f64,
}

impl ScheduledTask {
    /// Creates a new entry.
    pub fn new(task_id: usize, start: f64) -> Self {
        Self { task_id, start }
    }
}

impl From<(usize, f64)> for ScheduledTask {
    fn from((task_id, start): (usize, f64)) -> Self {
        Self::new(task_id, start)
    }
}

/// An ordered, single-resource schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    /// Entries in execution order.
    pub entries: Vec<ScheduledTask>,
}

/// A feasibility violation found by [`Schedule::verify`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Index of the offending entry in the schedule.
    pub position: usize,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Entry references a task id not in the model.
    UnknownTask,
    /// Task appears more than once.
    DuplicateTask,
    /// Execution does not fit the task's window (or duration is non-positive).
    OutsideWindow,
    /// Entry starts before the previous entry finishes.
    Overlap,
}

impl Violation {
    fn new(violation_type: ViolationType, position: usize, message: impl Into<String>) -> Self {
        Self {
            violation_type,
            position,
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from parallel sequence / start-time slices.
    pub fn from_parts(sequence: &[usize], start_times: &[f64]) -> Self {
        Self {
            entries: sequence
                .iter()
                .zip(start_times)
                .map(|(&id, &start)| ScheduledTask::new(id, start))
                .collect(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ScheduledTask) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTask> {
        self.entries.iter()
    }

    /// Task ids in execution order.
    pub fn task_ids(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.task_id).collect()
    }

    /// Entries as `(task_id, start)` pairs.
    pub fn as_pairs(&self) -> Vec<(usize, f64)> {
        self.entries.iter().map(|e| (e.task_id, e.start)).collect()
    }

    /// Total profit of the selected tasks.
    pub fn profit(&self, model: &TaskModel) -> f64 {
        model.profit(&self.entries)
    }

    /// Finish time of the last entry. `None` if empty or the last id is unknown.
    pub fn finish_time(&self, model: &TaskModel) -> Option<f64> {
        let last = self.entries.last()?;
        model.task(last.task_id).map(|t| t.finish_time(last.start))
    }

    /// Checks the schedule against the model.
    ///
    /// Detects unknown ids, repeated tasks, window violations and overlaps
    /// between consecutive entries. Returns every violation found.
    pub fn verify(&self, model: &TaskModel) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut seen = HashSet::new();
        let mut previous_finish: Option<f64> = None;

        for (i, entry) in self.entries.iter().enumerate() {
            let Some(task) = model.task(entry.task_id) else {
                violations.push(Violation::new(
                    ViolationType::UnknownTask,
                    i,
                    format!("Unknown task id {}", entry.task_id),
                ));
                previous_finish = None;
                continue;
            };

            if !seen.insert(entry.task_id) {
                violations.push(Violation::new(
                    ViolationType::DuplicateTask,
                    i,
                    format!("Task {} scheduled more than once", entry.task_id),
                ));
            }

            if !task.fits_at(entry.start) {
                violations.push(Violation::new(
                    ViolationType::OutsideWindow,
                    i,
                    format!(
                        "Task {} at {} (duration {}) does not fit window [{}, {}]",
                        task.id,
                        entry.start,
                        task.duration,
                        task.window_start(),
                        task.window_end()
                    ),
                ));
            }

            if let Some(finish) = previous_finish {
                if entry.start < finish {
                    violations.push(Violation::new(
                        ViolationType::Overlap,
                        i,
                        format!(
                            "Task {} starts at {} before previous finish {}",
                            task.id, entry.start, finish
                        ),
                    ));
                }
            }
            previous_finish = Some(task.finish_time(entry.start));
        }

        violations
    }

    /// Whether [`verify`](Self::verify) finds no violations.
    pub fn is_feasible(&self, model: &TaskModel) -> bool {
        self.verify(model).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> TaskModel {
        TaskModel::new()
            .with_task(10.0, 5.0, 0.0, 10.0, [0.0; 3])
            .with_task(8.0, 4.0, 0.0, 8.0, [0.0; 3])
            .with_task(12.0, 3.0, 5.0, 12.0, [0.0; 3])
    }

    fn optimal_schedule() -> Schedule {
        Schedule::from_parts(&[1, 0, 2], &[0.0, 4.0, 9.0])
    }

    #[test]
    fn test_schedule_profit_and_finish() {
        let model = sample_model();
        let s = optimal_schedule();
        assert!((s.profit(&model) - 30.0).abs() < 1e-12);
        assert_eq!(s.finish_time(&model), Some(12.0));
        assert_eq!(s.task_ids(), vec![1, 0, 2]);
        assert_eq!(s.as_pairs(), vec![(1, 0.0), (0, 4.0), (2, 9.0)]);
    }

    #[test]
    fn test_feasible_schedule() {
        let model = sample_model();
        assert!(optimal_schedule().is_feasible(&model));
        assert!(Schedule::new().is_feasible(&model));
    }

    #[test]
    fn test_overlap_detected() {
        let model = sample_model();
        let s = Schedule::from_parts(&[0, 2], &[0.0, 4.0]);
        let violations = s.verify(&model);
        // Task 2 at 4.0 is also before its window start.
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::Overlap && v.position == 1));
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::OutsideWindow));
    }

    #[test]
    fn test_touching_entries_do_not_overlap() {
        let model = sample_model();
        let s = Schedule::from_parts(&[0, 2], &[0.0, 5.0]);
        assert!(s.is_feasible(&model));
    }

    #[test]
    fn test_duplicate_and_unknown() {
        let model = sample_model();
        let mut s = Schedule::new();
        s.push(ScheduledTask::new(0, 0.0));
        s.push(ScheduledTask::new(0, 5.0));
        s.push((7, 6.0).into());

        let kinds: Vec<ViolationType> = s.verify(&model).iter().map(|v| v.violation_type).collect();
        assert!(kinds.contains(&ViolationType::DuplicateTask));
        assert!(kinds.contains(&ViolationType::UnknownTask));
    }

    #[test]
    fn test_empty_schedule() {
        let model = sample_model();
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.profit(&model), 0.0);
        assert_eq!(s.finish_time(&model), None);
    }
}
