//! Task model.
//!
//! A task is one schedulable, non-preemptive unit of work on the single
//! resource: it earns `profit` if executed for `duration` entirely inside
//! its feasibility window.

use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// Opaque 3D position carried for external consumers (e.g. target location
/// of an observation). Plays no role in the search.
pub type Position = [f64; 3];

/// A task to be selected and sequenced.
///
/// Tasks are immutable once added to a [`TaskModel`](super::TaskModel);
/// the `id` is assigned by the model in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Sequential identifier (index into the owning model).
    pub id: usize,
    /// Reward for completing the task.
    pub profit: f64,
    /// Execution time once started.
    pub duration: f64,
    /// Feasible execution interval.
    pub window: TimeWindow,
    /// Opaque position, not used by the search.
    pub position: Position,
}

impl Task {
    /// Creates a task with the given id, profit, duration and window.
    pub fn new(id: usize, profit: f64, duration: f64, window: TimeWindow) -> Self {
        Self {
            id,
            profit,
            duration,
            window,
            position: [0.0; 3],
        }
    }

    /// Sets the position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Window start (earliest allowed start).
    #[inline]
    pub fn window_start(&self) -> f64 {
        self.window.start
    }

    /// Window end (latest allowed finish).
    #[inline]
    pub fn window_end(&self) -> f64 {
        self.window.end
    }

    /// Profit per unit of duration.
    ///
    /// The ratio is undefined for a non-positive duration; the raw profit
    /// is used instead.
    pub fn profit_rate(&self) -> f64 {
        if self.duration > 0.0 {
            self.profit / self.duration
        } else {
            self.profit
        }
    }

    /// Whether the task can execute starting at `start`.
    ///
    /// Non-positive durations are never feasible.
    #[inline]
    pub fn fits_at(&self, start: f64) -> bool {
        self.duration > 0.0 && self.window.fits(start, self.duration)
    }

    /// Earliest start given the time the resource becomes free.
    #[inline]
    pub fn earliest_start(&self, ready: Option<f64>) -> f64 {
        self.window.earliest_start(ready)
    }

    /// Finish time when started at `start`.
    #[inline]
    pub fn finish_time(&self, start: f64) -> f64 {
        start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new(3, 100.0, 30.0, TimeWindow::new(0.0, 60.0))
            .with_position([1.2, 0.2, 0.1]);

        assert_eq!(task.id, 3);
        assert_eq!(task.window_start(), 0.0);
        assert_eq!(task.window_end(), 60.0);
        assert_eq!(task.position, [1.2, 0.2, 0.1]);
        assert_eq!(task.finish_time(10.0), 40.0);
    }

    #[test]
    fn test_profit_rate() {
        let task = Task::new(0, 12.0, 3.0, TimeWindow::new(5.0, 12.0));
        assert!((task.profit_rate() - 4.0).abs() < 1e-12);

        let zero = Task::new(1, 7.0, 0.0, TimeWindow::new(0.0, 1.0));
        assert!((zero.profit_rate() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_fits_at() {
        let task = Task::new(0, 10.0, 5.0, TimeWindow::new(0.0, 10.0));
        assert!(task.fits_at(0.0));
        assert!(task.fits_at(5.0));
        assert!(!task.fits_at(5.1));
    }

    #[test]
    fn test_non_positive_duration_never_fits() {
        let zero = Task::new(0, 10.0, 0.0, TimeWindow::new(0.0, 10.0));
        let negative = Task::new(1, 10.0, -2.0, TimeWindow::new(0.0, 10.0));
        assert!(!zero.fits_at(0.0));
        assert!(!negative.fits_at(5.0));
    }

    #[test]
    fn test_earliest_start_after_ready() {
        let task = Task::new(0, 12.0, 3.0, TimeWindow::new(5.0, 12.0));
        assert_eq!(task.earliest_start(None), 5.0);
        assert_eq!(task.earliest_start(Some(9.0)), 9.0);
    }
}
