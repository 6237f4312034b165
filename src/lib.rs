//! Single-resource task selection with time windows.
//!
//! Given candidate tasks with a profit, a fixed duration and a feasibility
//! window, picks an ordered, non-overlapping subset and start times that
//! maximize total profit. Models one agile platform (e.g. an observation
//! satellite) choosing which time-windowed jobs to execute.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `TimeWindow`, `TaskModel`,
//!   `Schedule`, `ScheduledTask`, `Violation`
//! - **`search`**: Best-first branch-and-bound engine, bound strategies,
//!   termination conditions, search trace, exhaustive reference solver
//! - **`validation`**: Optional strict input checks
//!
//! # Example
//!
//! ```
//! use u_select::models::TaskModel;
//!
//! let mut model = TaskModel::new();
//! model.add_task(10.0, 5.0, 0.0, 10.0, [0.0; 3]);
//! model.add_task(8.0, 4.0, 0.0, 8.0, [0.0; 3]);
//! model.add_task(12.0, 3.0, 5.0, 12.0, [0.0; 3]);
//!
//! let (schedule, trace) = u_select::search::solve(&model);
//! assert_eq!(schedule.task_ids(), vec![1, 0, 2]);
//! assert!(trace.stats().explored > 0);
//! ```
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod search;
pub mod validation;
