//! Branch-and-bound task selection.
//!
//! Finds the most profitable ordered, non-overlapping subset of tasks on a
//! single resource, each executed inside its window.
//!
//! # Algorithm
//!
//! `BranchAndBound` runs a best-first search over partial schedules: the
//! prefix with the highest upper bound is expanded next, and prefixes whose
//! bound cannot beat the incumbent are pruned. Every popped node is logged in
//! a `SearchTrace` for diagnostics.
//!
//! # Bounds
//!
//! `BoundStrategy::Relaxation` (default) is admissible, so the search is
//! exact. `BoundStrategy::RatioGreedy` reproduces the classic ratio-greedy
//! estimate, which can prune the optimal branch.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod bound;
mod config;
mod engine;
mod exhaustive;
mod node;
pub mod termination;
mod trace;

pub use bound::BoundStrategy;
pub use config::SearchConfig;
pub use engine::{solve, BranchAndBound, SearchOutcome, SearchStatus, SolveError};
pub use exhaustive::ExhaustiveSearch;
pub use node::SearchNode;
pub use trace::{DepthStats, SearchTrace, TraceStats};
