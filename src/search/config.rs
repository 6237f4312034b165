//! Search configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::termination::{Combinator, NodeBudget, TimeBudget};
use super::BoundStrategy;

/// Configuration for [`BranchAndBound`](super::BranchAndBound).
///
/// The default runs the admissible relaxation bound to exhaustion and
/// records every popped node.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use u_select::search::{BoundStrategy, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_bound(BoundStrategy::RatioGreedy)
///     .with_node_limit(10_000)
///     .with_time_limit(Duration::from_secs(5));
/// assert_eq!(config.node_limit, Some(10_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper-bound strategy.
    pub bound: BoundStrategy,
    /// Stop after popping this many nodes. `None` = unlimited.
    pub node_limit: Option<u64>,
    /// Stop after this much wall-clock time. `None` = unlimited.
    pub time_limit: Option<Duration>,
    /// Store every popped node in the trace. When `false` only counters
    /// are kept.
    pub record_trace: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bound: BoundStrategy::Relaxation,
            node_limit: None,
            time_limit: None,
            record_trace: true,
        }
    }
}

impl SearchConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bound strategy.
    pub fn with_bound(mut self, bound: BoundStrategy) -> Self {
        self.bound = bound;
        self
    }

    /// Sets the node limit.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Sets the wall-clock limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Enables or disables node recording.
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Termination condition implied by the configured limits.
    ///
    /// The time budget starts counting when this is called.
    pub(crate) fn termination(&self) -> Combinator<Option<NodeBudget>, Option<TimeBudget>> {
        Combinator::new(
            self.node_limit.map(NodeBudget::new),
            self.time_limit.map(TimeBudget::starting_now),
        )
    }
}
