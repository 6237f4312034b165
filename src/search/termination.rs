//! A [`TerminationCondition`] is polled by the search before each node is
//! popped. It lets a caller stop the search early; the incumbent at that
//! point is returned as a possibly non-optimal result. Without one the search
//! runs until the frontier is exhausted.

use std::time::{Duration, Instant};

/// Decides when the search should give up before exhausting the frontier.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called once for every node popped from the frontier.
    fn node_explored(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn node_explored(&mut self) {
        if let Some(t) = self {
            t.node_explored()
        }
    }
}

/// Never stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Stops after a fixed number of popped nodes.
#[derive(Debug, Clone, Copy)]
pub struct NodeBudget {
    budget: u64,
    explored: u64,
}

impl NodeBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            explored: 0,
        }
    }
}

impl TerminationCondition for NodeBudget {
    fn should_stop(&mut self) -> bool {
        self.explored >= self.budget
    }

    fn node_explored(&mut self) {
        self.explored += 1;
    }
}

/// Triggers when the specified time budget has been exceeded.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    /// The point in time from which to measure the budget.
    started_at: Instant,
    /// The amount of time before [`TimeBudget::should_stop()`] becomes true.
    budget: Duration,
}

impl TimeBudget {
    /// Give the search a time budget, starting now.
    pub fn starting_now(budget: Duration) -> TimeBudget {
        TimeBudget {
            started_at: Instant::now(),
            budget,
        }
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> bool {
        self.started_at.elapsed() >= self.budget
    }
}

/// Stops as soon as either condition stops.
#[derive(Debug, Clone, Copy)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }

    fn node_explored(&mut self) {
        self.t1.node_explored();
        self.t2.node_explored();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_budget() {
        let mut budget = NodeBudget::new(2);
        assert!(!budget.should_stop());
        budget.node_explored();
        assert!(!budget.should_stop());
        budget.node_explored();
        assert!(budget.should_stop());
    }

    #[test]
    fn test_zero_node_budget_stops_immediately() {
        assert!(NodeBudget::new(0).should_stop());
    }

    #[test]
    fn test_time_budget_elapsed() {
        let mut budget = TimeBudget::starting_now(Duration::ZERO);
        assert!(budget.should_stop());

        let mut generous = TimeBudget::starting_now(Duration::from_secs(3600));
        assert!(!generous.should_stop());
    }

    #[test]
    fn test_option_passthrough() {
        let mut none: Option<NodeBudget> = None;
        none.node_explored();
        assert!(!none.should_stop());

        let mut some = Some(NodeBudget::new(1));
        some.node_explored();
        assert!(some.should_stop());
    }

    #[test]
    fn test_combinator_stops_on_either() {
        let mut both = Combinator::new(Indefinite, NodeBudget::new(1));
        assert!(!both.should_stop());
        both.node_explored();
        assert!(both.should_stop());
    }
}
