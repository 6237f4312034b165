//! Search nodes and the best-first frontier.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One explored state of the search: a partial schedule.
///
/// Recorded in the trace when popped from the frontier. `pruned` is set
/// once, when the node's bound cannot beat the incumbent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchNode {
    /// Task ids in execution order.
    pub sequence: Vec<usize>,
    /// Start time of each entry in `sequence`.
    pub start_times: Vec<f64>,
    /// Upper bound on profit reachable from this prefix.
    pub upper_bound: f64,
    /// Length of `sequence`.
    pub depth: usize,
    /// Discarded without expansion.
    pub pruned: bool,
}

/// A frontier entry waiting to be popped.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) upper_bound: f64,
    pub(crate) sequence: Vec<usize>,
    pub(crate) start_times: Vec<f64>,
}

impl Candidate {
    pub(crate) fn root(upper_bound: f64) -> Self {
        Self {
            upper_bound,
            sequence: Vec::new(),
            start_times: Vec::new(),
        }
    }

    /// Extends this prefix with `task_id` starting at `start`.
    pub(crate) fn child(&self, task_id: usize, start: f64) -> (Vec<usize>, Vec<f64>) {
        let mut sequence = Vec::with_capacity(self.sequence.len() + 1);
        sequence.extend_from_slice(&self.sequence);
        sequence.push(task_id);

        let mut start_times = Vec::with_capacity(self.start_times.len() + 1);
        start_times.extend_from_slice(&self.start_times);
        start_times.push(start);

        (sequence, start_times)
    }

    pub(crate) fn into_node(self) -> SearchNode {
        SearchNode {
            depth: self.sequence.len(),
            sequence: self.sequence,
            start_times: self.start_times,
            upper_bound: self.upper_bound,
            pruned: false,
        }
    }
}

/// Priority order: higher bound first; on equal bounds the lexicographically
/// smaller sequence, then the smaller start times.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.upper_bound
            .total_cmp(&other.upper_bound)
            .then_with(|| other.sequence.cmp(&self.sequence))
            .then_with(|| cmp_times(&other.start_times, &self.start_times))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Lexicographic total order over start-time vectors.
fn cmp_times(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.total_cmp(y) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Max-priority frontier keyed by upper bound.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Candidate>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, candidate: Candidate) {
        self.heap.push(candidate);
    }

    pub(crate) fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
